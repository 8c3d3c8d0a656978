use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use suifund::chain::balance_watcher::{BalanceSource, BalanceState, BalanceWatcher};
use suifund::chain::chain_client::ChainClientError;
use suifund::core::address::SuiAddress;
use suifund::core::coin::CoinType;
use suifund::core::sui_amount::SuiAmount;

/// Fake full node: slow for the first account, quick for the second.
struct DemoSource;

#[async_trait]
impl BalanceSource for DemoSource {
    async fn balance(
        &self,
        owner: &SuiAddress,
        _coin: &CoinType,
    ) -> Result<SuiAmount, ChainClientError> {
        if owner.as_str().ends_with('1') {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Ok(SuiAmount::new(1_500_000_000))
        } else {
            tokio::time::sleep(Duration::from_millis(30)).await;
            Ok(SuiAmount::new(42_000_000_000))
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let first = SuiAddress::from_string(
        "0x0000000000000000000000000000000000000000000000000000000000000001",
    )
    .unwrap();
    let second = SuiAddress::from_string(
        "0x0000000000000000000000000000000000000000000000000000000000000002",
    )
    .unwrap();

    let (watcher, mut state) = BalanceWatcher::new(Arc::new(DemoSource), CoinType::sui());

    // Connect the first account, then switch before its fetch lands: the
    // slow result is discarded and the second account's balance wins.
    watcher.set_account(Some(first));
    tokio::time::sleep(Duration::from_millis(10)).await;
    watcher.set_account(Some(second));

    loop {
        let current = state.borrow_and_update().clone();
        println!("balance: {:?} (display {:?})", current, current.display_amount());
        if let BalanceState::Known(_) = current {
            break;
        }
        state.changed().await.expect("watcher still alive");
    }
}
