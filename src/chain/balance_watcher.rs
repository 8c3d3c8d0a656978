//! Single-flight balance fetch keyed by the connected account.
//!
//! Whenever the connected account changes, at most one fetch is logically
//! current: a newer identity change supersedes any in-flight fetch, whose
//! result is then discarded. Fetch failures degrade to an unknown balance
//! instead of propagating to the display surface.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::warn;

use crate::core::address::SuiAddress;
use crate::core::coin::CoinType;
use crate::core::sui_amount::SuiAmount;
use super::chain_client::{ChainClient, ChainClientError};

/// Where balances come from. Implemented by [`ChainClient`]; tests swap in
/// a stub.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    async fn balance(
        &self,
        owner: &SuiAddress,
        coin: &CoinType,
    ) -> Result<SuiAmount, ChainClientError>;
}

#[async_trait]
impl BalanceSource for ChainClient {
    async fn balance(
        &self,
        owner: &SuiAddress,
        coin: &CoinType,
    ) -> Result<SuiAmount, ChainClientError> {
        self.get_balance_async(owner, coin).await
    }
}

/// Observable balance of the currently connected account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceState {
    /// No account connected, or the last fetch failed.
    Unknown,
    /// A fetch for the current account is in flight.
    Loading,
    Known(SuiAmount),
}

impl BalanceState {
    pub fn is_loading(&self) -> bool {
        matches!(self, BalanceState::Loading)
    }

    /// Display string for the balance, `"0"` while unknown or loading.
    pub fn display_amount(&self) -> String {
        match self {
            BalanceState::Known(amount) => amount.human(),
            _ => "0".to_string(),
        }
    }
}

/// Watches the balance of whichever account is currently connected.
pub struct BalanceWatcher {
    source: Arc<dyn BalanceSource>,
    coin: CoinType,
    /// Bumped on every account change; a fetch only publishes while its
    /// generation is still current.
    generation: Arc<AtomicU64>,
    state: Arc<watch::Sender<BalanceState>>,
}

impl BalanceWatcher {
    /// Creates a watcher and its first subscription.
    pub fn new(
        source: Arc<dyn BalanceSource>,
        coin: CoinType,
    ) -> (Self, watch::Receiver<BalanceState>) {
        let (tx, rx) = watch::channel(BalanceState::Unknown);
        let watcher = Self {
            source,
            coin,
            generation: Arc::new(AtomicU64::new(0)),
            state: Arc::new(tx),
        };
        (watcher, rx)
    }

    pub fn subscribe(&self) -> watch::Receiver<BalanceState> {
        self.state.subscribe()
    }

    /// Reacts to an account change.
    ///
    /// `None` (disconnect) publishes [`BalanceState::Unknown`]. `Some`
    /// publishes [`BalanceState::Loading`] and spawns a fetch on the
    /// ambient Tokio runtime; must be called from within one.
    pub fn set_account(&self, account: Option<SuiAddress>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(owner) = account else {
            let _ = self.state.send(BalanceState::Unknown);
            return;
        };

        let _ = self.state.send(BalanceState::Loading);

        let source = Arc::clone(&self.source);
        let coin = self.coin.clone();
        let counter = Arc::clone(&self.generation);
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            let result = source.balance(&owner, &coin).await;

            let next = match result {
                Ok(balance) => BalanceState::Known(balance),
                Err(e) => {
                    warn!(owner = %owner, error = %e, "Balance fetch failed");
                    BalanceState::Unknown
                }
            };

            // The staleness check runs under the channel lock, so a result
            // from a superseded generation is never published.
            state.send_if_modified(|current| {
                if counter.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *current = next;
                true
            });
        });
    }
}
