use std::env;

use suifund::chain::chain_client::ChainClient;
use suifund::chain::network::NetworkConfig;
use suifund::core::address::SuiAddress;
use suifund::core::campaign::CampaignCatalog;
use suifund::core::coin::CoinType;
use suifund::core::sui_amount::SuiAmount;

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = NetworkConfig::from_env().expect("Invalid network configuration");
    println!("Network: {}", config.network);
    match &config.crowdfunding_package_id {
        Some(id) => println!("Crowdfunding package: {}", id),
        None => println!("Crowdfunding package: not configured"),
    }

    let catalog = CampaignCatalog::sample();
    println!("\nCampaigns ({}):", catalog.len());
    for campaign in catalog.all() {
        println!(
            "  #{} {} (by {}): {} of {} ({}% funded)",
            campaign.id,
            campaign.title,
            campaign.creator,
            campaign.raised,
            campaign.target,
            campaign.progress_percent(),
        );
    }

    if let Ok(address) = env::var("WALLET_ADDRESS") {
        let address = SuiAddress::from_string(&address).expect("Invalid WALLET_ADDRESS");
        let client = ChainClient::from_config(&config)
            .expect("Failed to create ChainClient: invalid RPC URLs");
        match client.get_balance(&address, &CoinType::sui()) {
            Ok(balance) => println!("\n{} balance: {}", address, balance),
            Err(e) => {
                // Degrade like the balance display does: unknown renders as 0.
                eprintln!("Balance fetch failed: {}", e);
                println!("\n{} balance: {} SUI", address, SuiAmount::format_balance(None));
            }
        }
    }
}
