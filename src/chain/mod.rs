pub mod balance_watcher;
pub mod chain_client;
pub(crate) mod digest_polling;
pub mod network;
pub mod rpc_url;
pub mod signer;
pub mod transaction_builder;

pub use balance_watcher::{BalanceSource, BalanceState, BalanceWatcher};
pub use chain_client::{ChainClient, ChainClientCreationError, ChainClientError};
pub use network::{ConfigError, Network, NetworkConfig};
pub use rpc_url::{RpcUrl, RpcUrlError};
pub use signer::{SignedTransaction, SignerError, TransactionSigner};
pub use transaction_builder::{
    CampaignTransactions, MoveCall, MoveCallBuilder, TransactionBuildError, TransactionData,
};
