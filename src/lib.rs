pub mod core;
pub mod chain;

// Re-export commonly used types for convenience
pub use self::core::campaign::{Campaign, CampaignCatalog, CampaignId};
pub use self::core::forms::{ContributionForm, CreateCampaignForm, FormError};
pub use self::core::sui_amount::{AmountError, SuiAmount, MIST_PER_SUI};
pub use self::chain::{BalanceState, BalanceWatcher, ChainClient, NetworkConfig};
