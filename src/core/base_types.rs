//! Base types module that re-exports all core types.
//!
//! This module provides a convenient way to import the value types used
//! throughout the SDK from a single location.

pub use super::address::{AddressError, SuiAddress};

pub use super::campaign::{Campaign, CampaignCatalog, CampaignId};

pub use super::coin::CoinType;

pub use super::digest::{DigestError, TransactionDigest};

pub use super::forms::{
    ContributionForm, ContributionRequest, CreateCampaignForm, CreateCampaignRequest, FormError,
    MAX_TARGET_SUI,
};

pub use super::sui_amount::{AmountError, SuiAmount, MIST_PER_SUI, SUI_DECIMALS};

pub use super::transaction_effects::{
    EffectsError, ExecutionStatus, GasSummary, TransactionEffects,
};
