pub mod address;
pub mod campaign;
pub mod coin;
pub mod digest;
pub mod forms;
pub mod sui_amount;
pub mod transaction_effects;
pub mod base_types; // Re-exports from the modules above
