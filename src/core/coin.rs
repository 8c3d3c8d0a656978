//! Coin identity: the Move type tag plus display metadata.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A coin supported by the funding flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinType {
    /// Canonical Move type tag, e.g. `0x2::sui::SUI`.
    pub type_tag: String,
    pub symbol: String,
    pub decimals: u8,
}

impl CoinType {
    pub fn new(type_tag: &str, symbol: &str, decimals: u8) -> Self {
        Self {
            type_tag: type_tag.to_string(),
            symbol: symbol.to_string(),
            decimals,
        }
    }

    /// The native SUI coin (9 decimals).
    pub fn sui() -> Self {
        Self::new("0x2::sui::SUI", "SUI", 9)
    }

    /// Looks a coin up by its display symbol.
    ///
    /// Returns `None` for symbols the app does not support yet; the create
    /// and contribute forms surface that as a validation error rather than
    /// guessing a type tag.
    pub fn from_symbol(symbol: &str) -> Option<CoinType> {
        SUPPORTED_COINS.get(symbol).cloned()
    }
}

static SUPPORTED_COINS: Lazy<HashMap<&'static str, CoinType>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("SUI", CoinType::sui());
    map
});
