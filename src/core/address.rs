//! Sui account/object address with validation.
//!
//! Sui addresses are 32 bytes rendered as `0x` + 64 hex characters. Unlike
//! Ethereum there is no checksum casing, so addresses are normalized to
//! lowercase on construction and compared directly.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Address must start with '0x', got: {0}")]
    MissingPrefix(String),

    #[error("Address must be 66 characters (0x + 64 hex chars), got {0} characters: {1}")]
    InvalidLength(usize, String),

    #[error("Address contains invalid hex characters: {0}")]
    InvalidHexCharacters(String),

    #[error("Address must decode to exactly 32 bytes, got {0} bytes")]
    InvalidByteLength(usize),
}

/// A validated Sui address, stored lowercase.
///
/// Package ids share the same representation on Sui and reuse this type.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SuiAddress {
    value: String,
}

impl SuiAddress {
    /// Parses and normalizes an address string.
    ///
    /// # Examples
    /// ```
    /// # use suifund::core::address::SuiAddress;
    /// let addr = SuiAddress::from_string(
    ///     "0x0000000000000000000000000000000000000000000000000000000000000002",
    /// )?;
    /// assert!(addr.as_str().starts_with("0x"));
    /// # Ok::<(), suifund::core::address::AddressError>(())
    /// ```
    pub fn from_string(s: &str) -> Result<Self, AddressError> {
        if !s.starts_with("0x") {
            return Err(AddressError::MissingPrefix(s.to_string()));
        }

        if s.len() != 66 {
            return Err(AddressError::InvalidLength(s.len(), s.to_string()));
        }

        let hex_part = &s[2..];
        if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidHexCharacters(s.to_string()));
        }

        let bytes = hex::decode(hex_part)
            .map_err(|_| AddressError::InvalidHexCharacters(s.to_string()))?;
        if bytes.len() != 32 {
            return Err(AddressError::InvalidByteLength(bytes.len()));
        }

        Ok(SuiAddress {
            value: s.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuiAddress(\"{}\")", self.value)
    }
}
