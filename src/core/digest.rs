//! Transaction digest value type.

use std::fmt;
use thiserror::Error;

// Bitcoin-style base58: no 0, O, I, l.
const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("Transaction digest is empty")]
    EmptyDigest,

    #[error("Transaction digest must be 32-44 base58 characters, got {0} characters: {1}")]
    InvalidLength(usize, String),

    #[error("Transaction digest contains a character outside the base58 alphabet: {0:?}")]
    InvalidCharacter(char),
}

/// A Sui transaction digest: the base58 rendering of a 32-byte hash.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TransactionDigest {
    value: String,
}

impl TransactionDigest {
    pub fn from_string(s: &str) -> Result<Self, DigestError> {
        if s.is_empty() {
            return Err(DigestError::EmptyDigest);
        }
        if s.len() < 32 || s.len() > 44 {
            return Err(DigestError::InvalidLength(s.len(), s.to_string()));
        }
        if let Some(bad) = s.chars().find(|c| !BASE58_ALPHABET.contains(*c)) {
            return Err(DigestError::InvalidCharacter(bad));
        }
        Ok(Self {
            value: s.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for TransactionDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for TransactionDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransactionDigest(\"{}\")", self.value)
    }
}
