//! Wallet signing boundary.
//!
//! Signing belongs to the connected wallet, not this crate: the SDK hands
//! a [`TransactionData`] across this trait and gets back opaque, already
//! serialized bytes and signatures. No key material ever enters the crate.

use thiserror::Error;

use crate::core::address::SuiAddress;
use super::transaction_builder::TransactionData;

#[derive(Error, Debug)]
pub enum SignerError {
    #[error("No wallet is connected")]
    NotConnected,

    #[error("Wallet rejected the transaction: {0}")]
    Rejected(String),

    #[error("Wallet failed to sign: {0}")]
    SigningFailed(String),
}

/// A signed transaction as the wallet returns it: base64 BCS transaction
/// bytes plus one signature per required signer.
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    pub tx_bytes: String,
    pub signatures: Vec<String>,
}

/// The external wallet collaborator.
///
/// Implementations wrap a browser wallet, a hardware device, or a test
/// stub; the SDK only ever calls through this interface.
pub trait TransactionSigner {
    /// The connected account, used as the transaction sender.
    fn address(&self) -> Result<SuiAddress, SignerError>;

    fn sign(&self, tx: &TransactionData) -> Result<SignedTransaction, SignerError>;
}
