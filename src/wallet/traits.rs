//! Signing capability attached to a connected wallet

use async_trait::async_trait;

use crate::error::SignerError;
use crate::sdk_adapter::{Pubkey, Signature, Transaction};

/// Base64-encoded signed transaction plus the signer's signature
pub type SignedTransaction = (String, Signature);

/// Trait for signing Solana transactions
///
/// The wallet collaborator owns the keys; the workflows only ever see this
/// trait, so any backend (browser wallet bridge, hardware device, in-memory
/// keypair) can be plugged in.
#[async_trait]
pub trait SolanaSigner: Send + Sync {
    /// Get the public key of this signer
    fn pubkey(&self) -> Pubkey;

    /// Sign a Solana transaction
    ///
    /// # Arguments
    ///
    /// * `tx` - The transaction to sign (will be modified in place). Its
    ///   recent blockhash must already be set.
    ///
    /// # Returns
    ///
    /// The base64 wire encoding of the signed transaction and the signature
    async fn sign_transaction(&self, tx: &mut Transaction)
        -> Result<SignedTransaction, SignerError>;

    /// Sign an arbitrary message
    async fn sign_message(&self, message: &[u8]) -> Result<Signature, SignerError>;

    /// Check if the signer is available and healthy
    async fn is_available(&self) -> bool;
}
