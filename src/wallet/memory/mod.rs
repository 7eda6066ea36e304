//! Memory-based local keypair signer

mod keypair_util;

use crate::{
    error::SignerError,
    sdk_adapter::{keypair_from_bytes, keypair_pubkey, Keypair, Pubkey, Signature, Signer as SdkSigner, Transaction},
    transaction_util::TransactionUtil,
    wallet::traits::{SignedTransaction, SolanaSigner},
};

use keypair_util::KeypairUtil;

/// A Solana-based signer that uses an in-memory keypair
pub struct MemorySigner {
    keypair: Keypair,
}

impl std::fmt::Debug for MemorySigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySigner")
            .field("pubkey", &self.keypair.pubkey())
            .finish_non_exhaustive()
    }
}

impl MemorySigner {
    /// Creates a new signer from a Solana keypair
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Creates a signer with a freshly generated keypair
    pub fn generate() -> Self {
        Self::new(Keypair::new())
    }

    /// Creates a new signer from a private key byte array
    pub fn from_bytes(private_key: &[u8]) -> Result<Self, SignerError> {
        let keypair = keypair_from_bytes(private_key).map_err(|e| {
            SignerError::InvalidPrivateKey(format!("Invalid private key bytes: {e}"))
        })?;
        Ok(Self { keypair })
    }

    /// Creates a new signer from a private key string that can be in multiple formats:
    /// - Base58 encoded string
    /// - U8Array format: "[0, 1, 2, ...]"
    /// - File path to a JSON keypair file
    pub fn from_private_key_string(private_key: &str) -> Result<Self, SignerError> {
        let keypair = KeypairUtil::from_private_key_string(private_key)?;
        Ok(Self::new(keypair))
    }
}

#[async_trait::async_trait]
impl SolanaSigner for MemorySigner {
    fn pubkey(&self) -> Pubkey {
        keypair_pubkey(&self.keypair)
    }

    async fn sign_transaction(
        &self,
        tx: &mut Transaction,
    ) -> Result<SignedTransaction, SignerError> {
        let recent_blockhash = tx.message.recent_blockhash;
        tx.try_sign(&[&self.keypair], recent_blockhash)
            .map_err(|e| SignerError::SigningFailed(e.to_string()))?;

        let position = TransactionUtil::get_signing_keypair_position(tx, &self.pubkey())?;
        let signature = tx.signatures[position];

        Ok((TransactionUtil::serialize_transaction(tx)?, signature))
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        Ok(self.keypair.sign_message(message))
    }

    async fn is_available(&self) -> bool {
        true
    }
}
