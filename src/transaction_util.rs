use crate::error::SignerError;
use crate::sdk_adapter::{Pubkey, Transaction};
use base64::{engine::general_purpose::STANDARD, Engine};

pub struct TransactionUtil;

impl TransactionUtil {
    /// Encodes a Transaction to the base64 wire format accepted by `sendTransaction`
    pub fn serialize_transaction(transaction: &Transaction) -> Result<String, SignerError> {
        Ok(
            STANDARD.encode(bincode::serialize(transaction).map_err(|e| {
                SignerError::SerializationError(format!("Failed to serialize transaction: {e}"))
            })?),
        )
    }

    /// Decodes a base64 wire transaction
    pub fn deserialize_transaction(encoded: &str) -> Result<Transaction, SignerError> {
        let bytes = STANDARD.decode(encoded).map_err(|e| {
            SignerError::SerializationError(format!("Failed to decode transaction: {e}"))
        })?;
        bincode::deserialize(&bytes).map_err(|e| {
            SignerError::SerializationError(format!("Failed to deserialize transaction: {e}"))
        })
    }

    /// Get the position of a pubkey in the transaction's signing keypair positions.
    /// Returns the index where this signer's signature should be placed.
    pub fn get_signing_keypair_position(
        transaction: &Transaction,
        pubkey: &Pubkey,
    ) -> Result<usize, SignerError> {
        let num_required_signatures = transaction.message.header.num_required_signatures as usize;

        if transaction.message.account_keys.len() < num_required_signatures {
            return Err(SignerError::SigningFailed(
                "Invalid account index: not enough account keys".to_string(),
            ));
        }

        let signed_keys = &transaction.message.account_keys[0..num_required_signatures];

        signed_keys.iter().position(|x| x == pubkey).ok_or_else(|| {
            SignerError::SigningFailed(format!(
                "Pubkey {} not found in transaction signers",
                pubkey
            ))
        })
    }
}
