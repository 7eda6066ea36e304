//! Adapter for Solana SDK v3.x

// Re-export core types from solana-sdk v3
pub use solana_sdk_v3::hash::Hash;
pub use solana_sdk_v3::instruction::{AccountMeta, Instruction};
pub use solana_sdk_v3::message::Message;
pub use solana_sdk_v3::pubkey::Pubkey;
pub use solana_sdk_v3::signature::{Keypair, Signature};
pub use solana_sdk_v3::signer::Signer;
pub use solana_sdk_v3::transaction::Transaction;

/// Parse a keypair from bytes (v3 adapter)
pub fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair, String> {
    Keypair::try_from(bytes).map_err(|e| format!("Invalid keypair bytes: {}", e))
}

/// Get the public key from a keypair (v3 adapter)
pub fn keypair_pubkey(keypair: &Keypair) -> Pubkey {
    keypair.pubkey()
}
