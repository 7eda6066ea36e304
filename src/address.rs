//! Account address validation
//!
//! A Solana address is the base-58 encoding of a raw 32-byte public key.
//! Anything that does not decode to exactly 32 bytes is rejected here, before
//! it can reach the RPC layer.

use crate::error::InvalidAddressError;
use crate::sdk_adapter::Pubkey;

/// Length in bytes of a decoded address
pub const ADDRESS_BYTES: usize = 32;

/// Longest base-58 string that can encode 32 bytes
pub const MAX_ADDRESS_LEN: usize = 44;

/// Validate a user-supplied address string and return the decoded key.
pub fn validate(input: &str) -> Result<Pubkey, InvalidAddressError> {
    if input.is_empty() {
        return Err(InvalidAddressError::new("address is empty"));
    }
    if input.len() > MAX_ADDRESS_LEN {
        return Err(InvalidAddressError::new(format!(
            "address is {} characters, at most {} allowed",
            input.len(),
            MAX_ADDRESS_LEN
        )));
    }

    let bytes = bs58::decode(input)
        .into_vec()
        .map_err(|e| InvalidAddressError::new(format!("base58 decode failed: {e}")))?;

    let bytes: [u8; ADDRESS_BYTES] = bytes.try_into().map_err(|v: Vec<u8>| {
        InvalidAddressError::new(format!(
            "expected {} bytes, got {}",
            ADDRESS_BYTES,
            v.len()
        ))
    })?;

    Ok(Pubkey::new_from_array(bytes))
}
