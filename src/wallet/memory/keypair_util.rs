//! Private key parsing for the in-memory signer

use crate::error::SignerError;
use crate::sdk_adapter::{keypair_from_bytes, Keypair};
use std::fs;
use std::path::Path;

const PRIVATE_KEY_LENGTH: usize = 64;

/// Where a private key string came from
#[derive(Debug, PartialEq, Eq)]
enum KeySource {
    /// Path to a `solana-keygen` style JSON file
    File,
    /// Inline JSON byte array, e.g. `[12, 34, ...]`
    ByteArray,
    /// Base58 string as exported by browser wallets
    Base58,
}

fn detect(private_key: &str) -> KeySource {
    let trimmed = private_key.trim();
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        KeySource::ByteArray
    } else if Path::new(trimmed).is_file() {
        KeySource::File
    } else {
        KeySource::Base58
    }
}

fn keypair_from_vec(bytes: Vec<u8>) -> Result<Keypair, SignerError> {
    if bytes.len() != PRIVATE_KEY_LENGTH {
        return Err(SignerError::InvalidPrivateKey(format!(
            "expected {} bytes, got {}",
            PRIVATE_KEY_LENGTH,
            bytes.len()
        )));
    }
    keypair_from_bytes(&bytes)
        .map_err(|e| SignerError::InvalidPrivateKey(format!("Invalid private key bytes: {e}")))
}

/// Parse private keys given as a file path, byte array, or base58 string
pub struct KeypairUtil;

impl KeypairUtil {
    pub fn from_private_key_string(private_key: &str) -> Result<Keypair, SignerError> {
        match detect(private_key) {
            KeySource::ByteArray => Self::from_json_bytes(private_key.trim()),
            KeySource::File => {
                let content = fs::read_to_string(private_key.trim()).map_err(|e| {
                    SignerError::InvalidPrivateKey(format!("Failed to read keypair file: {e}"))
                })?;
                Self::from_json_bytes(&content)
            }
            KeySource::Base58 => Self::from_base58(private_key.trim()),
        }
    }

    /// Keypair from a JSON array of 64 bytes (inline or file content)
    pub fn from_json_bytes(json: &str) -> Result<Keypair, SignerError> {
        let bytes: Vec<u8> = serde_json::from_str(json).map_err(|e| {
            SignerError::InvalidPrivateKey(format!("Expected a JSON array of 64 bytes: {e}"))
        })?;
        keypair_from_vec(bytes)
    }

    /// Keypair from a base58-encoded 64-byte secret
    pub fn from_base58(private_key: &str) -> Result<Keypair, SignerError> {
        let bytes = bs58::decode(private_key)
            .into_vec()
            .map_err(|e| SignerError::InvalidPrivateKey(format!("Invalid base58 string: {e}")))?;
        keypair_from_vec(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk_adapter::keypair_pubkey;
    use crate::test_util::{TEST_KEYPAIR_BASE58, TEST_KEYPAIR_BYTES, TEST_PUBKEY};

    #[test]
    fn test_detect_source() {
        assert_eq!(detect(TEST_KEYPAIR_BYTES), KeySource::ByteArray);
        assert_eq!(detect(TEST_KEYPAIR_BASE58), KeySource::Base58);
    }

    #[test]
    fn test_from_byte_array() {
        let keypair = KeypairUtil::from_private_key_string(TEST_KEYPAIR_BYTES).unwrap();
        assert_eq!(keypair_pubkey(&keypair).to_string(), TEST_PUBKEY);
    }

    #[test]
    fn test_from_base58() {
        let keypair = KeypairUtil::from_private_key_string(TEST_KEYPAIR_BASE58).unwrap();
        assert_eq!(keypair_pubkey(&keypair).to_string(), TEST_PUBKEY);
    }

    #[test]
    fn test_from_keypair_file() {
        let path = std::env::temp_dir().join(format!("devnet-client-key-{}.json", std::process::id()));
        fs::write(&path, TEST_KEYPAIR_BYTES).unwrap();

        let keypair = KeypairUtil::from_private_key_string(path.to_str().unwrap()).unwrap();
        assert_eq!(keypair_pubkey(&keypair).to_string(), TEST_PUBKEY);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_rejects_short_array() {
        let result = KeypairUtil::from_private_key_string("[1,2,3]");
        assert!(matches!(result, Err(SignerError::InvalidPrivateKey(_))));
    }

    #[test]
    fn test_rejects_non_numeric_array() {
        assert!(KeypairUtil::from_private_key_string("[not,a,number]").is_err());
        assert!(KeypairUtil::from_private_key_string("[]").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(KeypairUtil::from_private_key_string("clearly-not-a-valid-key").is_err());
        assert!(KeypairUtil::from_json_bytes("{\"not\": \"an array\"}").is_err());
    }
}
