//! RPC collaborator interface
//!
//! Workflows reach the network only through [`RpcClient`]. The crate ships
//! [`HttpRpcClient`], a JSON-RPC 2.0 implementation; tests substitute fakes.

mod http;
mod types;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RpcError;
use crate::sdk_adapter::{Pubkey, Signature, Transaction};
use crate::wallet::SolanaSigner;

pub use http::HttpRpcClient;

/// Confirmation depth requested when reading state or waiting on a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentLevel {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl CommitmentLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitmentLevel::Processed => "processed",
            CommitmentLevel::Confirmed => "confirmed",
            CommitmentLevel::Finalized => "finalized",
        }
    }
}

impl fmt::Display for CommitmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitmentLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "processed" => Ok(CommitmentLevel::Processed),
            "confirmed" => Ok(CommitmentLevel::Confirmed),
            "finalized" => Ok(CommitmentLevel::Finalized),
            other => Err(format!("unknown commitment level: {other}")),
        }
    }
}

/// Outcome of waiting for a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Confirmation {
    /// Network-level failure reported for the transaction, if any
    pub err: Option<String>,
}

impl Confirmation {
    pub fn succeeded() -> Self {
        Self { err: None }
    }

    pub fn failed(err: impl Into<String>) -> Self {
        Self {
            err: Some(err.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.err.is_none()
    }
}

/// Network operations the workflows depend on
#[async_trait]
pub trait RpcClient: Send + Sync {
    /// Balance of `address` in lamports at the given commitment
    async fn get_balance(
        &self,
        address: &Pubkey,
        commitment: CommitmentLevel,
    ) -> Result<u64, RpcError>;

    /// Ask the cluster faucet to credit `lamports` to `address`
    async fn request_airdrop(&self, address: &Pubkey, lamports: u64)
        -> Result<Signature, RpcError>;

    /// Wait until `signature` is included or fails.
    ///
    /// Implementations must bound the wait and return [`RpcError::Timeout`]
    /// rather than block forever.
    async fn confirm_transaction(&self, signature: &Signature) -> Result<Confirmation, RpcError>;

    /// Attach a recent blockhash, have `signer` sign, and submit.
    async fn send_transaction(
        &self,
        transaction: Transaction,
        signer: &dyn SolanaSigner,
    ) -> Result<Signature, RpcError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commitment_parse_and_display() {
        assert_eq!(
            "Confirmed".parse::<CommitmentLevel>().unwrap(),
            CommitmentLevel::Confirmed
        );
        assert_eq!(CommitmentLevel::Finalized.to_string(), "finalized");
        assert!("rooted".parse::<CommitmentLevel>().is_err());
    }

    #[test]
    fn test_commitment_ordering() {
        assert!(CommitmentLevel::Processed < CommitmentLevel::Confirmed);
        assert!(CommitmentLevel::Confirmed < CommitmentLevel::Finalized);
        assert_eq!(CommitmentLevel::default(), CommitmentLevel::Confirmed);
    }

    #[test]
    fn test_commitment_serde() {
        let json = serde_json::to_string(&CommitmentLevel::Processed).unwrap();
        assert_eq!(json, "\"processed\"");
        let level: CommitmentLevel = serde_json::from_str("\"finalized\"").unwrap();
        assert_eq!(level, CommitmentLevel::Finalized);
    }
}
