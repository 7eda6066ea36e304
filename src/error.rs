//! Error types for wallet, RPC and workflow operations

use std::fmt;
use thiserror::Error;

/// Upper bound on network detail embedded in user-facing messages
pub const MAX_DETAIL_LEN: usize = 200;

/// Errors that can occur during signing operations
#[derive(Error)]
pub enum SignerError {
    /// Invalid private key format
    #[error("Invalid private key format: {0}")]
    InvalidPrivateKey(String),

    /// Signing operation failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SignerError {
    fn from(err: serde_json::Error) -> Self {
        SignerError::SerializationError(err.to_string())
    }
}

// Custom Debug implementation to prevent leaking key material
impl fmt::Debug for SignerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignerError::InvalidPrivateKey(_) => {
                write!(f, "SignerError::InvalidPrivateKey([REDACTED])")
            }
            SignerError::SigningFailed(_) => write!(f, "SignerError::SigningFailed([REDACTED])"),
            SignerError::SerializationError(_) => {
                write!(f, "SignerError::SerializationError([REDACTED])")
            }
        }
    }
}

/// A string that does not decode to a 32-byte account address
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid Solana address: {reason}")]
pub struct InvalidAddressError {
    pub reason: String,
}

impl InvalidAddressError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors raised by an [`RpcClient`](crate::rpc::RpcClient) implementation
#[derive(Error, Debug)]
pub enum RpcError {
    /// Transport failure or non-success HTTP status
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON-RPC error object returned by the node
    #[error("RPC error {code}: {message}")]
    Node { code: i64, message: String },

    /// Response could not be decoded
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    /// Operation did not finish within its deadline
    #[error("Timed out: {0}")]
    Timeout(String),

    /// The wallet refused or failed to sign
    #[error(transparent)]
    Signing(#[from] SignerError),
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RpcError::Timeout(err.to_string())
        } else {
            RpcError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        RpcError::InvalidResponse(err.to_string())
    }
}

/// Errors that terminate a workflow invocation
#[derive(Error, Debug)]
pub enum ClientError {
    /// No wallet address available
    #[error("wallet not connected")]
    NotConnected,

    /// Wallet address known but no signing capability attached
    #[error("wallet cannot sign transactions")]
    CannotSign,

    /// Malformed address or out-of-range amount
    #[error("{0}")]
    InvalidInput(String),

    /// Transport, network or node failure during an RPC call
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The network reported the submitted transaction failed on-chain
    #[error("transaction failed on-chain: {0}")]
    Confirmation(String),
}

/// Category of a failed workflow, as shown to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotConnected,
    InvalidInput,
    Rpc,
    Confirmation,
    /// Another request of the same kind is still in flight
    Busy,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::NotConnected | ClientError::CannotSign => ErrorKind::NotConnected,
            ClientError::InvalidInput(_) => ErrorKind::InvalidInput,
            ClientError::Rpc(_) => ErrorKind::Rpc,
            ClientError::Confirmation(_) => ErrorKind::Confirmation,
        }
    }
}

impl From<InvalidAddressError> for ClientError {
    fn from(err: InvalidAddressError) -> Self {
        ClientError::InvalidInput(err.to_string())
    }
}

/// Truncate network-provided detail so it is safe to show to a user.
pub fn bounded(detail: &str) -> String {
    if detail.chars().count() <= MAX_DETAIL_LEN {
        return detail.to_string();
    }
    let mut out: String = detail.chars().take(MAX_DETAIL_LEN).collect();
    out.push('…');
    out
}
