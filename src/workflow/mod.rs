//! Balance, airdrop and transfer workflows
//!
//! Each workflow is a single async call that reads the wallet connection,
//! talks to the [`RpcClient`](crate::rpc::RpcClient), and returns a fresh
//! [`WorkflowResult`]. Nothing is retried; the caller re-invokes on demand.

mod balance;
mod faucet;
mod transfer;

pub use balance::get_balance;
pub use faucet::{request_airdrop, AirdropStage};
pub use transfer::{build_transfer_instruction, send_lamports, send_sol};

use crate::amount::lamports_to_sol;
use crate::error::{bounded, ClientError, ErrorKind};
use crate::sdk_adapter::Signature;

/// Outcome of one workflow invocation
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowResult {
    /// Nothing has run yet
    #[default]
    Idle,
    Success {
        message: String,
        signature: Option<Signature>,
        /// Balance read or amount moved, in lamports
        lamports: Option<u64>,
    },
    Error {
        kind: ErrorKind,
        message: String,
    },
}

impl WorkflowResult {
    pub(crate) fn failed(err: &ClientError, context: &str) -> Self {
        let message = match err {
            ClientError::Rpc(_) | ClientError::Confirmation(_) => {
                format!("{context}: {}", bounded(&err.to_string()))
            }
            _ => err.to_string(),
        };
        WorkflowResult::Error {
            kind: err.kind(),
            message,
        }
    }

    pub fn busy() -> Self {
        WorkflowResult::Error {
            kind: ErrorKind::Busy,
            message: "request already in progress".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, WorkflowResult::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, WorkflowResult::Error { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            WorkflowResult::Idle => None,
            WorkflowResult::Success { message, .. } | WorkflowResult::Error { message, .. } => {
                Some(message)
            }
        }
    }

    pub fn signature(&self) -> Option<&Signature> {
        match self {
            WorkflowResult::Success { signature, .. } => signature.as_ref(),
            _ => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            WorkflowResult::Error { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn lamports(&self) -> Option<u64> {
        match self {
            WorkflowResult::Success { lamports, .. } => *lamports,
            _ => None,
        }
    }

    /// Lamport amount of a successful result, in SOL
    pub fn sol(&self) -> Option<f64> {
        self.lamports().map(lamports_to_sol)
    }
}
