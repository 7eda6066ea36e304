//! JSON-RPC wire types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::CommitmentLevel;

#[derive(Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

#[derive(Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

// Responses of the form {"context": {...}, "value": ...}
#[derive(Deserialize)]
pub struct WithContext<T> {
    pub value: T,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestBlockhash {
    pub blockhash: String,
    #[allow(dead_code)]
    pub last_valid_block_height: u64,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignatureStatus {
    #[allow(dead_code)]
    pub slot: u64,
    pub confirmations: Option<u64>,
    pub err: Option<Value>,
    pub confirmation_status: Option<CommitmentLevel>,
}

impl SignatureStatus {
    /// Whether the transaction has reached `target` depth.
    ///
    /// Nodes that predate `confirmationStatus` report `confirmations: null`
    /// once a transaction is rooted.
    pub fn reached(&self, target: CommitmentLevel) -> bool {
        match self.confirmation_status {
            Some(level) => level >= target,
            None => self.confirmations.is_none(),
        }
    }
}
