//! Solana devnet wallet client
//!
//! Validates addresses, reads balances, requests faucet airdrops and sends
//! SOL on behalf of a connected wallet. Workflows talk to the network only
//! through the [`RpcClient`] trait; [`HttpRpcClient`] is the JSON-RPC
//! implementation and [`DevnetClient`] the facade a UI drives.
//!
//! # Features
//!
//! ## SDK Version Selection
//! - `sdk-v2` (default): Use Solana SDK v2.3.x
//! - `sdk-v3`: Use Solana SDK v3.x
//!
//! **Note**: Only one SDK version can be enabled at a time.
//!
//! ## Diagnostics
//! - `unsafe-debug`: log full JSON-RPC error bodies
//! - `integration-tests`: run tests against `SOLANA_RPC_URL`

pub mod address;
pub mod amount;
pub mod client;
pub mod config;
pub mod error;
pub mod rpc;
pub mod sdk_adapter;
#[cfg(test)]
pub mod test_util;
#[cfg(all(test, feature = "integration-tests"))]
pub mod tests;
pub mod transaction_util;
pub mod wallet;
pub mod workflow;

// Re-export core types
pub use client::{DevnetClient, Operation, TransferForm};
pub use config::{ClientConfig, Cluster};
pub use error::{ClientError, ErrorKind, InvalidAddressError, RpcError, SignerError};
pub use rpc::{CommitmentLevel, Confirmation, HttpRpcClient, RpcClient};
pub use wallet::{MemorySigner, SolanaSigner, WalletConnection};
pub use workflow::{get_balance, request_airdrop, send_lamports, send_sol, WorkflowResult};
