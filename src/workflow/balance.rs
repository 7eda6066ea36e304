use crate::amount::{format_sol, SOL_DECIMALS};
use crate::error::{ClientError, ErrorKind};
use crate::rpc::{CommitmentLevel, RpcClient};
use crate::wallet::WalletConnection;

use super::WorkflowResult;

const BALANCE_FAILED: &str = "failed to fetch balance";

/// Read the connected wallet's balance at `confirmed` commitment.
///
/// RPC failures are logged and reported with a generic message; transport
/// detail is not passed through.
pub async fn get_balance(connection: &WalletConnection, rpc: &dyn RpcClient) -> WorkflowResult {
    let Some(address) = connection.address() else {
        log::warn!("balance requested without a connected wallet");
        return WorkflowResult::failed(&ClientError::NotConnected, BALANCE_FAILED);
    };

    log::debug!("fetching balance for {address}");

    match rpc.get_balance(&address, CommitmentLevel::Confirmed).await {
        Ok(lamports) => WorkflowResult::Success {
            message: format!("{} SOL", format_sol(lamports, SOL_DECIMALS)),
            signature: None,
            lamports: Some(lamports),
        },
        Err(e) => {
            log::error!("balance query for {address} failed: {e}");
            WorkflowResult::Error {
                kind: ErrorKind::Rpc,
                message: BALANCE_FAILED.to_string(),
            }
        }
    }
}
