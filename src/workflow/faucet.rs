use std::fmt;

use crate::amount::sol_to_lamports;
use crate::error::ClientError;
use crate::rpc::RpcClient;
use crate::sdk_adapter::{Pubkey, Signature};
use crate::wallet::WalletConnection;

use super::WorkflowResult;

const AIRDROP_FAILED: &str = "failed to request airdrop";

/// Progress of an airdrop request, logged at each transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirdropStage {
    Validating,
    Requesting,
    Confirming,
}

impl fmt::Display for AirdropStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AirdropStage::Validating => "validating",
            AirdropStage::Requesting => "requesting",
            AirdropStage::Confirming => "confirming",
        };
        f.write_str(name)
    }
}

/// Request `amount_sol` of test SOL for the connected wallet and wait for
/// the airdrop to land.
///
/// The per-request ceiling is not enforced here; see
/// [`ClientConfig::check_airdrop_amount`](crate::config::ClientConfig::check_airdrop_amount).
pub async fn request_airdrop(
    connection: &WalletConnection,
    rpc: &dyn RpcClient,
    amount_sol: f64,
) -> WorkflowResult {
    let mut stage = AirdropStage::Validating;

    match airdrop(connection, rpc, amount_sol, &mut stage).await {
        Ok((signature, lamports)) => {
            log::info!("airdropped {lamports} lamports, signature {signature}");
            WorkflowResult::Success {
                message: format!("airdropped {amount_sol} SOL (signature {signature})"),
                signature: Some(signature),
                lamports: Some(lamports),
            }
        }
        Err(err) => {
            match err {
                ClientError::Rpc(_) | ClientError::Confirmation(_) => {
                    log::error!("airdrop failed while {stage}: {err}")
                }
                _ => log::warn!("airdrop rejected: {err}"),
            }
            WorkflowResult::failed(&err, AIRDROP_FAILED)
        }
    }
}

async fn airdrop(
    connection: &WalletConnection,
    rpc: &dyn RpcClient,
    amount_sol: f64,
    stage: &mut AirdropStage,
) -> Result<(Signature, u64), ClientError> {
    let address: Pubkey = connection.address().ok_or(ClientError::NotConnected)?;

    // Also rejects NaN
    if !(amount_sol > 0.0) {
        return Err(ClientError::InvalidInput("invalid amount".to_string()));
    }
    let lamports = sol_to_lamports(amount_sol)?;

    *stage = AirdropStage::Requesting;
    log::debug!("airdrop {stage}: {lamports} lamports to {address}");
    let signature = rpc.request_airdrop(&address, lamports).await?;

    *stage = AirdropStage::Confirming;
    log::debug!("airdrop {stage}: {signature}");
    let confirmation = rpc.confirm_transaction(&signature).await?;

    if let Some(err) = confirmation.err {
        return Err(ClientError::Confirmation(err));
    }

    Ok((signature, lamports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::rpc::Confirmation;
    use crate::test_util::{mock_signature, MockRpc, Reply};

    fn connected() -> WalletConnection {
        WalletConnection::watch_only(Pubkey::new_unique())
    }

    #[tokio::test]
    async fn test_not_connected() {
        let rpc = MockRpc::new();
        let result = request_airdrop(&WalletConnection::disconnected(), &rpc, 1.0).await;

        assert_eq!(result.message(), Some("wallet not connected"));
        assert_eq!(rpc.call_count(), 0);
    }

    #[tokio::test]
    async fn test_zero_amount_makes_no_rpc_call() {
        let rpc = MockRpc::new();
        let result = request_airdrop(&connected(), &rpc, 0.0).await;

        assert_eq!(result.message(), Some("invalid amount"));
        assert_eq!(result.error_kind(), Some(ErrorKind::InvalidInput));
        assert_eq!(rpc.call_count(), 0);
    }

    #[tokio::test]
    async fn test_negative_and_nan_amounts_rejected() {
        let rpc = MockRpc::new();
        assert!(request_airdrop(&connected(), &rpc, -2.0).await.is_error());
        assert!(request_airdrop(&connected(), &rpc, f64::NAN).await.is_error());
        assert!(request_airdrop(&connected(), &rpc, 1e-12).await.is_error());
        assert_eq!(rpc.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success() {
        let rpc = MockRpc::new();
        let conn = connected();

        let result = request_airdrop(&conn, &rpc, 5.0).await;

        assert!(result.is_success());
        let message = result.message().unwrap();
        assert!(message.contains("airdropped 5 SOL"));
        assert!(message.contains(&mock_signature().to_string()));
        assert_eq!(result.signature(), Some(&mock_signature()));
        assert_eq!(result.lamports(), Some(5_000_000_000));

        // request then confirm
        assert_eq!(rpc.call_count(), 2);
        let airdrops = rpc.airdrops.lock().unwrap();
        assert_eq!(
            *airdrops,
            vec![(conn.address().unwrap(), 5_000_000_000)]
        );
    }

    #[tokio::test]
    async fn test_decimal_amount_is_exact() {
        let rpc = MockRpc::new();
        let result = request_airdrop(&connected(), &rpc, 0.1).await;

        assert!(result.is_success());
        assert_eq!(rpc.airdrops.lock().unwrap()[0].1, 100_000_000);
    }

    #[tokio::test]
    async fn test_request_failure_skips_confirmation() {
        let rpc = MockRpc::new().with_airdrop(Reply::Fail("429 Too Many Requests".into()));

        let result = request_airdrop(&connected(), &rpc, 1.0).await;

        assert_eq!(result.error_kind(), Some(ErrorKind::Rpc));
        let message = result.message().unwrap();
        assert!(message.starts_with("failed to request airdrop"));
        assert!(message.contains("429 Too Many Requests"));
        assert_eq!(rpc.call_count(), 1);
    }

    #[tokio::test]
    async fn test_onchain_failure_embeds_network_error() {
        let rpc = MockRpc::new().with_confirmation(Reply::Ok(Confirmation::failed(
            "{\"InstructionError\":[0,\"InsufficientFunds\"]}",
        )));

        let result = request_airdrop(&connected(), &rpc, 1.0).await;

        assert_eq!(result.error_kind(), Some(ErrorKind::Confirmation));
        assert!(result.message().unwrap().contains("InsufficientFunds"));
        assert!(result.signature().is_none());
    }

    #[tokio::test]
    async fn test_confirmation_timeout_is_rpc_error() {
        let rpc = MockRpc::new().with_confirmation(Reply::Fail("timed out".into()));

        let result = request_airdrop(&connected(), &rpc, 1.0).await;

        assert_eq!(result.error_kind(), Some(ErrorKind::Rpc));
        assert_eq!(rpc.call_count(), 2);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(AirdropStage::Confirming.to_string(), "confirming");
    }
}
