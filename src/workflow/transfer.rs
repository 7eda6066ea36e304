use crate::address;
use crate::amount::{format_sol, sol_to_lamports, SOL_DECIMALS};
use crate::error::ClientError;
use crate::rpc::RpcClient;
use crate::sdk_adapter::{system_program_id, AccountMeta, Instruction, Message, Pubkey, Signature, Transaction};
use crate::wallet::WalletConnection;

use super::WorkflowResult;

const TRANSFER_FAILED: &str = "transaction failed";

/// System program instruction index for `Transfer`
const SYSTEM_TRANSFER: u32 = 2;

/// System program instruction moving `lamports` from `from` to `to`.
///
/// `from` must sign; both accounts are writable.
pub fn build_transfer_instruction(from: &Pubkey, to: &Pubkey, lamports: u64) -> Instruction {
    let mut data = Vec::with_capacity(12);
    data.extend_from_slice(&SYSTEM_TRANSFER.to_le_bytes());
    data.extend_from_slice(&lamports.to_le_bytes());

    Instruction {
        program_id: system_program_id(),
        accounts: vec![AccountMeta::new(*from, true), AccountMeta::new(*to, false)],
        data,
    }
}

/// Amount as entered: a SOL float or an exact lamport count
#[derive(Debug, Clone, Copy)]
enum Amount {
    Sol(f64),
    Lamports(u64),
}

impl Amount {
    fn is_positive(&self) -> bool {
        match *self {
            // Also rejects NaN
            Amount::Sol(sol) => sol > 0.0,
            Amount::Lamports(lamports) => lamports > 0,
        }
    }

    fn lamports(&self) -> Result<u64, ClientError> {
        match *self {
            Amount::Sol(sol) => sol_to_lamports(sol),
            Amount::Lamports(lamports) => Ok(lamports),
        }
    }
}

/// SOL amount for messages, without trailing zeros
fn display_sol(lamports: u64) -> String {
    let formatted = format_sol(lamports, SOL_DECIMALS);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Send `amount_sol` from the connected wallet to `recipient`.
///
/// Inputs are checked in order (wallet, recipient present, amount, recipient
/// format) and nothing reaches the network until all pass. Transfers are not
/// idempotent, so a failed submission is never retried.
pub async fn send_sol(
    connection: &WalletConnection,
    rpc: &dyn RpcClient,
    recipient: &str,
    amount_sol: f64,
) -> WorkflowResult {
    send(connection, rpc, recipient, Amount::Sol(amount_sol)).await
}

/// [`send_sol`] with an exact lamport amount, e.g. from [`parse_sol`](crate::amount::parse_sol)
pub async fn send_lamports(
    connection: &WalletConnection,
    rpc: &dyn RpcClient,
    recipient: &str,
    lamports: u64,
) -> WorkflowResult {
    send(connection, rpc, recipient, Amount::Lamports(lamports)).await
}

async fn send(
    connection: &WalletConnection,
    rpc: &dyn RpcClient,
    recipient: &str,
    amount: Amount,
) -> WorkflowResult {
    match transfer(connection, rpc, recipient, amount).await {
        Ok((signature, lamports)) => {
            log::info!("sent {lamports} lamports to {}, signature {signature}", recipient.trim());
            WorkflowResult::Success {
                message: format!(
                    "sent {} SOL to {}, signature {signature}",
                    display_sol(lamports),
                    recipient.trim()
                ),
                signature: Some(signature),
                lamports: Some(lamports),
            }
        }
        Err(err) => {
            match err {
                ClientError::Rpc(_) => log::error!("transfer failed: {err}"),
                _ => log::warn!("transfer rejected: {err}"),
            }
            WorkflowResult::failed(&err, TRANSFER_FAILED)
        }
    }
}

async fn transfer(
    connection: &WalletConnection,
    rpc: &dyn RpcClient,
    recipient: &str,
    amount: Amount,
) -> Result<(Signature, u64), ClientError> {
    let from = connection.address().ok_or(ClientError::NotConnected)?;
    let signer = connection.signer().ok_or(ClientError::CannotSign)?;

    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(ClientError::InvalidInput(
            "recipient address is required".to_string(),
        ));
    }

    if !amount.is_positive() {
        return Err(ClientError::InvalidInput(
            "amount must be greater than 0".to_string(),
        ));
    }

    let to = address::validate(recipient)?;
    let lamports = amount.lamports()?;

    let instruction = build_transfer_instruction(&from, &to, lamports);
    let transaction = Transaction::new_unsigned(Message::new(&[instruction], Some(&from)));

    log::debug!("submitting transfer of {lamports} lamports {from} -> {to}");
    let signature = rpc.send_transaction(transaction, signer).await?;

    Ok((signature, lamports))
}
