//! Facade for a UI shell
//!
//! [`DevnetClient`] owns the configuration and the RPC collaborator, applies
//! input-boundary policy (airdrop ceiling), and tracks the per-operation
//! "in progress" flag a UI uses to disable its controls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::amount::parse_sol;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::rpc::{HttpRpcClient, RpcClient};
use crate::wallet::WalletConnection;
use crate::workflow::{self, WorkflowResult};

/// User-triggered operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Balance,
    Airdrop,
    Transfer,
}

/// Holds an operation's in-progress flag; cleared on drop
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Entry point for a UI: runs the workflows against one RPC endpoint
pub struct DevnetClient {
    config: ClientConfig,
    rpc: Arc<dyn RpcClient>,
    balance_busy: AtomicBool,
    airdrop_busy: AtomicBool,
    transfer_busy: AtomicBool,
}

impl std::fmt::Debug for DevnetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevnetClient")
            .field("endpoint", &self.config.endpoint())
            .finish_non_exhaustive()
    }
}

impl DevnetClient {
    pub fn new(config: ClientConfig, rpc: Arc<dyn RpcClient>) -> Self {
        Self {
            config,
            rpc,
            balance_busy: AtomicBool::new(false),
            airdrop_busy: AtomicBool::new(false),
            transfer_busy: AtomicBool::new(false),
        }
    }

    /// Client talking JSON-RPC to the configured endpoint
    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let rpc = HttpRpcClient::from_config(&config)?;
        log::info!("using RPC endpoint {}", rpc.url());
        Ok(Self::new(config, Arc::new(rpc)))
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn flag(&self, operation: Operation) -> &AtomicBool {
        match operation {
            Operation::Balance => &self.balance_busy,
            Operation::Airdrop => &self.airdrop_busy,
            Operation::Transfer => &self.transfer_busy,
        }
    }

    /// Whether `operation` is currently running
    pub fn is_busy(&self, operation: Operation) -> bool {
        self.flag(operation).load(Ordering::Acquire)
    }

    pub async fn balance(&self, connection: &WalletConnection) -> WorkflowResult {
        let Some(_guard) = InFlight::acquire(self.flag(Operation::Balance)) else {
            return WorkflowResult::busy();
        };
        workflow::get_balance(connection, self.rpc.as_ref()).await
    }

    /// Airdrop with the configured per-request ceiling applied first
    pub async fn airdrop(&self, connection: &WalletConnection, amount_sol: f64) -> WorkflowResult {
        if !self.config.cluster.has_faucet() && self.config.rpc_url.is_none() {
            let err = ClientError::InvalidInput(format!(
                "airdrops are not available on {}",
                self.config.cluster
            ));
            return WorkflowResult::failed(&err, "");
        }
        if let Err(err) = self.config.check_airdrop_amount(amount_sol) {
            return WorkflowResult::failed(&err, "");
        }

        let Some(_guard) = InFlight::acquire(self.flag(Operation::Airdrop)) else {
            return WorkflowResult::busy();
        };
        workflow::request_airdrop(connection, self.rpc.as_ref(), amount_sol).await
    }

    pub async fn transfer(
        &self,
        connection: &WalletConnection,
        recipient: &str,
        amount_sol: f64,
    ) -> WorkflowResult {
        let Some(_guard) = InFlight::acquire(self.flag(Operation::Transfer)) else {
            return WorkflowResult::busy();
        };
        workflow::send_sol(connection, self.rpc.as_ref(), recipient, amount_sol).await
    }

    /// [`transfer`](Self::transfer) with an exact lamport amount
    pub async fn transfer_lamports(
        &self,
        connection: &WalletConnection,
        recipient: &str,
        lamports: u64,
    ) -> WorkflowResult {
        let Some(_guard) = InFlight::acquire(self.flag(Operation::Transfer)) else {
            return WorkflowResult::busy();
        };
        workflow::send_lamports(connection, self.rpc.as_ref(), recipient, lamports).await
    }

    /// Explorer link for a result that carries a transaction signature
    pub fn explorer_url(&self, result: &WorkflowResult) -> Option<String> {
        result
            .signature()
            .map(|signature| self.config.explorer_tx_url(signature))
    }
}

/// Text inputs of a send form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferForm {
    pub recipient: String,
    pub amount: String,
}

impl TransferForm {
    pub fn new(recipient: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            amount: amount.into(),
        }
    }

    /// Both fields filled in
    pub fn can_submit(&self) -> bool {
        !self.recipient.trim().is_empty() && !self.amount.trim().is_empty()
    }

    /// Parse the amount, send, and clear the inputs only if the send
    /// succeeded.
    pub async fn submit(
        &mut self,
        client: &DevnetClient,
        connection: &WalletConnection,
    ) -> WorkflowResult {
        let lamports = match parse_sol(&self.amount) {
            Ok(lamports) => lamports,
            Err(err) => return WorkflowResult::failed(&err, ""),
        };

        let result = client
            .transfer_lamports(connection, &self.recipient, lamports)
            .await;

        if result.is_success() {
            self.recipient.clear();
            self.amount.clear();
        }
        result
    }
}
