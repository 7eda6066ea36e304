//! JSON-RPC over HTTP

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::types::{LatestBlockhash, RpcRequest, RpcResponse, SignatureStatus, WithContext};
use super::{CommitmentLevel, Confirmation, RpcClient};
use crate::config::ClientConfig;
use crate::error::RpcError;
use crate::sdk_adapter::{Hash, Pubkey, Signature, Transaction};
use crate::wallet::SolanaSigner;

/// [`RpcClient`] speaking Solana JSON-RPC 2.0 to a single endpoint
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: String,
    commitment: CommitmentLevel,
    confirm_timeout: Duration,
    poll_interval: Duration,
    next_id: AtomicU64,
}

impl std::fmt::Debug for HttpRpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRpcClient")
            .field("url", &self.url)
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

impl HttpRpcClient {
    /// Create a client for `url` with default timeouts
    pub fn new(url: impl Into<String>) -> Self {
        let defaults = ClientConfig::default();
        // Builder only fails when the TLS backend cannot load
        let client = reqwest::Client::builder()
            .timeout(defaults.request_timeout())
            .build()
            .unwrap_or_default();
        Self {
            client,
            url: url.into(),
            commitment: defaults.commitment,
            confirm_timeout: defaults.confirm_timeout(),
            poll_interval: defaults.poll_interval(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, RpcError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            url: config.endpoint().to_string(),
            commitment: config.commitment,
            confirm_timeout: config.confirm_timeout(),
            poll_interval: config.poll_interval(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn with_confirm_timeout(mut self, timeout: Duration) -> Self {
        self.confirm_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, RpcError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        log::debug!("RPC {method} -> {}", self.url);

        let response = self.client.post(&self.url).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            #[cfg(feature = "unsafe-debug")]
            log::error!("RPC {method} error - status: {status}, response: {body}");

            #[cfg(not(feature = "unsafe-debug"))]
            log::error!("RPC {method} error - status: {status}");

            // Rate limiters answer with a JSON-RPC error body, keep its message
            if let Ok(RpcResponse {
                error: Some(error), ..
            }) = serde_json::from_str::<RpcResponse<Value>>(&body)
            {
                return Err(RpcError::Node {
                    code: error.code,
                    message: error.message,
                });
            }
            return Err(RpcError::Http(format!("{method} returned HTTP {status}")));
        }

        let parsed: RpcResponse<T> = serde_json::from_str(&body)?;

        if let Some(error) = parsed.error {
            #[cfg(feature = "unsafe-debug")]
            log::error!("RPC {method} node error - response: {body}");

            log::error!("RPC {method} node error {}", error.code);
            return Err(RpcError::Node {
                code: error.code,
                message: error.message,
            });
        }

        parsed
            .result
            .ok_or_else(|| RpcError::InvalidResponse(format!("{method}: missing result")))
    }

    /// Blockhash to stamp on a transaction before signing
    pub async fn get_latest_blockhash(&self) -> Result<Hash, RpcError> {
        let response: WithContext<LatestBlockhash> = self
            .call(
                "getLatestBlockhash",
                json!([{ "commitment": self.commitment }]),
            )
            .await?;

        Hash::from_str(&response.value.blockhash)
            .map_err(|e| RpcError::InvalidResponse(format!("bad blockhash: {e}")))
    }

    async fn get_signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<SignatureStatus>, RpcError> {
        let response: WithContext<Vec<Option<SignatureStatus>>> = self
            .call(
                "getSignatureStatuses",
                json!([[signature.to_string()], { "searchTransactionHistory": false }]),
            )
            .await?;

        Ok(response.value.into_iter().next().flatten())
    }

    /// Poll the signature status until it fails or reaches the commitment.
    /// Unbounded; callers apply the confirmation deadline.
    async fn poll_confirmation(&self, signature: &Signature) -> Result<Confirmation, RpcError> {
        loop {
            if let Some(status) = self.get_signature_status(signature).await? {
                if let Some(err) = status.err {
                    return Ok(Confirmation::failed(err.to_string()));
                }
                if status.reached(self.commitment) {
                    return Ok(Confirmation::succeeded());
                }
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

fn parse_signature(value: &str) -> Result<Signature, RpcError> {
    Signature::from_str(value)
        .map_err(|e| RpcError::InvalidResponse(format!("bad signature {value}: {e}")))
}

#[async_trait]
impl RpcClient for HttpRpcClient {
    async fn get_balance(
        &self,
        address: &Pubkey,
        commitment: CommitmentLevel,
    ) -> Result<u64, RpcError> {
        let response: WithContext<u64> = self
            .call(
                "getBalance",
                json!([address.to_string(), { "commitment": commitment }]),
            )
            .await?;
        Ok(response.value)
    }

    async fn request_airdrop(
        &self,
        address: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, RpcError> {
        let signature: String = self
            .call(
                "requestAirdrop",
                json!([address.to_string(), lamports, { "commitment": self.commitment }]),
            )
            .await?;
        parse_signature(&signature)
    }

    async fn confirm_transaction(&self, signature: &Signature) -> Result<Confirmation, RpcError> {
        match tokio::time::timeout(self.confirm_timeout, self.poll_confirmation(signature)).await {
            Ok(result) => result,
            Err(_) => Err(RpcError::Timeout(format!(
                "transaction {signature} not {} within {} ms",
                self.commitment,
                self.confirm_timeout.as_millis()
            ))),
        }
    }

    async fn send_transaction(
        &self,
        mut transaction: Transaction,
        signer: &dyn SolanaSigner,
    ) -> Result<Signature, RpcError> {
        transaction.message.recent_blockhash = self.get_latest_blockhash().await?;

        let (encoded, local_signature) = signer.sign_transaction(&mut transaction).await?;

        let returned: String = self
            .call(
                "sendTransaction",
                json!([encoded, {
                    "encoding": "base64",
                    "preflightCommitment": self.commitment,
                }]),
            )
            .await?;

        let signature = parse_signature(&returned)?;
        if signature != local_signature {
            log::warn!("node returned signature {signature}, signed {local_signature}");
        }
        Ok(signature)
    }
}
