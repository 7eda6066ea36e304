//! Client configuration
//!
//! The RPC endpoint is opaque to the workflows; it only matters to the HTTP
//! collaborator built from this config.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::rpc::CommitmentLevel;
use crate::sdk_adapter::Signature;

pub const SOLANA_RPC_URL: &str = "SOLANA_RPC_URL";
pub const SOLANA_CLUSTER: &str = "SOLANA_CLUSTER";
pub const SOLANA_COMMITMENT: &str = "SOLANA_COMMITMENT";
pub const SOLANA_CONFIRM_TIMEOUT_MS: &str = "SOLANA_CONFIRM_TIMEOUT_MS";
pub const SOLANA_MAX_AIRDROP_SOL: &str = "SOLANA_MAX_AIRDROP_SOL";

pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";
pub const TESTNET_RPC_URL: &str = "https://api.testnet.solana.com";
pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const LOCAL_VALIDATOR_RPC_URL: &str = "http://localhost:8899";

const EXPLORER_URL: &str = "https://explorer.solana.com";

/// Per-request airdrop ceiling observed on the public devnet faucet
pub const DEFAULT_MAX_AIRDROP_SOL: f64 = 10.0;
pub const DEFAULT_CONFIRM_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Well-known Solana clusters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
}

impl Cluster {
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Cluster::Devnet => DEVNET_RPC_URL,
            Cluster::Testnet => TESTNET_RPC_URL,
            Cluster::MainnetBeta => MAINNET_RPC_URL,
            Cluster::Localnet => LOCAL_VALIDATOR_RPC_URL,
        }
    }

    /// Query string selecting this cluster on the explorer
    fn explorer_query(&self) -> &'static str {
        match self {
            Cluster::Devnet => "?cluster=devnet",
            Cluster::Testnet => "?cluster=testnet",
            Cluster::MainnetBeta => "",
            Cluster::Localnet => "?cluster=custom&customUrl=http%3A%2F%2Flocalhost%3A8899",
        }
    }

    /// Airdrops are only served by test clusters
    pub fn has_faucet(&self) -> bool {
        !matches!(self, Cluster::MainnetBeta)
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Localnet => "localnet",
        };
        f.write_str(name)
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            "mainnet" | "mainnet-beta" => Ok(Cluster::MainnetBeta),
            "localnet" | "localhost" => Ok(Cluster::Localnet),
            other => Err(format!("unknown cluster: {other}")),
        }
    }
}

/// Explorer link for a transaction signature
pub fn explorer_tx_url(signature: &Signature, cluster: Cluster) -> String {
    format!("{EXPLORER_URL}/tx/{signature}{}", cluster.explorer_query())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub cluster: Cluster,
    /// Overrides the cluster's default endpoint
    pub rpc_url: Option<String>,
    pub commitment: CommitmentLevel,
    pub confirm_timeout_ms: u64,
    pub poll_interval_ms: u64,
    pub request_timeout_ms: u64,
    pub max_airdrop_sol: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::default(),
            rpc_url: None,
            commitment: CommitmentLevel::default(),
            confirm_timeout_ms: DEFAULT_CONFIRM_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            max_airdrop_sol: DEFAULT_MAX_AIRDROP_SOL,
        }
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, ClientError>
where
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ClientError::InvalidInput(format!("{key}: {e}")))
}

impl ClientConfig {
    pub fn for_cluster(cluster: Cluster) -> Self {
        Self {
            cluster,
            ..Self::default()
        }
    }

    /// Load `.env` if present, then read `SOLANA_*` variables over the defaults
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(cluster) = lookup(SOLANA_CLUSTER) {
            config.cluster = parse_var(SOLANA_CLUSTER, &cluster)?;
        }
        if let Some(url) = lookup(SOLANA_RPC_URL) {
            let url = url.trim();
            if !url.is_empty() {
                config.rpc_url = Some(url.to_string());
            }
        }
        if let Some(commitment) = lookup(SOLANA_COMMITMENT) {
            config.commitment = parse_var(SOLANA_COMMITMENT, &commitment)?;
        }
        if let Some(timeout) = lookup(SOLANA_CONFIRM_TIMEOUT_MS) {
            config.confirm_timeout_ms = parse_var(SOLANA_CONFIRM_TIMEOUT_MS, &timeout)?;
        }
        if let Some(max) = lookup(SOLANA_MAX_AIRDROP_SOL) {
            config.max_airdrop_sol = parse_var(SOLANA_MAX_AIRDROP_SOL, &max)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.confirm_timeout_ms == 0 || self.poll_interval_ms == 0 || self.request_timeout_ms == 0
        {
            return Err(ClientError::InvalidInput(
                "timeouts and poll interval must be greater than zero".to_string(),
            ));
        }
        if !self.max_airdrop_sol.is_finite() || self.max_airdrop_sol <= 0.0 {
            return Err(ClientError::InvalidInput(format!(
                "max airdrop must be a positive number, got {}",
                self.max_airdrop_sol
            )));
        }
        Ok(())
    }

    /// Endpoint URL handed to the RPC collaborator
    pub fn endpoint(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.cluster.rpc_url())
    }

    pub fn confirm_timeout(&self) -> Duration {
        Duration::from_millis(self.confirm_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn explorer_tx_url(&self, signature: &Signature) -> String {
        explorer_tx_url(signature, self.cluster)
    }

    /// Enforce the per-request airdrop ceiling at the input boundary
    pub fn check_airdrop_amount(&self, amount_sol: f64) -> Result<(), ClientError> {
        if amount_sol > self.max_airdrop_sol {
            return Err(ClientError::InvalidInput(format!(
                "maximum {} SOL per airdrop request",
                self.max_airdrop_sol
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.cluster, Cluster::Devnet);
        assert_eq!(config.endpoint(), DEVNET_RPC_URL);
        assert_eq!(config.commitment, CommitmentLevel::Confirmed);
        assert_eq!(config.max_airdrop_sol, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            (SOLANA_CLUSTER, "testnet"),
            (SOLANA_COMMITMENT, "finalized"),
            (SOLANA_CONFIRM_TIMEOUT_MS, "1500"),
            (SOLANA_MAX_AIRDROP_SOL, "2.5"),
        ]))
        .unwrap();

        assert_eq!(config.cluster, Cluster::Testnet);
        assert_eq!(config.endpoint(), TESTNET_RPC_URL);
        assert_eq!(config.commitment, CommitmentLevel::Finalized);
        assert_eq!(config.confirm_timeout(), Duration::from_millis(1500));
        assert_eq!(config.max_airdrop_sol, 2.5);
    }

    #[test]
    fn test_rpc_url_overrides_cluster_endpoint() {
        let config =
            ClientConfig::from_lookup(lookup(&[(SOLANA_RPC_URL, "http://127.0.0.1:9000")])).unwrap();
        assert_eq!(config.endpoint(), "http://127.0.0.1:9000");
        assert_eq!(config.cluster, Cluster::Devnet);
    }

    #[test]
    fn test_from_lookup_rejects_malformed_values() {
        let err = ClientConfig::from_lookup(lookup(&[(SOLANA_CLUSTER, "moonnet")])).unwrap_err();
        assert!(err.to_string().contains(SOLANA_CLUSTER));

        assert!(ClientConfig::from_lookup(lookup(&[(SOLANA_CONFIRM_TIMEOUT_MS, "soon")])).is_err());
        assert!(ClientConfig::from_lookup(lookup(&[(SOLANA_CONFIRM_TIMEOUT_MS, "0")])).is_err());
        assert!(ClientConfig::from_lookup(lookup(&[(SOLANA_MAX_AIRDROP_SOL, "-1")])).is_err());
    }

    #[test]
    fn test_airdrop_ceiling() {
        let config = ClientConfig::default();
        assert!(config.check_airdrop_amount(10.0).is_ok());
        assert!(config.check_airdrop_amount(0.5).is_ok());
        let err = config.check_airdrop_amount(10.5).unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }

    #[test]
    fn test_explorer_links() {
        let sig = Signature::from([7u8; 64]);
        let devnet = explorer_tx_url(&sig, Cluster::Devnet);
        assert_eq!(
            devnet,
            format!("https://explorer.solana.com/tx/{sig}?cluster=devnet")
        );
        assert!(!explorer_tx_url(&sig, Cluster::MainnetBeta).contains('?'));
    }

    #[test]
    fn test_cluster_parse_and_serde() {
        assert_eq!("mainnet".parse::<Cluster>().unwrap(), Cluster::MainnetBeta);
        assert_eq!(Cluster::MainnetBeta.to_string(), "mainnet-beta");
        assert!(!Cluster::MainnetBeta.has_faucet());

        let json = serde_json::json!({ "cluster": "localnet", "max_airdrop_sol": 1.0 });
        let config: ClientConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.endpoint(), LOCAL_VALIDATOR_RPC_URL);
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }
}
