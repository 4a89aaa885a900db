//! Provider configuration from the Anchor environment

use crate::{Result, SdkError};
use anchor_client::Cluster;
use solana_sdk::commitment_config::CommitmentConfig;
use std::{path::PathBuf, str::FromStr};

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";
pub const DEFAULT_WALLET_PATH: &str = "~/.config/solana/id.json";

pub const PROVIDER_URL_VAR: &str = "ANCHOR_PROVIDER_URL";
pub const WS_URL_VAR: &str = "ANCHOR_WS_URL";
pub const WALLET_VAR: &str = "ANCHOR_WALLET";
pub const COMMITMENT_VAR: &str = "ANCHOR_COMMITMENT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    /// RPC endpoint
    pub rpc_url: String,

    /// WebSocket endpoint, derived from `rpc_url` when unset
    pub ws_url: Option<String>,

    /// Keypair file used to sign and pay for transactions
    pub wallet_path: PathBuf,

    /// Commitment used for sends and reads
    pub commitment: CommitmentConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            ws_url: None,
            wallet_path: expand_path(DEFAULT_WALLET_PATH),
            commitment: CommitmentConfig::confirmed(),
        }
    }
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let commitment = match lookup(COMMITMENT_VAR) {
            Some(level) => parse_commitment(&level)?,
            None => CommitmentConfig::confirmed(),
        };

        Ok(Self {
            rpc_url: lookup(PROVIDER_URL_VAR).unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
            ws_url: lookup(WS_URL_VAR),
            wallet_path: expand_path(
                &lookup(WALLET_VAR).unwrap_or_else(|| DEFAULT_WALLET_PATH.to_string()),
            ),
            commitment,
        })
    }

    pub fn cluster(&self) -> Result<Cluster> {
        match &self.ws_url {
            Some(ws_url) => Ok(Cluster::Custom(self.rpc_url.clone(), ws_url.clone())),
            None => Cluster::from_str(&self.rpc_url)
                .map_err(|e| SdkError::InvalidCluster(format!("{}: {}", self.rpc_url, e))),
        }
    }
}

pub fn parse_commitment(level: &str) -> Result<CommitmentConfig> {
    match level.trim().to_ascii_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        _ => Err(SdkError::InvalidCommitment(level.to_string())),
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
