//! Service configuration

use orca_manage_sdk::ProviderConfig;
use std::path::PathBuf;

pub const WORKSPACE_VAR: &str = "ANCHOR_WORKSPACE";
pub const CLUSTER_VAR: &str = "ANCHOR_CLUSTER";
pub const PROGRAM_NAME_VAR: &str = "PROGRAM_NAME";

#[derive(Clone, Debug)]
pub struct Config {
    /// Endpoint, wallet and commitment
    pub provider: ProviderConfig,

    /// `Anchor.toml` listing program ids per cluster
    pub workspace_path: PathBuf,

    /// Cluster table to resolve the program in
    pub cluster: String,

    /// Program to initialize
    pub program_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            workspace_path: PathBuf::from("Anchor.toml"),
            cluster: "localnet".to_string(),
            program_name: "orca_manage".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            provider: ProviderConfig::from_lookup(&lookup)?,
            workspace_path: lookup(WORKSPACE_VAR).map_or(defaults.workspace_path, PathBuf::from),
            cluster: lookup(CLUSTER_VAR).unwrap_or(defaults.cluster),
            program_name: lookup(PROGRAM_NAME_VAR).unwrap_or(defaults.program_name),
        })
    }
}
