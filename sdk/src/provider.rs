//! Network endpoint and signing identity

use crate::{ProgramHandle, ProviderConfig, Result, SdkError, Workspace};
use anchor_client::{Client, Cluster};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
    signer::Signer,
};
use std::{path::Path, sync::Arc};
use tracing::debug;

/// Bundles the cluster, the payer keypair and the anchor client built from them
pub struct Provider {
    cluster: Cluster,
    payer: Arc<Keypair>,
    commitment: CommitmentConfig,
    client: Client<Arc<Keypair>>,
}

impl Provider {
    pub fn new(cluster: Cluster, payer: Arc<Keypair>, commitment: CommitmentConfig) -> Self {
        let client = Client::new_with_options(cluster.clone(), payer.clone(), commitment);
        Self {
            cluster,
            payer,
            commitment,
            client,
        }
    }

    /// Provider from `ANCHOR_PROVIDER_URL` / `ANCHOR_WALLET`
    pub fn env() -> Result<Self> {
        Self::from_config(&ProviderConfig::from_env()?)
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let cluster = config.cluster()?;
        let payer = load_keypair(&config.wallet_path)?;
        debug!(
            rpc_url = cluster.url(),
            payer = %payer.pubkey(),
            "provider configured"
        );
        Ok(Self::new(cluster, Arc::new(payer), config.commitment))
    }

    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }

    pub fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Handle to the program deployed at `program_id`
    pub fn program(&self, name: &str, program_id: Pubkey) -> Result<ProgramHandle> {
        let program = self.client.program(program_id)?;
        Ok(ProgramHandle::new(name, program, self.cluster.url(), self.commitment))
    }

    /// Resolve `name` on `cluster` through the workspace, then build its handle
    pub fn workspace_program(
        &self,
        workspace: &Workspace,
        cluster: &str,
        name: &str,
    ) -> Result<ProgramHandle> {
        let program_id = workspace.resolve(cluster, name)?;
        self.program(name, program_id)
    }
}

pub fn load_keypair(path: &Path) -> Result<Keypair> {
    if !path.exists() {
        return Err(SdkError::MissingWallet(path.to_path_buf()));
    }
    read_keypair_file(path).map_err(|e| SdkError::InvalidKeypair {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
