//! Orca Manage SDK - Client interface for the orca-manage program
//!
//! This SDK provides thin wrappers for:
//! - Provider setup from the Anchor environment
//! - Program resolution by name from `Anchor.toml`
//! - The `initialize` call and the vault instructions
//! - Reporting transaction outcomes

pub mod config;
pub mod error;
pub mod outcome;
pub mod program;
pub mod provider;
pub mod report;
pub mod workspace;

pub use config::ProviderConfig;
pub use error::*;
pub use outcome::TransactionOutcome;
pub use program::{DepositRequest, ProgramHandle};
pub use provider::Provider;
pub use report::Reporter;
pub use workspace::Workspace;

// Re-export commonly used types
pub use anchor_client::Cluster;
pub use orca_manage::{Vault, VAULT_SEED};
pub use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};

pub type Result<T> = std::result::Result<T, error::SdkError>;
