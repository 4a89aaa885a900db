//! Initializer Service
//!
//! Resolves the program from the workspace, sends `initialize` once and
//! reports the confirmed signature.

pub mod config;

pub use config::Config;

use anyhow::{Context, Result};
use orca_manage_sdk::{Provider, Reporter, TransactionOutcome, Workspace};
use std::io::Write;
use tracing::info;

/// Provider -> program handle -> initialize -> report
pub async fn run<W: Write>(config: &Config, reporter: &mut Reporter<W>) -> Result<TransactionOutcome> {
    let provider = Provider::from_config(&config.provider).context("Failed to configure provider")?;

    let workspace = Workspace::load(&config.workspace_path)
        .with_context(|| format!("Failed to load workspace {}", config.workspace_path.display()))?;
    let program = provider
        .workspace_program(&workspace, &config.cluster, &config.program_name)
        .context("Failed to resolve program")?;

    info!(
        program = program.name(),
        id = %program.id(),
        payer = %provider.payer(),
        "initializing"
    );

    let outcome = program.initialize().await?;
    reporter.report(&outcome)?;
    Ok(outcome)
}
