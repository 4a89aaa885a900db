//! Initializer service binary

use anyhow::Result;
use orca_manage_initializer::{run, Config};
use orca_manage_sdk::Reporter;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Initialize failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<()> {
    let config = Config::from_env()?;
    info!(
        rpc_url = %config.provider.rpc_url,
        wallet = %config.provider.wallet_path.display(),
        cluster = %config.cluster,
        program = %config.program_name,
        "starting initializer"
    );

    let mut reporter = Reporter::stdout();
    run(&config, &mut reporter).await?;
    Ok(())
}
