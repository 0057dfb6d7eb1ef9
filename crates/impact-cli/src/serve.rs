//! # Serve Subcommand
//!
//! Runs the registry HTTP service until interrupted. Registry state lives
//! in memory for the lifetime of the process.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use impact_api::AppState;

/// Arguments for the `impact serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// YAML configuration file.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Listen address. Overrides the file and `IMPACT_BIND`.
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,
}

/// Execute the serve subcommand.
pub async fn run_serve(args: &ServeArgs) -> Result<u8> {
    let config = crate::config::resolve(args.config.as_deref(), args.bind)?;
    let state = AppState::new(config.registry.clone());
    let app = impact_api::app(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!(
        addr = %config.bind,
        max_proofs = config.registry.max_proofs,
        "impact registry listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("impact registry stopped");
    Ok(0)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {e}");
    }
}
