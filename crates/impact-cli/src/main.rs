//! # impact CLI entry point
//!
//! Parses command-line arguments, initializes tracing and dispatches to
//! subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use impact_cli::config::{run_config, ConfigArgs};
use impact_cli::hash::{run_hash, HashArgs};
use impact_cli::serve::{run_serve, ServeArgs};

/// Impact proof registry.
///
/// Records content hashes of impact evidence against campaigns and
/// donations, and lets a verification authority record verdicts on them.
#[derive(Parser, Debug)]
#[command(name = "impact", version, about, long_about = None)]
struct Cli {
    /// Emit logs as JSON lines. Filter with RUST_LOG (default "info").
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP registry service.
    Serve(ServeArgs),

    /// Print the resolved service configuration as YAML.
    Config(ConfigArgs),

    /// Compute the proof hash of evidence files.
    Hash(HashArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Serve(args) => run_serve(&args).await,
        Commands::Config(args) => run_config(&args),
        Commands::Hash(args) => run_hash(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
