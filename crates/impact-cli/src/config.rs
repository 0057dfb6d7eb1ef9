//! # Config Subcommand
//!
//! Prints the service configuration after defaults, file and environment
//! overrides have been applied. `serve` resolves its configuration through
//! the same [`resolve`] function.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use impact_api::ApiConfig;

/// Arguments for the `impact config` subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// YAML configuration file.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Execute the config subcommand.
pub fn run_config(args: &ConfigArgs) -> Result<u8> {
    let config = resolve(args.config.as_deref(), None)?;
    print!("{}", config.to_yaml()?);
    Ok(0)
}

/// Load configuration, then apply a command-line bind address on top.
pub fn resolve(path: Option<&Path>, bind: Option<SocketAddr>) -> Result<ApiConfig> {
    let mut config = match path {
        Some(p) => ApiConfig::load(Some(p))
            .with_context(|| format!("loading configuration from {}", p.display()))?,
        None => ApiConfig::load(None).context("loading configuration")?,
    };
    if let Some(addr) = bind {
        config.bind = addr;
    }
    Ok(config)
}
