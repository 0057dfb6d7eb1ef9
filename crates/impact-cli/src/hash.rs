//! # Hash Subcommand
//!
//! Streams evidence files through SHA-256 and prints the lowercase hex
//! digest, which is always a valid proof hash. Output follows the
//! `sha256sum` layout so it can be piped into existing tooling.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use impact_core::{sha256_reader, ProofHash};

/// Arguments for the `impact hash` subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Evidence files to hash. Use `-` for standard input.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

/// Execute the hash subcommand.
pub fn run_hash(args: &HashArgs) -> Result<u8> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in &args.files {
        let hash = hash_path(path)?;
        writeln!(out, "{}  {}", hash, path.display())?;
    }
    Ok(0)
}

/// Hash one file, or standard input for `-`.
pub fn hash_path(path: &Path) -> Result<ProofHash> {
    let digest = if path == Path::new("-") {
        sha256_reader(io::stdin().lock()).context("reading standard input")?
    } else {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        sha256_reader(BufReader::new(file))
            .with_context(|| format!("reading {}", path.display()))?
    };
    tracing::debug!(path = %path.display(), %digest, "hashed evidence");
    Ok(digest.to_proof_hash()?)
}
