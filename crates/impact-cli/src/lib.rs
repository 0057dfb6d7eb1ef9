//! # impact-cli — Command-Line Interface
//!
//! Provides the `impact` binary.
//!
//! ## Subcommands
//!
//! - `impact serve` — Run the HTTP registry service.
//! - `impact config` — Print the fully resolved service configuration.
//! - `impact hash` — SHA-256 an evidence file into a submittable proof hash.
//!
//! ```bash
//! impact serve --config impact.yaml --bind 127.0.0.1:9000
//! impact hash site-photo.jpg
//! RUST_LOG=debug impact --log-json serve
//! ```
//!
//! The registry itself keeps no evidence; `hash` produces the
//! content identifier a donor-facing client submits alongside the
//! evidence it stores elsewhere.

pub mod config;
pub mod hash;
pub mod serve;
