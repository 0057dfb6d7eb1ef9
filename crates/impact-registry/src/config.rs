//! # Registry Configuration

use serde::{Deserialize, Serialize};

/// Capacity used when none is configured.
pub const DEFAULT_MAX_PROOFS: u64 = 10_000;

/// Tunables fixed at registry construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Upper bound on the number of proofs ever created. Not a sliding
    /// window: once reached, submission fails permanently.
    #[serde(default = "default_max_proofs")]
    pub max_proofs: u64,
}

fn default_max_proofs() -> u64 {
    DEFAULT_MAX_PROOFS
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_proofs: DEFAULT_MAX_PROOFS,
        }
    }
}
