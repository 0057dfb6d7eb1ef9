//! # Service Configuration
//!
//! Resolved in three layers, later layers winning:
//!
//! 1. Built-in defaults (`0.0.0.0:8080`, capacity 10000).
//! 2. An optional YAML file.
//! 3. Environment overrides: `IMPACT_BIND`, `IMPACT_MAX_PROOFS`.
//!
//! ```yaml
//! bind: 127.0.0.1:9000
//! registry:
//!   max_proofs: 500
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use impact_registry::RegistryConfig;

/// Environment variable overriding the listen address.
pub const ENV_BIND: &str = "IMPACT_BIND";
/// Environment variable overriding registry capacity.
pub const ENV_MAX_PROOFS: &str = "IMPACT_MAX_PROOFS";

/// Errors raised while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for this schema.
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },

    /// A registry that can never accept a proof.
    #[error("registry.max_proofs must be greater than zero")]
    ZeroCapacity,
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    #[serde(default)]
    pub registry: RegistryConfig,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            registry: RegistryConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Resolve defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(p) => Self::from_yaml_file(p)?,
            None => Self::default(),
        };
        let config = base.with_overrides(|var| std::env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Apply environment-style overrides read through `lookup`.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup(ENV_BIND) {
            self.bind = value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_BIND,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_MAX_PROOFS) {
            self.registry.max_proofs = value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_MAX_PROOFS,
                value: value.clone(),
            })?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registry.max_proofs == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// Render as YAML, the same format [`ApiConfig::from_yaml_str`] reads.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
