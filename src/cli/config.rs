//! Configuration file
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 54321, "cors_origins": [] },
//!   "policy": { "unknown_fields": "reject", "weight_sum_tolerance": 0.01 }
//! }
//! ```
//!
//! Every field is optional. A missing file is only an error when a path was
//! given explicitly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::validation::ValidationPolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub policy: ValidationPolicy,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Replace the policy with the strict one when `strict` is set
    pub fn with_strict(mut self, strict: bool) -> Self {
        if strict {
            self.policy = ValidationPolicy::strict();
        }
        self
    }

    fn validate(&self) -> CliResult<()> {
        self.server
            .validate()
            .map_err(|e| CliError::config_error(format!("Server config error: {}", e)))?;
        self.policy
            .validate()
            .map_err(|e| CliError::config_error(format!("Policy config error: {}", e)))?;
        Ok(())
    }
}
