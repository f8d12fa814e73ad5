//! Configuration file for `fileguard serve`
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 8080, "cors_origins": [], "max_upload_bytes": 10485760 },
//!   "logging": { "level": "info", "format": "json" }
//! }
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::LoggingConfig;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from a path when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.max_upload_bytes == 0 {
            return Err(CliError::Config("server.max_upload_bytes must be > 0".to_string()));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::Config("server.host must not be empty".to_string()));
        }

        Ok(())
    }
}
