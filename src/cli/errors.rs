//! CLI errors
//!
//! Every variant ends the process with a non-zero exit code; `main` prints
//! the code next to the message.

use std::io;

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Config file missing, malformed or rejected, or logging setup failed
    #[error("config error: {0}")]
    Config(String),

    /// Reading inputs or writing to stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Verdict could not be serialized
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Server could not start or stopped abnormally
    #[error("server error: {0}")]
    Serve(String),

    /// Verdict listed findings
    #[error("validation failed with {0} error(s)")]
    ValidationFailed(usize),
}

impl CliError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "FILEGUARD_CLI_CONFIG_ERROR",
            CliError::Io(_) => "FILEGUARD_CLI_IO_ERROR",
            CliError::Output(_) => "FILEGUARD_CLI_OUTPUT_ERROR",
            CliError::Serve(_) => "FILEGUARD_CLI_SERVE_FAILED",
            CliError::ValidationFailed(_) => "FILEGUARD_CLI_VALIDATION_FAILED",
        }
    }
}
