//! CLI command implementations
//!
//! - `serve`: load config, install logging, run the HTTP server
//! - `validate`: run the validation pipeline over local files and print
//!   the verdict

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_result;
use crate::http_server::HttpServer;
use crate::observability::{init_logging, Event, LoggingConfig};
use crate::schema::SchemaLoader;
use crate::table::{has_csv_extension, CsvTableReader};
use crate::validator::{GuardError, GuardResult, ValidationEngine, ValidationResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Validate {
            file,
            schema,
            pretty,
        } => validate(&file, &schema, pretty),
    }
}

/// Start the HTTP validation server
///
/// 1. Load configuration (defaults when no file is given)
/// 2. Apply the `--port` override
/// 3. Install logging
/// 4. Serve until Ctrl-C
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    init_logging(&config.logging).map_err(|e| CliError::Config(e.to_string()))?;
    let source = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    info!(event = %Event::ConfigLoaded, %source, port = config.server.port);

    let server = HttpServer::with_config(config.server);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Serve(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Serve(format!("HTTP server failed: {}", e)))
    })
}

/// Validate one CSV file against a schema file
///
/// Prints the verdict to stdout. An invalid verdict is returned as an
/// error so the process exits non-zero.
pub fn validate(file: &Path, schema: &Path, pretty: bool) -> CliResult<()> {
    let logging = LoggingConfig {
        level: "warn".to_string(),
        ..Default::default()
    };
    init_logging(&logging).map_err(|e| CliError::Config(e.to_string()))?;

    let result = validate_file(file, schema);
    write_result(&result, pretty)?;

    if result.valid() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed(result.errors().len()))
    }
}

/// Runs the validation pipeline over local files, folding request-level
/// errors into the verdict.
pub fn validate_file(file: &Path, schema: &Path) -> ValidationResult {
    match validate_paths(file, schema) {
        Ok(result) => result,
        Err(err) => ValidationResult::from_config_error(&err),
    }
}

fn validate_paths(file: &Path, schema: &Path) -> GuardResult<ValidationResult> {
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !has_csv_extension(&file_name) {
        return Err(GuardError::UnsupportedFile(file_name));
    }

    let schema = SchemaLoader::from_path(schema)?;

    let input = File::open(file).map_err(|e| {
        GuardError::Internal(format!("failed to open '{}': {}", file.display(), e))
    })?;
    let rows = CsvTableReader::new().read(BufReader::new(input))?;

    ValidationEngine::new(&schema).validate(&rows)
}
