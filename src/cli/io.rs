//! JSON output for the CLI
//!
//! Verdicts go to stdout as a single JSON document; logs go to stderr.

use std::io::{self, Write};

use super::errors::CliResult;
use crate::validator::ValidationResult;

/// Write a verdict to stdout
pub fn write_result(result: &ValidationResult, pretty: bool) -> CliResult<()> {
    let stdout = io::stdout();
    write_result_to(&mut stdout.lock(), result, pretty)
}

/// Write a verdict to any writer
pub fn write_result_to<W: Write>(
    writer: &mut W,
    result: &ValidationResult,
    pretty: bool,
) -> CliResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, result)?;
    } else {
        serde_json::to_writer(&mut *writer, result)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
