//! Upload validation service
//!
//! The transport-independent boundary: takes a file name, raw bytes and
//! schema text, and always produces a verdict. Request-level errors are
//! folded into a single synthetic finding at row 0.
//!
//! Order of checks:
//! 1. File name must end in `.csv`
//! 2. Schema text must parse
//! 3. CSV must parse (fully drained into memory)
//! 4. Engine runs over all rows

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use super::engine::ValidationEngine;
use super::errors::{GuardError, GuardResult};
use super::report::ValidationResult;
use crate::observability::{Event, MetricsRegistry};
use crate::schema::SchemaLoader;
use crate::table::{has_csv_extension, CsvTableReader};

/// Validates uploaded CSV files
#[derive(Debug, Clone)]
pub struct ValidationService {
    reader: CsvTableReader,
    metrics: Arc<MetricsRegistry>,
}

impl ValidationService {
    pub fn new(metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            reader: CsvTableReader::new(),
            metrics,
        }
    }

    /// Shared request counters
    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Validates an upload, folding request-level errors into the verdict.
    pub fn validate_upload(
        &self,
        file_name: Option<&str>,
        content: &[u8],
        schema_json: &str,
    ) -> ValidationResult {
        let request_id = Uuid::new_v4();
        self.metrics.increment_requests();
        info!(
            event = %Event::ValidationReceived,
            %request_id,
            file = file_name.unwrap_or(""),
            bytes = content.len()
        );

        match self.try_validate(file_name, content, schema_json) {
            Ok((result, rows)) => {
                let errors = result.errors().len() as u64;
                self.metrics.record_verdict(result.valid(), rows as u64, errors);
                info!(
                    event = %Event::ValidationComplete,
                    %request_id,
                    rows,
                    errors,
                    valid = result.valid()
                );
                result
            }
            Err(err) => self.reject(request_id, &err),
        }
    }

    /// Folds a request-level error into a verdict and records it.
    pub fn reject(&self, request_id: Uuid, err: &GuardError) -> ValidationResult {
        self.metrics.increment_rejected();
        warn!(
            event = %Event::ValidationRejected,
            %request_id,
            code = err.code(),
            column = err.column_token(),
            error = %err
        );
        ValidationResult::from_config_error(err)
    }

    /// Runs the full pipeline, returning the verdict and the row count, or
    /// the request-level error that stopped it.
    pub fn try_validate(
        &self,
        file_name: Option<&str>,
        content: &[u8],
        schema_json: &str,
    ) -> GuardResult<(ValidationResult, usize)> {
        let file_name = file_name.unwrap_or_default();
        if !has_csv_extension(file_name) {
            return Err(GuardError::UnsupportedFile(file_name.to_string()));
        }

        let schema = SchemaLoader::from_json(schema_json)?;
        let rows = self.reader.read_bytes(content)?;
        let result = ValidationEngine::new(&schema).validate(&rows)?;

        Ok((result, rows.len()))
    }
}
