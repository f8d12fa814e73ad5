//! Request-level (tier-1) errors
//!
//! These stop a request before the engine examines a single row. Each one
//! is reported to callers as one synthetic error entry under a fixed
//! column token:
//!
//! - `schema`: the schema document cannot be parsed
//! - `file`: the upload's name does not end in `.csv`
//! - `internal`: everything else, including an empty schema and CSV
//!   content that is unreadable or has no data rows

use thiserror::Error;

/// Result type for request-level operations
pub type GuardResult<T> = Result<T, GuardError>;

/// Fatal configuration/input errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// Uploaded file name does not end in `.csv`
    #[error("Only CSV files are accepted (got '{0}')")]
    UnsupportedFile(String),

    /// Schema text is not a valid schema document
    #[error("Error parsing schema JSON: {0}")]
    MalformedSchema(String),

    /// Schema has no column rules
    #[error("Schema must declare at least one column")]
    EmptySchema,

    /// CSV content could not be read
    #[error("Error parsing CSV: {0}")]
    MalformedCsv(String),

    /// CSV has no data rows
    #[error("Empty CSV: no data rows found")]
    EmptyTable,

    /// Input could not be obtained (unreadable local file) or a worker task failed
    #[error("Unexpected error: {0}")]
    Internal(String),
}

impl GuardError {
    /// Synthetic column name used when this error is reported as a verdict
    pub fn column_token(&self) -> &'static str {
        match self {
            GuardError::MalformedSchema(_) => "schema",
            GuardError::UnsupportedFile(_) => "file",
            GuardError::EmptySchema
            | GuardError::MalformedCsv(_)
            | GuardError::EmptyTable
            | GuardError::Internal(_) => "internal",
        }
    }

    /// Stable error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            GuardError::UnsupportedFile(_) => "FILEGUARD_UNSUPPORTED_FILE",
            GuardError::MalformedSchema(_) => "FILEGUARD_MALFORMED_SCHEMA",
            GuardError::EmptySchema => "FILEGUARD_EMPTY_SCHEMA",
            GuardError::MalformedCsv(_) => "FILEGUARD_MALFORMED_CSV",
            GuardError::EmptyTable => "FILEGUARD_EMPTY_TABLE",
            GuardError::Internal(_) => "FILEGUARD_INTERNAL",
        }
    }
}

impl From<serde_json::Error> for GuardError {
    fn from(e: serde_json::Error) -> Self {
        GuardError::MalformedSchema(e.to_string())
    }
}

impl From<csv::Error> for GuardError {
    fn from(e: csv::Error) -> Self {
        GuardError::MalformedCsv(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_tokens() {
        assert_eq!(GuardError::MalformedSchema("x".into()).column_token(), "schema");
        assert_eq!(GuardError::UnsupportedFile("a.txt".into()).column_token(), "file");
        assert_eq!(GuardError::EmptySchema.column_token(), "internal");
        assert_eq!(GuardError::MalformedCsv("x".into()).column_token(), "internal");
        assert_eq!(GuardError::EmptyTable.column_token(), "internal");
        assert_eq!(GuardError::Internal("boom".into()).column_token(), "internal");
    }

    #[test]
    fn test_display_includes_context() {
        let err = GuardError::UnsupportedFile("report.xlsx".into());
        assert!(err.to_string().contains("report.xlsx"));

        let err = GuardError::MalformedSchema("expected value at line 1".into());
        assert!(err.to_string().starts_with("Error parsing schema JSON"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            GuardError::UnsupportedFile(String::new()).code(),
            GuardError::MalformedSchema(String::new()).code(),
            GuardError::EmptySchema.code(),
            GuardError::MalformedCsv(String::new()).code(),
            GuardError::EmptyTable.code(),
            GuardError::Internal(String::new()).code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let guard: GuardError = err.into();
        assert_eq!(guard.column_token(), "schema");
    }
}
