//! Validation report types
//!
//! Per-cell findings (tier-2) are accumulated, never fatal. A finding
//! without row context is a [`ErrorFragment`]; the row validator stamps it
//! with the 1-based row number to produce a [`ValidationError`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::GuardError;

/// Column token used for row-level findings (empty or duplicate rows)
pub const ROW_COLUMN: &str = "row";

/// Kinds of per-cell or per-row findings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Required column is absent or blank
    RequiredEmpty,
    /// Value does not parse as a number
    ExpectedNumber,
    /// Value does not parse as an integer
    ExpectedInteger,
    /// Numeric value below `min`
    BelowMinimum,
    /// Numeric value above `max`
    AboveMaximum,
    /// Value is not an email address
    InvalidEmail,
    /// Rule carries a type tag with no checker
    UnsupportedType(String),
    /// Every declared column of the row is blank
    EmptyRow,
    /// Row repeats the declared values of an earlier row
    DuplicateRow(usize),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RequiredEmpty => write!(f, "required field is empty"),
            Violation::ExpectedNumber => write!(f, "incorrect type, expected number"),
            Violation::ExpectedInteger => write!(f, "incorrect type, expected integer"),
            Violation::BelowMinimum => write!(f, "value less than minimum"),
            Violation::AboveMaximum => write!(f, "value greater than maximum"),
            Violation::InvalidEmail => write!(f, "invalid email format"),
            Violation::UnsupportedType(tag) => write!(f, "type not supported: {}", tag),
            Violation::EmptyRow => write!(f, "empty row not allowed"),
            Violation::DuplicateRow(first) => write!(f, "duplicate of row {}", first),
        }
    }
}

/// A finding lacking row context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFragment {
    pub column: String,
    pub violation: Violation,
}

impl ErrorFragment {
    pub fn new(column: impl Into<String>, violation: Violation) -> Self {
        Self {
            column: column.into(),
            violation,
        }
    }

    /// Completes the fragment with its row number
    pub fn at_row(self, row: usize) -> ValidationError {
        ValidationError {
            row,
            message: self.violation.to_string(),
            column: self.column,
        }
    }
}

/// One addressed finding in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// 1-based data row number; 0 for request-level errors
    pub row: usize,
    /// Column name, or a synthetic token
    pub column: String,
    /// Human-readable message
    pub message: String,
}

impl ValidationError {
    pub fn new(row: usize, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            column: column.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column '{}': {}", self.row, self.column, self.message)
    }
}

/// Final verdict
///
/// `valid` is derived from `errors` at construction and cannot be set
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Builds the verdict for a completed validation run
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Builds the single-entry verdict for a request-level error
    pub fn from_config_error(error: &GuardError) -> Self {
        Self::from_errors(vec![ValidationError::new(
            0,
            error.column_token(),
            error.to_string(),
        )])
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}
