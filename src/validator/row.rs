//! Row validator
//!
//! Applies the type checker to every declared column of one row. A
//! required column with no value is reported once and its type check is
//! skipped, so one cell never yields both kinds of finding.

use super::checker::{present, TypeChecker};
use super::report::{ErrorFragment, ValidationError, Violation};
use crate::schema::ValidationSchema;
use crate::table::Row;

/// Validates single rows against a schema
pub struct RowValidator<'a> {
    schema: &'a ValidationSchema,
}

impl<'a> RowValidator<'a> {
    pub fn new(schema: &'a ValidationSchema) -> Self {
        Self { schema }
    }

    /// Validates the declared columns of one row.
    ///
    /// Columns are visited in sorted name order. `row_number` is stamped
    /// on every finding.
    pub fn validate(&self, row_number: usize, row: &Row) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (column, rule) in &self.schema.columns {
            let value = row.get(column).map(String::as_str);

            if rule.required && present(value).is_none() {
                errors.push(
                    ErrorFragment::new(column.as_str(), Violation::RequiredEmpty).at_row(row_number),
                );
                continue;
            }

            errors.extend(
                TypeChecker::check(column, value, rule)
                    .into_iter()
                    .map(|fragment| fragment.at_row(row_number)),
            );
        }

        errors
    }

    /// Whether every declared column of the row is absent or blank
    pub fn is_empty_row(&self, row: &Row) -> bool {
        self.schema
            .columns
            .keys()
            .all(|column| present(row.get(column).map(String::as_str)).is_none())
    }

    /// The row's declared values in column order, absent as `""`
    pub fn row_key(&self, row: &Row) -> Vec<String> {
        self.schema
            .columns
            .keys()
            .map(|column| row.get(column).cloned().unwrap_or_default())
            .collect()
    }
}
