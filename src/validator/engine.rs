//! Validation engine
//!
//! Runs the row validator over every row of a table and accumulates all
//! findings. Preconditions (at least one row, at least one column) fail
//! the whole run before any row is examined; once rows are being
//! examined nothing stops the run early.
//!
//! File-level options are applied before the per-column checks:
//! - an all-blank row is skipped (`allowEmptyRows`) or reported once
//! - a row repeating an earlier row's declared values is accepted
//!   (`allowDuplicates`) or reported once, pointing at the first occurrence

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::errors::{GuardError, GuardResult};
use super::report::{ErrorFragment, ValidationResult, Violation, ROW_COLUMN};
use super::row::RowValidator;
use crate::schema::ValidationSchema;
use crate::table::Row;

/// Validates whole tables against one schema.
///
/// Holds no mutable state; each call owns its accumulator, so one engine
/// can serve concurrent callers.
pub struct ValidationEngine<'a> {
    schema: &'a ValidationSchema,
}

impl<'a> ValidationEngine<'a> {
    pub fn new(schema: &'a ValidationSchema) -> Self {
        Self { schema }
    }

    /// Validates a materialized table.
    ///
    /// # Errors
    ///
    /// - `GuardError::EmptyTable` if `rows` is empty
    /// - `GuardError::EmptySchema` if the schema declares no columns
    pub fn validate(&self, rows: &[Row]) -> GuardResult<ValidationResult> {
        self.validate_iter(rows)
    }

    /// Validates rows from any sequence, consumed lazily in order.
    pub fn validate_iter<I>(&self, rows: I) -> GuardResult<ValidationResult>
    where
        I: IntoIterator,
        I::Item: Borrow<Row>,
    {
        let mut rows = rows.into_iter().peekable();
        if rows.peek().is_none() {
            return Err(GuardError::EmptyTable);
        }
        self.schema.ensure_columns()?;

        let validator = RowValidator::new(self.schema);
        let options = self.schema.options;
        let mut seen: HashMap<Vec<String>, usize> = HashMap::new();
        let mut errors = Vec::new();

        // Header is row 0; the counter advances once per data row.
        for (index, row) in rows.enumerate() {
            let row_number = index + 1;
            let row = row.borrow();

            if validator.is_empty_row(row) {
                if !options.allow_empty_rows {
                    errors.push(
                        ErrorFragment::new(ROW_COLUMN, Violation::EmptyRow).at_row(row_number),
                    );
                }
                continue;
            }

            if !options.allow_duplicates {
                match seen.entry(validator.row_key(row)) {
                    Entry::Occupied(first) => {
                        errors.push(
                            ErrorFragment::new(ROW_COLUMN, Violation::DuplicateRow(*first.get()))
                                .at_row(row_number),
                        );
                        continue;
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(row_number);
                    }
                }
            }

            errors.extend(validator.validate(row_number, row));
        }

        Ok(ValidationResult::from_errors(errors))
    }
}
