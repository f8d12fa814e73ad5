//! Type checker for single cell values
//!
//! Checking order:
//! 1. Absent, empty or whitespace-only values are not checked at all
//! 2. Dispatch on the declared type
//! 3. Numeric types then check `min`/`max` (inclusive, compared as f64)
//!
//! Parse failures become findings. Nothing here returns an error.

use regex::Regex;
use std::sync::OnceLock;

use super::report::{ErrorFragment, Violation};
use crate::schema::{ColumnRule, RuleType};

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
    })
}

/// Returns the trimmed value, or `None` when nothing is present
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Stateless cell checker
pub struct TypeChecker;

impl TypeChecker {
    /// Checks one cell against its column rule.
    ///
    /// Returns every finding for the cell; an empty vector means the value
    /// conforms (or was not present).
    pub fn check(column: &str, value: Option<&str>, rule: &ColumnRule) -> Vec<ErrorFragment> {
        let mut fragments = Vec::new();

        let Some(value) = present(value) else {
            return fragments;
        };

        match &rule.rule_type {
            RuleType::String => {}
            RuleType::Number => match parse_number(value) {
                Some(number) => check_bounds(column, number, rule, &mut fragments),
                None => fragments.push(ErrorFragment::new(column, Violation::ExpectedNumber)),
            },
            RuleType::Integer => match value.parse::<i64>() {
                Ok(integer) => check_bounds(column, integer as f64, rule, &mut fragments),
                Err(_) => fragments.push(ErrorFragment::new(column, Violation::ExpectedInteger)),
            },
            RuleType::Email => {
                if !is_valid_email(value) {
                    fragments.push(ErrorFragment::new(column, Violation::InvalidEmail));
                }
            }
            RuleType::Unsupported(tag) => {
                fragments.push(ErrorFragment::new(
                    column,
                    Violation::UnsupportedType(tag.clone()),
                ));
            }
        }

        fragments
    }
}

/// Parses a finite floating-point numeral
fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

// min and max are checked independently, so a degenerate rule with
// min > max reports both.
fn check_bounds(column: &str, value: f64, rule: &ColumnRule, fragments: &mut Vec<ErrorFragment>) {
    if let Some(min) = rule.min {
        if value < min {
            fragments.push(ErrorFragment::new(column, Violation::BelowMinimum));
        }
    }

    if let Some(max) = rule.max {
        if value > max {
            fragments.push(ErrorFragment::new(column, Violation::AboveMaximum));
        }
    }
}
