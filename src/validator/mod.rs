//! CSV validation engine
//!
//! Leaf-first:
//! - `checker`: one cell against one rule
//! - `row`: every declared column of one row
//! - `engine`: every row of a table, with file-level options
//! - `service`: upload boundary that always yields a verdict
//!
//! # Error tiers
//!
//! - Tier 1 ([`GuardError`]): fatal to the request, reported as a single
//!   synthetic finding
//! - Tier 2 ([`ValidationError`]): per-cell findings, all accumulated

mod checker;
mod engine;
mod errors;
mod report;
mod row;
mod service;

pub use checker::TypeChecker;
pub use engine::ValidationEngine;
pub use errors::{GuardError, GuardResult};
pub use report::{ErrorFragment, ValidationError, ValidationResult, Violation, ROW_COLUMN};
pub use row::RowValidator;
pub use service::ValidationService;
