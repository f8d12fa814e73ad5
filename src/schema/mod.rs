//! Validation schema subsystem
//!
//! A schema is a set of named column rules plus file-level options,
//! supplied with every request and never stored.
//!
//! # Design Principles
//!
//! - Loading checks shape only
//! - Type tags map onto a closed enum; unknown tags survive loading
//! - Bounds apply to numeric types only and are ignored elsewhere

mod loader;
mod types;

pub use loader::SchemaLoader;
pub use types::{ColumnRule, RuleType, SchemaOptions, ValidationSchema};
