//! Tabular input for the validation engine
//!
//! A table is an ordered, fully materialized sequence of rows. The header
//! row is consumed by the reader and never reaches the engine.

mod reader;

use std::collections::HashMap;

pub use reader::{has_csv_extension, CsvTableReader};

/// One data record: column name to raw cell text
pub type Row = HashMap<String, String>;
