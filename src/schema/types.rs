//! Rule model for CSV validation schemas
//!
//! Supported column types:
//! - string: any text
//! - number: floating-point numeral, optional bounds
//! - integer: base-10 integer, optional bounds
//! - email: `local@domain.tld`
//!
//! Type tags are plain strings on the wire. Unknown tags are kept as
//! [`RuleType::Unsupported`] and reported per cell at validation time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::validator::{GuardError, GuardResult};

/// Declared type of a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleType {
    /// Any text
    String,
    /// Floating-point numeral
    Number,
    /// Base-10 integer
    Integer,
    /// Email address
    Email,
    /// Tag with no checker; kept verbatim for error messages
    Unsupported(String),
}

impl RuleType {
    /// Returns the wire tag for this type
    pub fn type_name(&self) -> &str {
        match self {
            RuleType::String => "string",
            RuleType::Number => "number",
            RuleType::Integer => "integer",
            RuleType::Email => "email",
            RuleType::Unsupported(tag) => tag,
        }
    }
}

impl From<String> for RuleType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "string" => RuleType::String,
            "number" => RuleType::Number,
            "integer" => RuleType::Integer,
            "email" => RuleType::Email,
            _ => RuleType::Unsupported(tag),
        }
    }
}

impl From<&str> for RuleType {
    fn from(tag: &str) -> Self {
        RuleType::from(tag.to_string())
    }
}

impl From<RuleType> for String {
    fn from(rule_type: RuleType) -> Self {
        rule_type.type_name().to_string()
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Constraint set for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRule {
    /// Whether a blank or missing cell is an error
    #[serde(default)]
    pub required: bool,
    /// Declared type
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    /// Inclusive lower bound (numeric types only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound (numeric types only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl ColumnRule {
    /// Create an unbounded rule
    pub fn new(rule_type: impl Into<RuleType>, required: bool) -> Self {
        Self {
            required,
            rule_type: rule_type.into(),
            min: None,
            max: None,
        }
    }

    /// Create a required rule of the given type
    pub fn required(rule_type: impl Into<RuleType>) -> Self {
        Self::new(rule_type, true)
    }

    /// Create an optional rule of the given type
    pub fn optional(rule_type: impl Into<RuleType>) -> Self {
        Self::new(rule_type, false)
    }

    /// Set the inclusive lower bound
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the inclusive upper bound
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// File-level options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaOptions {
    /// Rows with every declared column blank are skipped instead of flagged
    pub allow_empty_rows: bool,
    /// Rows repeating an earlier row's declared values are accepted
    pub allow_duplicates: bool,
}

/// Complete validation schema
///
/// Columns are keyed by name and iterated in sorted order, which fixes
/// the order of errors reported within a row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationSchema {
    /// Column rules by column name
    #[serde(default)]
    pub columns: BTreeMap<String, ColumnRule>,
    /// File-level options
    #[serde(default)]
    pub options: SchemaOptions,
}

impl ValidationSchema {
    /// Create a schema with default options
    pub fn new(columns: BTreeMap<String, ColumnRule>) -> Self {
        Self {
            columns,
            options: SchemaOptions::default(),
        }
    }

    /// Replace the file-level options
    pub fn with_options(mut self, options: SchemaOptions) -> Self {
        self.options = options;
        self
    }

    /// Add or replace one column rule
    pub fn column(mut self, name: impl Into<String>, rule: ColumnRule) -> Self {
        self.columns.insert(name.into(), rule);
        self
    }

    /// Rejects a schema that declares no columns
    pub fn ensure_columns(&self) -> GuardResult<()> {
        if self.columns.is_empty() {
            return Err(GuardError::EmptySchema);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_type_tags() {
        assert_eq!(RuleType::from("string"), RuleType::String);
        assert_eq!(RuleType::from("number"), RuleType::Number);
        assert_eq!(RuleType::from("integer"), RuleType::Integer);
        assert_eq!(RuleType::from("email"), RuleType::Email);
    }

    #[test]
    fn test_unknown_tag_is_kept() {
        let rule_type = RuleType::from("boolean");
        assert_eq!(rule_type, RuleType::Unsupported("boolean".into()));
        assert_eq!(rule_type.type_name(), "boolean");
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert_eq!(RuleType::from("Number"), RuleType::Unsupported("Number".into()));
    }

    #[test]
    fn test_rule_deserializes_from_wire_shape() {
        let rule: ColumnRule =
            serde_json::from_str(r#"{"required": true, "type": "number", "min": 0, "max": 99.5}"#)
                .unwrap();
        assert!(rule.required);
        assert_eq!(rule.rule_type, RuleType::Number);
        assert_eq!(rule.min, Some(0.0));
        assert_eq!(rule.max, Some(99.5));
    }

    #[test]
    fn test_rule_required_defaults_to_false() {
        let rule: ColumnRule = serde_json::from_str(r#"{"type": "email"}"#).unwrap();
        assert!(!rule.required);
        assert!(rule.min.is_none());
    }

    #[test]
    fn test_rule_serializes_type_tag() {
        let rule = ColumnRule::optional("uuid");
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["type"], "uuid");
        assert!(json.get("min").is_none());
    }

    #[test]
    fn test_options_camel_case() {
        let options: SchemaOptions =
            serde_json::from_str(r#"{"allowEmptyRows": true, "allowDuplicates": false}"#).unwrap();
        assert!(options.allow_empty_rows);
        assert!(!options.allow_duplicates);
    }

    #[test]
    fn test_missing_options_use_defaults() {
        let schema: ValidationSchema =
            serde_json::from_str(r#"{"columns": {"name": {"type": "string"}}}"#).unwrap();
        assert_eq!(schema.options, SchemaOptions::default());
        assert!(schema.ensure_columns().is_ok());
    }

    #[test]
    fn test_empty_columns_rejected() {
        let schema: ValidationSchema = serde_json::from_str(r#"{"columns": {}}"#).unwrap();
        assert_eq!(schema.ensure_columns(), Err(GuardError::EmptySchema));

        let schema: ValidationSchema = serde_json::from_str("{}").unwrap();
        assert_eq!(schema.ensure_columns(), Err(GuardError::EmptySchema));
    }

    #[test]
    fn test_builder() {
        let schema = ValidationSchema::default()
            .column("price", ColumnRule::required("number").with_min(0.0))
            .column("email", ColumnRule::required("email"));

        let names: Vec<_> = schema.columns.keys().cloned().collect();
        assert_eq!(names, vec!["email", "price"]);
        assert_eq!(schema.columns["price"].min, Some(0.0));
    }
}
