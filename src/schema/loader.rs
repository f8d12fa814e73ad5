//! Schema loading from JSON text or schema files
//!
//! Loading only checks that the document has the schema shape. Whether it
//! declares any columns is checked by the engine, and unknown type tags
//! are left for the type checker.

use std::fs;
use std::path::Path;

use super::types::ValidationSchema;
use crate::validator::{GuardError, GuardResult};

/// Deserializes validation schemas
pub struct SchemaLoader;

impl SchemaLoader {
    /// Parses a schema document from JSON text.
    pub fn from_json(text: &str) -> GuardResult<ValidationSchema> {
        let schema: ValidationSchema = serde_json::from_str(text)?;
        Ok(schema)
    }

    /// Reads and parses a schema file.
    pub fn from_path(path: &Path) -> GuardResult<ValidationSchema> {
        let content = fs::read_to_string(path).map_err(|e| {
            GuardError::Internal(format!(
                "failed to read schema file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }
}
