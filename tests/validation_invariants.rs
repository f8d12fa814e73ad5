//! Validation Invariant Tests
//!
//! End-to-end checks of the engine over parsed CSV:
//! - `valid` is exactly "no errors"
//! - Row numbers are 1-based data row positions, non-decreasing
//! - Required and type findings never both fire for one cell
//! - Bounds are inclusive
//! - Every row is evaluated; nothing stops early

use fileguard::schema::{ColumnRule, SchemaLoader, SchemaOptions, ValidationSchema};
use fileguard::table::{CsvTableReader, Row};
use fileguard::validator::{GuardError, ValidationEngine, ValidationError};

// =============================================================================
// Helper Functions
// =============================================================================

fn reference_schema() -> ValidationSchema {
    SchemaLoader::from_json(
        r#"{
            "columns": {
                "email": {"required": true, "type": "email"},
                "price": {"required": true, "type": "number", "min": 0}
            },
            "options": {"allowEmptyRows": false, "allowDuplicates": true}
        }"#,
    )
    .unwrap()
}

fn rows(csv: &str) -> Vec<Row> {
    CsvTableReader::new().read_bytes(csv.as_bytes()).unwrap()
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_conforming_file_is_valid() {
    let schema = reference_schema();
    let table = rows("email,price\ntest@test.com,10\nhola@hola.com,5");

    let result = ValidationEngine::new(&schema).validate(&table).unwrap();

    assert!(result.valid());
    assert!(result.errors().is_empty());
}

#[test]
fn test_findings_are_addressed_by_row_and_column() {
    let schema = reference_schema();
    let table = rows("email,price\nbademail,-5\n,10");

    let result = ValidationEngine::new(&schema).validate(&table).unwrap();

    assert!(!result.valid());
    assert_eq!(
        result.errors(),
        &[
            ValidationError::new(1, "email", "invalid email format"),
            ValidationError::new(1, "price", "value less than minimum"),
            ValidationError::new(2, "email", "required field is empty"),
        ]
    );
}

#[test]
fn test_empty_table_is_not_a_verdict() {
    let schema = reference_schema();
    let table = rows("email,price\n");

    let result = ValidationEngine::new(&schema).validate(&table);
    assert_eq!(result, Err(GuardError::EmptyTable));
}

#[test]
fn test_unsupported_type_one_error_per_cell() {
    let schema = ValidationSchema::default()
        .column("active", ColumnRule::optional("boolean"))
        .column("id", ColumnRule::required("integer"));
    let table = rows("active,id\ntrue,1\nfalse,2\n,3\n yes ,4\n");

    let result = ValidationEngine::new(&schema).validate(&table).unwrap();

    assert!(result
        .errors()
        .iter()
        .all(|e| e.message == "type not supported: boolean"));
    let flagged: Vec<_> = result.errors().iter().map(|e| e.row).collect();
    assert_eq!(flagged, vec![1, 2, 4]);
}

#[test]
fn test_fractional_integer_single_error() {
    let schema = ValidationSchema::default().column("qty", ColumnRule::optional("integer"));
    let table = rows("qty\n3.5\n");

    let result = ValidationEngine::new(&schema).validate(&table).unwrap();

    assert_eq!(
        result.errors(),
        &[ValidationError::new(1, "qty", "incorrect type, expected integer")]
    );
}

// =============================================================================
// Structural Invariants
// =============================================================================

/// `valid` always equals "no errors".
#[test]
fn test_valid_matches_error_list() {
    let schema = reference_schema();
    for csv in [
        "email,price\na@b.co,1",
        "email,price\na@b.co,-1",
        "email,price\n,",
        "email,price\nx,y\nz,w",
    ] {
        let result = ValidationEngine::new(&schema).validate(&rows(csv)).unwrap();
        assert_eq!(result.valid(), result.errors().is_empty(), "csv: {:?}", csv);
    }
}

/// Errors stay within rows x columns and rows are non-decreasing.
#[test]
fn test_error_bound_and_row_ordering() {
    let schema = ValidationSchema::default()
        .column("a", ColumnRule::required("integer").with_min(0.0))
        .column("b", ColumnRule::optional("email"))
        .column("c", ColumnRule::optional("number").with_max(1.0));
    let table = rows("a,b,c\n-1,bad,5\n,,\nx,y,z\n1,ok@ok.io,0.5\n-2,no,2\n");

    let result = ValidationEngine::new(&schema).validate(&table).unwrap();

    assert!(result.errors().len() <= table.len() * schema.columns.len());
    let row_numbers: Vec<_> = result.errors().iter().map(|e| e.row).collect();
    let mut sorted = row_numbers.clone();
    sorted.sort();
    assert_eq!(row_numbers, sorted);
    assert!(row_numbers.iter().all(|&r| r >= 1 && r <= table.len()));
}

/// A blank required cell is never also type-checked.
#[test]
fn test_required_and_type_findings_exclusive() {
    let schema = ValidationSchema::default()
        .column("n", ColumnRule::required("number").with_min(10.0))
        .column("m", ColumnRule::required("email"))
        .column("note", ColumnRule::optional("string"));
    let table = rows("n,m,note\n   ,,kept\n");

    let result = ValidationEngine::new(&schema).validate(&table).unwrap();

    assert_eq!(result.errors().len(), 2);
    assert!(result
        .errors()
        .iter()
        .all(|e| e.message == "required field is empty"));
}

/// Bounds accept both endpoints.
#[test]
fn test_bounds_inclusive_end_to_end() {
    let schema = ValidationSchema::default()
        .column("score", ColumnRule::required("integer").with_min(1.0).with_max(5.0))
        .with_options(SchemaOptions {
            allow_empty_rows: false,
            allow_duplicates: true,
        });
    let table = rows("score\n1\n5\n0\n6\n");

    let result = ValidationEngine::new(&schema).validate(&table).unwrap();

    assert_eq!(
        result.errors(),
        &[
            ValidationError::new(3, "score", "value less than minimum"),
            ValidationError::new(4, "score", "value greater than maximum"),
        ]
    );
}

/// Columns missing from the header are absent, not a parse failure.
#[test]
fn test_column_missing_from_file() {
    let schema = ValidationSchema::default()
        .column("id", ColumnRule::required("integer"))
        .column("nickname", ColumnRule::optional("string"));
    let table = rows("id\n1\n2\n");

    let result = ValidationEngine::new(&schema).validate(&table).unwrap();
    assert!(result.valid());

    let schema = schema.column("email", ColumnRule::required("email"));
    let result = ValidationEngine::new(&schema).validate(&table).unwrap();
    assert_eq!(result.errors().len(), 2);
    assert!(result.errors().iter().all(|e| e.column == "email"));
}

/// Same input, same verdict.
#[test]
fn test_validation_is_deterministic() {
    let schema = reference_schema();
    let table = rows("email,price\nbademail,-5\n,10\nx@y.io,abc\n");
    let engine = ValidationEngine::new(&schema);

    let first = engine.validate(&table).unwrap();
    for _ in 0..50 {
        assert_eq!(engine.validate(&table).unwrap(), first);
    }
}

/// One engine serves concurrent callers.
#[test]
fn test_concurrent_validation() {
    let schema = reference_schema();
    let engine = ValidationEngine::new(&schema);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let engine = &engine;
                scope.spawn(move || {
                    let csv = format!("email,price\nuser{}@x.io,{}\nbad,{}\n", i, i, i);
                    engine.validate(&rows(&csv)).unwrap()
                })
            })
            .collect();

        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(
                result.errors(),
                &[ValidationError::new(2, "email", "invalid email format")]
            );
        }
    });
}

// =============================================================================
// File-Level Options
// =============================================================================

#[test]
fn test_options_default_flag_empty_and_duplicate_rows() {
    let schema = ValidationSchema::default().column("name", ColumnRule::optional("string"));
    let table = rows("name,other\nalice,1\n,2\nalice,3\n");

    let result = ValidationEngine::new(&schema).validate(&table).unwrap();

    assert_eq!(
        result.errors(),
        &[
            ValidationError::new(2, "row", "empty row not allowed"),
            ValidationError::new(3, "row", "duplicate of row 1"),
        ]
    );
}

/// A blank line is a row: it is flagged and keeps its number.
#[test]
fn test_blank_line_flagged_as_empty_row() {
    let schema = reference_schema();
    let table = rows("email,price\na@b.co,1\n\nc@d.co,-2\n");

    let result = ValidationEngine::new(&schema).validate(&table).unwrap();

    assert_eq!(
        result.errors(),
        &[
            ValidationError::new(2, "row", "empty row not allowed"),
            ValidationError::new(3, "price", "value less than minimum"),
        ]
    );
}

#[test]
fn test_blank_line_skipped_when_allowed() {
    let schema = reference_schema().with_options(SchemaOptions {
        allow_empty_rows: true,
        allow_duplicates: true,
    });
    let table = rows("email,price\na@b.co,1\n\nc@d.co,-2\n");

    let result = ValidationEngine::new(&schema).validate(&table).unwrap();

    assert_eq!(
        result.errors(),
        &[ValidationError::new(3, "price", "value less than minimum")]
    );
}

#[test]
fn test_options_permissive() {
    let schema = ValidationSchema::default()
        .column("name", ColumnRule::optional("string"))
        .with_options(SchemaOptions {
            allow_empty_rows: true,
            allow_duplicates: true,
        });
    let table = rows("name,other\nalice,1\n,2\nalice,3\n");

    assert!(ValidationEngine::new(&schema).validate(&table).unwrap().valid());
}
