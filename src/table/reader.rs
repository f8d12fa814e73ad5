//! CSV reader producing ordered rows of named fields
//!
//! The first record is the header. Every following record becomes a
//! [`Row`] keyed by header name. Cells are kept verbatim (no trimming).
//! Short records leave their trailing columns absent; extra fields past
//! the header are dropped.
//!
//! A blank line between records is a row with no cells, so it keeps its
//! row number and reaches the empty-row check. Blank lines after the last
//! record are end-of-file padding and produce nothing.

use std::io::Read;

use csv::StringRecord;

use super::Row;
use crate::validator::{GuardError, GuardResult};

/// Reads a whole CSV input into memory
#[derive(Debug, Clone, Default)]
pub struct CsvTableReader;

impl CsvTableReader {
    pub fn new() -> Self {
        Self
    }

    /// Drains `input` into rows.
    ///
    /// # Errors
    ///
    /// Returns `GuardError::MalformedCsv` on I/O failure, invalid UTF-8 or
    /// broken quoting.
    pub fn read<R: Read>(&self, mut input: R) -> GuardResult<Vec<Row>> {
        let mut bytes = Vec::new();
        input
            .read_to_end(&mut bytes)
            .map_err(|e| GuardError::MalformedCsv(format!("failed to read input: {}", e)))?;
        self.read_bytes(&bytes)
    }

    /// Reads rows from an in-memory upload
    pub fn read_bytes(&self, bytes: &[u8]) -> GuardResult<Vec<Row>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        let mut record = StringRecord::new();
        loop {
            let start = reader.position().byte() as usize;
            if !reader.read_record(&mut record)? {
                break;
            }

            rows.extend((0..skipped_blank_lines(bytes, start)).map(|_| Row::new()));
            rows.push(
                headers
                    .iter()
                    .zip(record.iter())
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect(),
            );
        }

        Ok(rows)
    }
}

/// Counts the blank lines the parser stepped over before the record that
/// begins at or after `start`.
///
/// The parser ends a CRLF record at the `\r` and consumes the `\n` on the
/// next read, so a leading `\n` right after a `\r` belongs to the previous
/// record's terminator.
fn skipped_blank_lines(input: &[u8], start: usize) -> usize {
    let rest = input.get(start..).unwrap_or_default();
    let len = rest
        .iter()
        .take_while(|&&b| b == b'\r' || b == b'\n')
        .count();
    let mut skipped = &rest[..len];

    if start > 0 && input[start - 1] == b'\r' && skipped.first() == Some(&b'\n') {
        skipped = &skipped[1..];
    }

    // \r\n, \r and \n each end one line
    let mut lines = 0;
    let mut bytes = skipped.iter().peekable();
    while let Some(&b) = bytes.next() {
        if b == b'\r' && bytes.peek() == Some(&&b'\n') {
            bytes.next();
        }
        lines += 1;
    }
    lines
}

/// Case-insensitive `.csv` file name check
pub fn has_csv_extension(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".csv")
}
