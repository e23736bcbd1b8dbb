//! Streaming CSV reader with iterator interface
//!
//! Provides a streaming iterator over ledger input records, generic over the
//! row type and the domain record it converts to. Delegates CSV format
//! concerns to the csv_format module.
//!
//! # Design
//!
//! `CsvReader` uses csv::Reader to read and deserialize rows sequentially,
//! delegating conversion to a function from the csv_format module. It
//! maintains streaming behavior by processing rows one at a time without
//! loading the entire file into memory.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `open()`
//! - Individual row errors are yielded as Err variants in the iterator
//! - Line numbers are included in error messages for debugging

use crate::io::csv_format::{
    convert_expense_row, convert_member_row, convert_settlement_row, ExpenseRow, MemberRow,
    SettlementRow,
};
use crate::types::{ExpenseDraft, Member, SettlementDraft};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

/// Streaming reader over one of the ledger's CSV input files
///
/// Yields `Result<Record, String>` per row; a bad row does not stop
/// iteration, so callers decide whether to skip or abort.
#[derive(Debug)]
pub struct CsvReader<Row, Record> {
    reader: csv::Reader<File>,
    convert: fn(Row) -> Result<Record, String>,
    line_num: usize,
}

/// Reader over the members file
pub type MemberReader = CsvReader<MemberRow, Member>;

/// Reader over the expenses file
pub type ExpenseReader = CsvReader<ExpenseRow, ExpenseDraft>;

/// Reader over the settlements file
pub type SettlementReader = CsvReader<SettlementRow, SettlementDraft>;

impl<Row: DeserializeOwned, Record> CsvReader<Row, Record> {
    /// Open a CSV file for streaming iteration
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (for trailing optional columns)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    /// * `convert` - Row-to-domain-record conversion function
    ///
    /// # Returns
    ///
    /// * `Ok(CsvReader)` if the file opened successfully
    /// * `Err(String)` if the file could not be opened
    pub fn open(path: &Path, convert: fn(Row) -> Result<Record, String>) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            convert,
            line_num: 0,
        })
    }
}

impl MemberReader {
    /// Open the members file
    pub fn members(path: &Path) -> Result<Self, String> {
        CsvReader::open(path, convert_member_row)
    }
}

impl ExpenseReader {
    /// Open the expenses file
    pub fn expenses(path: &Path) -> Result<Self, String> {
        CsvReader::open(path, convert_expense_row)
    }
}

impl SettlementReader {
    /// Open the settlements file
    pub fn settlements(path: &Path) -> Result<Self, String> {
        CsvReader::open(path, convert_settlement_row)
    }
}

impl<Row: DeserializeOwned, Record> Iterator for CsvReader<Row, Record> {
    type Item = Result<Record, String>;

    /// Get the next domain record from the CSV file
    ///
    /// Reads and deserializes the next row, converts it with the configured
    /// conversion function, and adds line number context to any error.
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Record))` - Successfully parsed record
    /// * `Some(Err(String))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<Row>();

        match deserializer.next()? {
            Ok(row) => {
                self.line_num += 1;
                // Line numbers in errors are 1-based and account for the header
                Some((self.convert)(row).map_err(|e| format!("Line {}: {}", self.line_num + 1, e)))
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "Line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}
