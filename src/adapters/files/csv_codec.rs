//! CSV codec for batch uploads. Uses the `csv` crate for safe parsing and quoting.
//!
//! Uploads are decoded leniently (UTF-8, else Latin-1) and read into an in-memory table;
//! the table is written back with Python-compatible defaults (minimal quoting, CRLF rows).

use crate::domain::ValidationError;
use std::borrow::Cow;
use tracing::debug;

/// Columns appended to every batch output, in order.
pub const RESULT_COLUMNS: [&str; 3] = ["gender", "full_name", "corrected_input"];

/// Column names searched for the name, in order. Case-sensitive.
const NAME_COLUMNS: [&str; 2] = ["name", "Name"];

/// Decode an upload as UTF-8, falling back to Latin-1. Never fails.
pub fn decode_upload(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(e) => {
            debug!(error = %e, "upload is not UTF-8, decoding as Latin-1");
            // Latin-1 maps each byte to the code point of the same value.
            Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())
        }
    }
}

/// Header row plus data rows. Every row is exactly as wide as the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parse header-delimited CSV text. Short rows are padded with empty cells, long rows are
    /// cut to the header width. Empty input gives an empty table.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = rdr
            .headers()
            .map_err(invalid_csv)?
            .iter()
            .map(str::to_string)
            .collect();

        let width = headers.len();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(invalid_csv)?;
            let mut row: Vec<String> = record.iter().take(width).map(str::to_string).collect();
            row.resize(width, String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Index of the first column with the given exact name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Name cell of a row: `name` if non-empty, else `Name` if non-empty, else `None`.
    pub fn name_of<'r>(&self, row: &'r [String]) -> Option<&'r str> {
        NAME_COLUMNS
            .iter()
            .filter_map(|col| self.column(col))
            .map(|idx| row[idx].as_str())
            .find(|v| !v.is_empty())
    }
}

fn invalid_csv(e: csv::Error) -> ValidationError {
    ValidationError::InvalidCsv(e.to_string())
}

/// Serialize headers and rows (already widened with the result columns) to CSV text.
pub fn write_csv(headers: &[String], rows: &[Vec<String>]) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_upload("name\nСаша".as_bytes()), "name\nСаша");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // "José" in Latin-1: 0xE9 is not valid UTF-8 on its own.
        let bytes = [b'J', b'o', b's', 0xE9];
        assert_eq!(decode_upload(&bytes), "José");
    }

    #[test]
    fn test_parse_pads_and_truncates() {
        let table = CsvTable::parse("name,age\nСаша\nМаша,20,extra\n").unwrap();
        assert_eq!(table.headers, vec!["name", "age"]);
        assert_eq!(table.rows[0], vec!["Саша".to_string(), String::new()]);
        assert_eq!(table.rows[1], vec!["Маша".to_string(), "20".to_string()]);
    }

    #[test]
    fn test_parse_empty_input() {
        let table = CsvTable::parse("").unwrap();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_name_column_fallback() {
        let table = CsvTable::parse("name,Name\n,Аня\nСаша,Маша\n,\n").unwrap();
        assert_eq!(table.name_of(&table.rows[0]), Some("Аня"));
        assert_eq!(table.name_of(&table.rows[1]), Some("Саша"));
        assert_eq!(table.name_of(&table.rows[2]), None);
    }

    #[test]
    fn test_name_column_is_case_sensitive() {
        let table = CsvTable::parse("NAME\nСаша\n").unwrap();
        assert_eq!(table.name_of(&table.rows[0]), None);
    }

    #[test]
    fn test_write_quotes_and_crlf() {
        let headers = vec!["name".to_string(), "note".to_string()];
        let rows = vec![vec!["Саша".to_string(), "a, \"b\"".to_string()]];
        let text = write_csv(&headers, &rows).unwrap();
        assert_eq!(text, "name,note\r\nСаша,\"a, \"\"b\"\"\"\r\n");
    }
}
