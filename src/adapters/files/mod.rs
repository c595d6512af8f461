//! File format adapters for batch uploads.

pub mod csv_codec;

pub use csv_codec::{CsvTable, RESULT_COLUMNS, decode_upload, write_csv};
