//! Table loading for the tabby table manipulator.
//!
//! This crate reads a single file into a [`Table`](tabby_model::Table),
//! choosing the parser from the file extension.
//!
//! # Features
//!
//! - **Delimited text**: `.csv` and `.tsv` through the `csv` crate
//! - **Spreadsheets**: `.xls` and `.xlsx` through `calamine`, first
//!   worksheet only
//! - **All-string cells**: spreadsheet numbers, booleans and dates are
//!   stringified so every cell is text
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabby_ingest::read_table;
//!
//! let table = read_table(Path::new("data.xlsx"))?;
//! println!("{} rows", table.row_count());
//! ```

mod delimited;
mod error;
mod reader;
mod spreadsheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use delimited::read_delimited;
pub use reader::{detect_format, read_table, read_table_as};
pub use spreadsheet::{cell_to_string, read_spreadsheet};
