//! Error types for table writing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing a table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Extension is not one of csv, tsv, xls, xlsx.
    #[error("file type not recognized: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Delimited serialization failed.
    #[error("failed to write {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Workbook serialization failed.
    #[error("failed to build workbook {path}: {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// Table exceeds the worksheet grid.
    #[error("table with {rows} rows and {columns} columns does not fit in a worksheet")]
    SheetTooLarge { rows: usize, columns: usize },

    /// Failed to create or write the staging file.
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to move the staging file into place.
    #[error("failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for writing operations.
pub type Result<T> = std::result::Result<T, OutputError>;
