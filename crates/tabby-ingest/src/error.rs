//! Error types for table loading.

use std::path::PathBuf;

use tabby_model::TableError;
use thiserror::Error;

/// Errors that can occur while loading a table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Extension is not one of csv, tsv, xls, xlsx.
    #[error("file type not recognized: {path}")]
    UnsupportedFormat { path: PathBuf },

    // === File System Errors ===
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Malformed delimited text, including ragged rows.
    #[error("failed to parse {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Workbook could not be opened or its first sheet read.
    #[error("failed to read spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },

    /// File or first worksheet has no header row.
    #[error("no header row in {path}")]
    NoHeader { path: PathBuf },

    /// Parsed rows do not form a valid table.
    #[error("invalid table in {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}

impl IngestError {
    /// Classify an I/O error raised while opening or reading `path`.
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;
