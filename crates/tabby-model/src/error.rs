//! Error types for table construction and lookup.

use thiserror::Error;

/// Errors raised when a table's shape invariants are violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Column name is not part of the header.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Header names a column more than once.
    #[error("duplicate column '{column}' in header")]
    DuplicateColumn { column: String },

    /// Row width differs from the header width.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
