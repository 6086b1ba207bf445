//! Error types for table transformations.

use thiserror::Error;

/// Errors that can occur while transforming a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Referenced column is not in the header.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Column has no non-missing values to derive a fill value from.
    #[error("cannot impute column '{column}': it has no non-missing values")]
    NoDataForImputation { column: String },
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
