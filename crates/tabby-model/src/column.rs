//! Column classification results.

use std::fmt;

/// Classification of a column's non-missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Every non-missing value is a plain decimal literal.
    Numeric,
    /// At least one non-missing value is not a decimal literal.
    NotNumeric,
    /// The column has no non-missing values to inspect.
    Indeterminate,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::NotNumeric => "not_numeric",
            ColumnType::Indeterminate => "indeterminate",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
