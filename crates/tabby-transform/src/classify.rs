//! Column type classification.

use tabby_model::{ColumnType, Table, is_missing};
use tracing::trace;

use crate::error::{Result, TransformError};
use crate::numeric::is_decimal_literal;

/// Classify one column by inspecting its non-missing values.
///
/// A column is [`ColumnType::Numeric`] when every non-missing value is a
/// decimal literal (see [`is_decimal_literal`]) and
/// [`ColumnType::NotNumeric`] as soon as one value is not. A column with no
/// non-missing values is [`ColumnType::Indeterminate`].
pub fn classify_column(table: &Table, column: &str) -> Result<ColumnType> {
    let index = table
        .column_index(column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let kind = classify_values(table.column_values(index));
    trace!(column, kind = %kind, "classified column");
    Ok(kind)
}

/// Classify every column, in header order.
pub fn classify_columns(table: &Table) -> Vec<(String, ColumnType)> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, name)| (name.clone(), classify_values(table.column_values(index))))
        .collect()
}

fn classify_values<'a>(values: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut seen_value = false;
    for value in values.filter(|value| !is_missing(value)) {
        if !is_decimal_literal(value) {
            return ColumnType::NotNumeric;
        }
        seen_value = true;
    }
    if seen_value {
        ColumnType::Numeric
    } else {
        ColumnType::Indeterminate
    }
}
