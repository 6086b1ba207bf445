//! Literal find/replace over table cells.

use std::fmt;

use tabby_model::Table;
use tracing::debug;

use crate::error::{Result, TransformError};

/// Token that selects every column instead of a named one.
pub const ALL_COLUMNS: &str = "all";

/// Which columns a value substitution applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnTarget {
    All,
    Named(String),
}

impl From<&str> for ColumnTarget {
    /// `"all"` selects every column; anything else names one column.
    fn from(value: &str) -> Self {
        if value == ALL_COLUMNS {
            ColumnTarget::All
        } else {
            ColumnTarget::Named(value.to_string())
        }
    }
}

impl fmt::Display for ColumnTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnTarget::All => write!(f, "{ALL_COLUMNS}"),
            ColumnTarget::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Replace every cell equal to `old_value` with `new_value`.
///
/// Equality is exact string comparison: no trimming, no case folding and
/// no numeric equivalence (`"30"` does not match `"30.0"`). Returns the
/// number of cells replaced; zero is not an error.
pub fn change_values(
    table: &mut Table,
    target: &ColumnTarget,
    old_value: &str,
    new_value: &str,
) -> Result<usize> {
    let mut replaced = 0usize;
    let mut replace = |cell: &mut String| {
        if cell.as_str() == old_value {
            new_value.clone_into(cell);
            replaced += 1;
        }
    };
    match target {
        ColumnTarget::All => table.cells_mut().for_each(&mut replace),
        ColumnTarget::Named(column) => {
            let index =
                table
                    .column_index(column)
                    .map_err(|_| TransformError::ColumnNotFound {
                        column: column.clone(),
                    })?;
            table.column_cells_mut(index).for_each(&mut replace);
        }
    }
    debug!(column = %target, replaced, "changed values");
    Ok(replaced)
}
