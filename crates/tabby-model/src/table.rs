//! In-memory table with a fixed, ordered header.

use std::collections::HashSet;

use crate::error::{Result, TableError};

/// Ordered rows of string cells sharing one header.
///
/// Each row is stored positionally, aligned with [`Table::columns`], so a
/// row behaves as a mapping from column name to cell value. Construction
/// guarantees that header names are unique and every row has exactly one
/// cell per column; mutation goes through cell iterators that cannot change
/// a row's width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Shape summary of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Data rows plus the header row.
    pub rows_with_header: usize,
    /// Data rows only.
    pub rows: usize,
    pub columns: usize,
}

impl Table {
    /// Build a table, validating the header and row widths.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(TableError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TableError::RaggedRow {
                    row: index + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            rows_with_header: self.rows.len() + 1,
            rows: self.rows.len(),
            columns: self.columns.len(),
        }
    }

    /// Position of a column in the header.
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|name| name == column)
            .ok_or_else(|| TableError::ColumnNotFound {
                column: column.to_string(),
            })
    }

    /// Cell value by row position and column name.
    pub fn cell(&self, row: usize, column: &str) -> Result<Option<&str>> {
        let index = self.column_index(column)?;
        Ok(self.rows.get(row).map(|cells| cells[index].as_str()))
    }

    /// Values of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index).map(String::as_str))
    }

    /// Mutable cells of one column, top to bottom.
    pub fn column_cells_mut(&mut self, index: usize) -> impl Iterator<Item = &mut String> + '_ {
        self.rows.iter_mut().filter_map(move |row| row.get_mut(index))
    }

    /// Every mutable cell, row by row.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut String> + '_ {
        self.rows.iter_mut().flat_map(|row| row.iter_mut())
    }

    /// Split the table back into header and rows.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.columns, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    fn sample() -> Table {
        Table::new(
            strings(&["Name", "Age", "City"]),
            vec![strings(&["John", "30", "NY"]), strings(&["Mary", "", "LA"])],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let result = Table::new(
            strings(&["A", "B"]),
            vec![strings(&["1", "2"]), strings(&["3"])],
        );
        assert_eq!(
            result,
            Err(TableError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_new_rejects_duplicate_columns() {
        let result = Table::new(strings(&["A", "B", "A"]), Vec::new());
        assert_eq!(
            result,
            Err(TableError::DuplicateColumn {
                column: "A".to_string()
            })
        );
    }

    #[test]
    fn test_dimensions_count_header_row() {
        let dims = sample().dimensions();
        assert_eq!(dims.rows_with_header, 3);
        assert_eq!(dims.rows, 2);
        assert_eq!(dims.columns, 3);
    }

    #[test]
    fn test_dimensions_of_header_only_table() {
        let table = Table::new(strings(&["A"]), Vec::new()).unwrap();
        let dims = table.dimensions();
        assert_eq!(dims.rows_with_header, 1);
        assert_eq!(dims.rows, 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_column_lookup() {
        let table = sample();
        assert_eq!(table.column_index("Age"), Ok(1));
        assert_eq!(
            table.column_index("age"),
            Err(TableError::ColumnNotFound {
                column: "age".to_string()
            })
        );
        assert_eq!(table.cell(1, "City"), Ok(Some("LA")));
        assert_eq!(table.cell(5, "City"), Ok(None));
    }

    #[test]
    fn test_column_values_in_row_order() {
        let table = sample();
        let values: Vec<&str> = table.column_values(0).collect();
        assert_eq!(values, vec!["John", "Mary"]);
    }

    #[test]
    fn test_cell_mutation_keeps_shape() {
        let mut table = sample();
        for cell in table.column_cells_mut(1) {
            if cell.is_empty() {
                *cell = "31".to_string();
            }
        }
        assert_eq!(table.cell(1, "Age"), Ok(Some("31")));
        for cell in table.cells_mut() {
            cell.make_ascii_uppercase();
        }
        assert_eq!(table.rows()[0], strings(&["JOHN", "30", "NY"]));
        assert_eq!(table.column_count(), 3);
    }
}
