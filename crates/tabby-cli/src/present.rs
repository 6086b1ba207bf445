//! Terminal rendering of tables and summary views.

use std::io::{self, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table as Grid};

use tabby_model::{ColumnType, Dimensions, Table};
use tabby_transform::classify_columns;

/// Which views to print and how to style them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentOptions {
    pub dimensions: bool,
    /// Print the column listing instead of the full grid.
    pub list_columns: bool,
    pub bold_header: bool,
    /// `Some(true)` forces ANSI styling, `Some(false)` disables it, `None`
    /// styles only when stdout is a terminal.
    pub styling: Option<bool>,
}

/// Write the requested views: dimensions first, then either the column
/// listing or the full table.
pub fn write_views<W: Write>(
    out: &mut W,
    table: &Table,
    options: &PresentOptions,
) -> io::Result<()> {
    if options.dimensions {
        let mut grid = dimensions_view(table.dimensions());
        apply_styling(&mut grid, options.styling);
        writeln!(out, "{grid}")?;
    }
    let mut grid = if options.list_columns {
        column_types_view(&classify_columns(table))
    } else {
        table_view(table, options.bold_header)
    };
    apply_styling(&mut grid, options.styling);
    writeln!(out, "{grid}")
}

/// Full table grid; numeric columns are right-aligned.
pub fn table_view(table: &Table, bold_header: bool) -> Grid {
    let mut grid = Grid::new();
    grid.load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    grid.set_header(table.columns().iter().map(|name| {
        if bold_header {
            Cell::new(name).add_attribute(Attribute::Bold)
        } else {
            Cell::new(name)
        }
    }));
    for (index, (_, kind)) in classify_columns(table).into_iter().enumerate() {
        if kind.is_numeric() {
            align_column(&mut grid, index, CellAlignment::Right);
        }
    }
    for row in table.rows() {
        grid.add_row(row);
    }
    grid
}

/// Row and column counts.
pub fn dimensions_view(dimensions: Dimensions) -> Grid {
    let mut grid = Grid::new();
    grid.set_header(vec![
        header_cell("Number of rows with Header"),
        header_cell("Number of rows"),
        header_cell("Number of columns"),
    ]);
    apply_table_style(&mut grid);
    for index in 0..3 {
        align_column(&mut grid, index, CellAlignment::Center);
    }
    grid.add_row(vec![
        Cell::new(dimensions.rows_with_header),
        Cell::new(dimensions.rows),
        Cell::new(dimensions.columns),
    ]);
    grid
}

/// Column names with their classification.
pub fn column_types_view(columns: &[(String, ColumnType)]) -> Grid {
    let mut grid = Grid::new();
    grid.set_header(vec![header_cell("Column name"), header_cell("Column type")]);
    apply_table_style(&mut grid);
    for (name, kind) in columns {
        grid.add_row(vec![Cell::new(name), type_cell(*kind)]);
    }
    grid
}

fn apply_table_style(grid: &mut Grid) {
    grid.load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_styling(grid: &mut Grid, styling: Option<bool>) {
    match styling {
        Some(true) => {
            grid.enforce_styling();
        }
        Some(false) => {
            grid.force_no_tty();
        }
        None => {}
    }
}

fn align_column(grid: &mut Grid, index: usize, alignment: CellAlignment) {
    if let Some(column) = grid.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(kind: ColumnType) -> Cell {
    match kind {
        ColumnType::Numeric => Cell::new(kind).fg(Color::Green),
        ColumnType::NotNumeric => Cell::new(kind),
        ColumnType::Indeterminate => Cell::new(kind).fg(Color::DarkGrey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_view_headers() {
        let rendered = dimensions_view(Dimensions {
            rows_with_header: 3,
            rows: 2,
            columns: 3,
        })
        .force_no_tty()
        .to_string();
        assert!(rendered.contains("Number of rows with Header"));
        assert!(rendered.contains("Number of columns"));
    }
}
