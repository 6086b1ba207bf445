//! Spreadsheet reading (XLS and XLSX) via calamine.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Dimensions, Range, Reader, Sheets, open_workbook_auto_from_rs};
use tabby_model::Table;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Read the first worksheet of a workbook.
///
/// The container is detected from the file contents, so an OOXML workbook
/// saved with an `.xls` extension (or the reverse) still loads. The first
/// row of the used range is the header; every cell is stringified with
/// [`cell_to_string`].
pub fn read_spreadsheet(path: &Path) -> Result<Table> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    let spreadsheet_error = |message: String| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| spreadsheet_error(e.to_string()))?;
    let sheet_names = workbook.sheet_names();
    if sheet_names.len() > 1 {
        warn!(
            path = %path.display(),
            sheets = sheet_names.len(),
            "workbook has several worksheets, reading only the first"
        );
    }
    let no_header = || IngestError::NoHeader {
        path: path.to_path_buf(),
    };
    let sheet = sheet_names.first().ok_or_else(no_header)?;
    let declared = declared_dimensions(&mut workbook, sheet);
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| spreadsheet_error(e.to_string()))?;
    let (start, end) = sheet_bounds(&range, declared).ok_or_else(no_header)?;

    let cell_text = |row: u32, col: u32| {
        range
            .get_value((row, col))
            .map(cell_to_string)
            .unwrap_or_default()
    };
    let columns: Vec<String> = (start.1..=end.1)
        .enumerate()
        .map(|(index, col)| match cell_text(start.0, col) {
            name if name.is_empty() => format!("column_{}", index + 1),
            name => name,
        })
        .collect();
    let rows: Vec<Vec<String>> = (start.0 + 1..=end.0)
        .map(|row| (start.1..=end.1).map(|col| cell_text(row, col)).collect())
        .collect();
    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = columns.len(),
        "read worksheet"
    );

    Table::new(columns, rows).map_err(|source| IngestError::Table {
        path: path.to_path_buf(),
        source,
    })
}

/// Extent recorded in an OOXML sheet's `<dimension>` element.
///
/// Blank cells never reach the parsed range, so trailing empty rows and
/// columns are only visible here. BIFF workbooks and sheets without the
/// element yield `None`.
fn declared_dimensions<RS: Read + Seek>(
    workbook: &mut Sheets<RS>,
    sheet: &str,
) -> Option<Dimensions> {
    match workbook {
        Sheets::Xlsx(xlsx) => xlsx
            .worksheet_cells_reader(sheet)
            .ok()
            .map(|reader| reader.dimensions())
            .filter(|dimensions| *dimensions != Dimensions::default()),
        _ => None,
    }
}

/// Absolute `(row, column)` corners covering both the parsed cells and the
/// declared extent.
fn sheet_bounds(
    range: &Range<Data>,
    declared: Option<Dimensions>,
) -> Option<((u32, u32), (u32, u32))> {
    let parsed = range.start().zip(range.end());
    match (parsed, declared) {
        (Some((start, end)), Some(declared)) => Some((
            (start.0.min(declared.start.0), start.1.min(declared.start.1)),
            (end.0.max(declared.end.0), end.1.max(declared.end.1)),
        )),
        (Some(bounds), None) => Some(bounds),
        (None, Some(declared)) => Some((declared.start, declared.end)),
        (None, None) => None,
    }
}

/// Render a spreadsheet cell as text.
///
/// Integral floats drop their fractional part (`30.0` becomes `"30"`),
/// empty cells become `""`, and everything else uses its natural display
/// form.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) | Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("NY".into())), "NY");
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
        assert_eq!(cell_to_string(&Data::Float(30.0)), "30");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_sheet_bounds_extends_to_declared() {
        let range: Range<Data> = Range::new((0, 0), (1, 1));
        let declared = Dimensions {
            start: (0, 0),
            end: (3, 2),
        };
        assert_eq!(sheet_bounds(&range, Some(declared)), Some(((0, 0), (3, 2))));
        assert_eq!(sheet_bounds(&range, None), Some(((0, 0), (1, 1))));
        assert_eq!(sheet_bounds(&Range::empty(), None), None);
    }

    #[test]
    fn test_read_garbage_fails() {
        let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        std::io::Write::write_all(&mut file, b"not a workbook").unwrap();
        let result = read_spreadsheet(file.path());

        assert!(matches!(result, Err(IngestError::Spreadsheet { .. })));
    }
}
