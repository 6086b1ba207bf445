//! Spreadsheet serialization.
//!
//! The workbook is always built fresh from the table: one worksheet, a
//! header row, and every cell written as a string so the all-text cell
//! model survives a round trip. Empty cells are written as blanks so the
//! sheet dimension still covers trailing empty rows and columns.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tabby_model::Table;

use crate::error::{OutputError, Result};

/// Serialize a table into an in-memory OOXML workbook.
pub(crate) fn workbook_bytes(table: &Table, path: &Path) -> Result<Vec<u8>> {
    let too_large = || OutputError::SheetTooLarge {
        rows: table.row_count(),
        columns: table.column_count(),
    };
    let xlsx_error = |source| OutputError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    };

    let blank = Format::new();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in table.columns().iter().enumerate() {
        let col = u16::try_from(col).map_err(|_| too_large())?;
        write_text(sheet, 0, col, name, &blank).map_err(xlsx_error)?;
    }
    for (index, row) in table.rows().iter().enumerate() {
        let row_number = u32::try_from(index + 1).map_err(|_| too_large())?;
        for (col, value) in row.iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| too_large())?;
            write_text(sheet, row_number, col, value, &blank).map_err(xlsx_error)?;
        }
    }
    workbook.save_to_buffer().map_err(xlsx_error)
}

fn write_text(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    blank: &Format,
) -> std::result::Result<(), XlsxError> {
    if value.is_empty() {
        sheet.write_blank(row, col, blank)?;
    } else {
        sheet.write_string(row, col, value)?;
    }
    Ok(())
}
