//! Format dispatch for table loading.

use std::path::Path;

use tabby_model::{FileFormat, Table};
use tracing::{info, info_span};

use crate::delimited::read_delimited;
use crate::error::{IngestError, Result};
use crate::spreadsheet::read_spreadsheet;

/// Resolve the file format from a path's extension.
///
/// # Errors
///
/// Returns [`IngestError::UnsupportedFormat`] when the extension is not
/// csv, tsv, xls or xlsx. The file itself is never touched.
pub fn detect_format(path: &Path) -> Result<FileFormat> {
    FileFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })
}

/// Load a table, choosing the parser from the file extension.
///
/// # Errors
///
/// Returns [`IngestError::UnsupportedFormat`] before touching the file when
/// the extension is not csv, tsv, xls or xlsx.
pub fn read_table(path: &Path) -> Result<Table> {
    read_table_as(path, detect_format(path)?)
}

/// Load a table with an already resolved format.
pub fn read_table_as(path: &Path, format: FileFormat) -> Result<Table> {
    let span = info_span!("read_table", path = %path.display(), format = %format);
    let _guard = span.enter();

    let table = match format.delimiter() {
        Some(delimiter) => read_delimited(path, delimiter)?,
        None => read_spreadsheet(path)?,
    };
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "table loaded"
    );
    Ok(table)
}
