//! Format dispatch and atomic replacement of the destination file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tabby_model::{FileFormat, Table};
use tempfile::NamedTempFile;
use tracing::{info, info_span};

use crate::delimited::write_delimited;
use crate::error::{OutputError, Result};
use crate::workbook::workbook_bytes;

/// Build the destination path `NAME.<ext>` for an output name.
pub fn output_path(name: &str, format: FileFormat) -> PathBuf {
    PathBuf::from(format!("{name}.{}", format.extension()))
}

/// Write a table to `path` in the format implied by its extension.
///
/// Spreadsheet destinations (`.xls` included) receive an OOXML workbook.
///
/// # Errors
///
/// Returns [`OutputError::UnsupportedFormat`] for unknown extensions, before
/// anything is created on disk.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let format = FileFormat::from_path(path).ok_or_else(|| OutputError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let span = info_span!("write_table", path = %path.display(), format = %format);
    let _guard = span.enter();

    let mut staged = staging_file(path)?;
    match format.delimiter() {
        Some(delimiter) => write_delimited(table, delimiter, staged.as_file_mut(), path)?,
        None => {
            let bytes = workbook_bytes(table, path)?;
            staged.write_all(&bytes).map_err(|source| OutputError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    staged
        .as_file()
        .sync_all()
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    staged.persist(path).map_err(|err| OutputError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;

    info!(rows = table.row_count(), "table written");
    Ok(())
}

/// Create a temporary file in the destination directory.
///
/// Staging next to the destination keeps the final rename on one
/// filesystem. An existing destination lends its permissions to the staged
/// file; a new one gets the mode a plain create would give.
fn staging_file(path: &Path) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    fs::create_dir_all(dir).map_err(io_error)?;
    let existing = fs::metadata(path).ok().map(|metadata| metadata.permissions());
    let staged = new_staging_file(dir).map_err(io_error)?;
    if let Some(permissions) = existing {
        staged.as_file().set_permissions(permissions).map_err(io_error)?;
    }
    Ok(staged)
}

#[cfg(unix)]
fn new_staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    // 0o666 is narrowed by the umask, exactly like `File::create`.
    tempfile::Builder::new()
        .permissions(Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
