//! File format detection.

use std::fmt;
use std::path::Path;

/// Supported table file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Csv,
    Tsv,
    Xls,
    Xlsx,
}

impl FileFormat {
    /// Infer the format from the trailing extension of a path.
    ///
    /// Matching ignores ASCII case. Returns `None` for anything other than
    /// `csv`, `tsv`, `xls` or `xlsx`, including paths without an extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        [Self::Csv, Self::Tsv, Self::Xls, Self::Xlsx]
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    /// Canonical extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Tsv => "tsv",
            FileFormat::Xls => "xls",
            FileFormat::Xlsx => "xlsx",
        }
    }

    /// Field delimiter for text formats, `None` for spreadsheets.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            FileFormat::Csv => Some(b','),
            FileFormat::Tsv => Some(b'\t'),
            FileFormat::Xls | FileFormat::Xlsx => None,
        }
    }

    pub fn is_spreadsheet(&self) -> bool {
        self.delimiter().is_none()
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
