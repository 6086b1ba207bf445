//! Delimited text reading (CSV and TSV).

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tabby_model::Table;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Read a delimited text file whose first record is the header.
///
/// Cells are kept verbatim, with no trimming or type coercion. Every record
/// must have exactly as many fields as the header; a ragged record is
/// reported as [`IngestError::CsvParse`]. Blank lines are skipped.
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<Table> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(file);
    let parse_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let columns: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(str::to_string)
        .collect();
    if columns.is_empty() {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = columns.len(),
        "read delimited file"
    );

    Table::new(columns, rows).map_err(|source| IngestError::Table {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_keeps_values_as_text() {
        let file = create_temp_file("Name,Age,Money\nJohn,30,30.0\nMary,,NaN\n");
        let table = read_delimited(file.path(), b',').unwrap();

        assert_eq!(table.columns(), ["Name", "Age", "Money"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0], vec!["John", "30", "30.0"]);
        assert_eq!(table.rows()[1], vec!["Mary", "", "NaN"]);
    }

    #[test]
    fn test_read_tsv() {
        let file = create_temp_file("A\tB\n1\tx, y\n");
        let table = read_delimited(file.path(), b'\t').unwrap();

        assert_eq!(table.columns(), ["A", "B"]);
        assert_eq!(table.rows()[0], vec!["1", "x, y"]);
    }

    #[test]
    fn test_read_csv_preserves_whitespace_and_quotes() {
        let file = create_temp_file("A,B\n\" padded \",\"a,b\"\n");
        let table = read_delimited(file.path(), b',').unwrap();

        assert_eq!(table.rows()[0], vec![" padded ", "a,b"]);
    }

    #[test]
    fn test_read_csv_header_only() {
        let file = create_temp_file("A,B,C\n");
        let table = read_delimited(file.path(), b',').unwrap();

        assert_eq!(table.column_count(), 3);
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_csv_ragged_row_fails() {
        let file = create_temp_file("A,B\n1,2\n3\n");
        let result = read_delimited(file.path(), b',');

        assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    }

    #[test]
    fn test_read_csv_empty_file() {
        let file = create_temp_file("");
        let result = read_delimited(file.path(), b',');

        assert!(matches!(result, Err(IngestError::NoHeader { .. })));
    }

    #[test]
    fn test_read_csv_duplicate_header() {
        let file = create_temp_file("A,A\n1,2\n");
        let result = read_delimited(file.path(), b',');

        assert!(matches!(result, Err(IngestError::Table { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_delimited(Path::new("/nonexistent/tabby/data.csv"), b',');

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
