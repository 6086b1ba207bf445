//! Delimited text serialization.

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tabby_model::Table;

use crate::error::{OutputError, Result};

/// Write the header and every row with the given delimiter.
///
/// Fields are quoted only when necessary.
pub(crate) fn write_delimited<W: Write>(
    table: &Table,
    delimiter: u8,
    sink: W,
    path: &Path,
) -> Result<()> {
    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(sink);
    writer.write_record(table.columns()).map_err(csv_error)?;
    for row in table.rows() {
        writer.write_record(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &Table, delimiter: u8) -> String {
        let mut buffer = Vec::new();
        write_delimited(table, delimiter, &mut buffer, Path::new("mem.csv")).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_csv_quotes_when_needed() {
        let table = Table::new(
            vec!["Name".to_string(), "Note".to_string()],
            vec![vec!["John".to_string(), "a,b".to_string()]],
        )
        .unwrap();
        assert_eq!(render(&table, b','), "Name,Note\nJohn,\"a,b\"\n");
    }

    #[test]
    fn test_write_tsv() {
        let table = Table::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec!["1".to_string(), "x y".to_string()]],
        )
        .unwrap();
        assert_eq!(render(&table, b'\t'), "A\tB\n1\tx y\n");
    }
}
