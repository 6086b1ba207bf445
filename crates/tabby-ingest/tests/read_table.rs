use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tabby_ingest::{IngestError, read_table};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn write_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Name").unwrap();
    sheet.write_string(0, 1, "Age").unwrap();
    sheet.write_string(0, 2, "Money").unwrap();
    sheet.write_string(1, 0, "John").unwrap();
    sheet.write_number(1, 1, 30.0).unwrap();
    sheet.write_number(1, 2, 12.5).unwrap();
    sheet.write_string(2, 0, "Mary").unwrap();
    sheet.write_string(2, 1, "NaN").unwrap();
    sheet.write_number(2, 2, 7.0).unwrap();
    workbook.save(path).unwrap();
}

#[test]
fn reads_csv_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", "Name,Age\nJohn,30\nMary,-\n");
    let table = read_table(&path).expect("read csv");

    assert_eq!(table.columns(), ["Name", "Age"]);
    assert_eq!(table.rows()[1], vec!["Mary", "-"]);
}

#[test]
fn reads_tsv_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.tsv", "Name\tCity\nJohn\tNew York, NY\n");
    let table = read_table(&path).expect("read tsv");

    assert_eq!(table.columns(), ["Name", "City"]);
    assert_eq!(table.rows()[0], vec!["John", "New York, NY"]);
}

#[test]
fn rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "data.jpg", "Name\nJohn\n");
    let result = read_table(&path);

    assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
}

#[test]
fn unknown_extension_is_rejected_before_reading() {
    let result = read_table(Path::new("/nonexistent/data.jpg"));

    assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
}

#[test]
fn missing_file_is_reported() {
    let result = read_table(Path::new("/nonexistent/data.csv"));

    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn reads_xlsx_with_stringified_numbers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.xlsx");
    write_workbook(&path);

    let table = read_table(&path).expect("read xlsx");
    assert_eq!(table.columns(), ["Name", "Age", "Money"]);
    assert_eq!(table.rows()[0], vec!["John", "30", "12.5"]);
    assert_eq!(table.rows()[1], vec!["Mary", "NaN", "7"]);
}

#[test]
fn reads_ooxml_workbook_with_xls_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.xls");
    write_workbook(&path);

    let table = read_table(&path).expect("read xls");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, "Name").unwrap(), Some("John"));
}
