//! File-based loading tests.

use adapter_loader::synthetic::{ESG_COLUMNS, FINANCIAL_COLUMNS};
use adapter_loader::{load_and_process, CsvLoader, LoaderError, SyntheticEsgGenerator, SyntheticSpec};
use approx::assert_relative_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_process_imputes_selected_columns() {
    let file = write_temp(
        "Company,ESG_Score,Governance_Score,ROA,Stock_Return\n\
         A,40,NA,0.02,0.10\n\
         B,,70,0.04,\n\
         C,80,50,null,0.30\n",
    );

    let frame = load_and_process(
        file.path(),
        &["ESG_Score", "Governance_Score"],
        &["ROA", "Stock_Return"],
    )
    .unwrap();

    assert_eq!(
        frame.names(),
        &["ESG_Score", "Governance_Score", "ROA", "Stock_Return"]
    );
    assert!(!frame.has_missing());
    assert_relative_eq!(frame.column("ESG_Score").unwrap()[1], 60.0);
    assert_relative_eq!(frame.column("Governance_Score").unwrap()[0], 60.0);
    assert_relative_eq!(frame.column("ROA").unwrap()[2], 0.03);
    assert_relative_eq!(frame.column("Stock_Return").unwrap()[1], 0.20);
}

#[test]
fn test_load_and_process_missing_column() {
    let file = write_temp("ESG_Score,ROA\n1,2\n");
    let err = load_and_process(file.path(), &["ESG_Score"], &["ROE"]).unwrap_err();
    assert!(matches!(err, LoaderError::MissingColumn(c) if c == "ROE"));
}

#[test]
fn test_load_and_process_all_missing_column() {
    let file = write_temp("ESG_Score,ROA\n1,\n2,NA\n");
    let err = load_and_process(file.path(), &["ESG_Score"], &["ROA"]).unwrap_err();
    assert!(matches!(err, LoaderError::AllMissing(c) if c == "ROA"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CsvLoader::new()
        .load(dir.path().join("absent.csv"))
        .unwrap_err();
    assert!(matches!(err, LoaderError::Io(_)));
}

#[test]
fn test_generated_file_loads_with_configured_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("esg.csv");

    SyntheticEsgGenerator::new(SyntheticSpec {
        rows: 120,
        seed: 11,
        missing_rate: 0.05,
    })
    .unwrap()
    .write_to_file(&path)
    .unwrap();

    let frame = load_and_process(&path, &ESG_COLUMNS, &FINANCIAL_COLUMNS).unwrap();
    assert_eq!(frame.n_rows(), 120);
    assert_eq!(frame.n_cols(), ESG_COLUMNS.len() + FINANCIAL_COLUMNS.len());
    assert!(!frame.has_missing());
}
