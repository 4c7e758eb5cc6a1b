//! Configuration file handling.

use infra_config::{AnalysisConfig, ConfigError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_load_and_validate_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
file_path = "data/esg.csv"
esg_columns = ["ESG_Score", "Governance_Score"]
financial_columns = ["ROA"]
selected_columns = ["ESG_Score", "ROA"]
shock_levels = [-0.25, 0.25]
significance_level = 0.01
output_dir = "out/reports"
export_tables = false
parallel = false
log_level = "warn"
"#
    )
    .unwrap();

    let config = AnalysisConfig::load_and_validate(file.path()).unwrap();
    assert_eq!(config.esg_columns.len(), 2);
    assert_eq!(config.shock_levels, vec![-0.25, 0.25]);
    assert_eq!(config.output_dir, PathBuf::from("out/reports"));
    assert!(!config.export_tables);
    assert!(!config.parallel);
}

#[test]
fn test_invalid_file_reports_all_problems() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
esg_columns = []
shock_levels = [-1.5]
significance_level = 0.0
"#
    )
    .unwrap();

    let err = AnalysisConfig::load_and_validate(file.path()).unwrap_err();
    assert_eq!(err.messages().len(), 3, "{err}");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("esgrisk.toml");

    assert!(matches!(
        AnalysisConfig::load(&path),
        Err(ConfigError::Io { .. })
    ));
    assert_eq!(
        AnalysisConfig::load_or_default(&path).unwrap(),
        AnalysisConfig::default()
    );
}

#[test]
fn test_malformed_toml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "esg_columns = [\"ESG_Score\"").unwrap();
    assert!(matches!(
        AnalysisConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
}
