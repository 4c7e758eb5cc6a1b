//! Analysis configuration.
//!
//! Loaded from a TOML file with `ESGRISK_*` environment variable overrides.
//! Every field has a default, so an empty file (or no file) yields a usable
//! configuration for the generated sample dataset.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Log levels accepted by `log_level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Input CSV path
    pub file_path: PathBuf,

    /// ESG predictor columns
    pub esg_columns: Vec<String>,

    /// Financial response columns
    pub financial_columns: Vec<String>,

    /// Columns for the scatter matrix; empty means ESG then financial columns
    pub selected_columns: Vec<String>,

    /// Shock fractions, e.g. `0.1` for +10%
    pub shock_levels: Vec<f64>,

    /// Significance level for the correlation screen
    pub significance_level: f64,

    /// Directory for plots and exported tables
    pub output_dir: PathBuf,

    /// Write result tables as CSV and JSON
    pub export_tables: bool,

    /// Fan combination grids out over rayon
    pub parallel: bool,

    /// Log level
    pub log_level: String,
}

fn default_esg_columns() -> Vec<String> {
    ["ESG_Score", "Environmental_Score", "Social_Score", "Governance_Score"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_financial_columns() -> Vec<String> {
    ["ROA", "ROE", "Profit_Margin", "Stock_Return"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("data/esg_financial_data.csv"),
            esg_columns: default_esg_columns(),
            financial_columns: default_financial_columns(),
            selected_columns: Vec::new(),
            shock_levels: vec![-0.2, -0.1, 0.1, 0.2],
            significance_level: 0.05,
            output_dir: PathBuf::from("reports"),
            export_tables: true,
            parallel: true,
            log_level: "info".to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise start from defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Recognised keys: `ESGRISK_FILE_PATH`, `ESGRISK_OUTPUT_DIR`,
    /// `ESGRISK_LOG_LEVEL`, `ESGRISK_SHOCK_LEVELS` (comma-separated).
    ///
    /// # Errors
    /// `Validation` if `ESGRISK_SHOCK_LEVELS` has an entry that is not a number.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(file_path) = lookup("ESGRISK_FILE_PATH") {
            debug!(key = "ESGRISK_FILE_PATH", value = %file_path, "Environment override applied");
            self.file_path = PathBuf::from(file_path);
        }

        if let Some(output_dir) = lookup("ESGRISK_OUTPUT_DIR") {
            debug!(key = "ESGRISK_OUTPUT_DIR", value = %output_dir, "Environment override applied");
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(log_level) = lookup("ESGRISK_LOG_LEVEL") {
            debug!(key = "ESGRISK_LOG_LEVEL", value = %log_level, "Environment override applied");
            self.log_level = log_level;
        }

        if let Some(levels) = lookup("ESGRISK_SHOCK_LEVELS") {
            self.shock_levels = parse_shock_list(&levels).map_err(|bad| {
                ConfigError::Validation(vec![format!(
                    "ESGRISK_SHOCK_LEVELS entry '{}' is not a number",
                    bad
                )])
            })?;
            debug!(key = "ESGRISK_SHOCK_LEVELS", value = %levels, "Environment override applied");
        }

        Ok(self)
    }

    /// Scatter-matrix columns after defaulting.
    pub fn resolved_selected_columns(&self) -> Vec<String> {
        if self.selected_columns.is_empty() {
            self.esg_columns
                .iter()
                .chain(&self.financial_columns)
                .cloned()
                .collect()
        } else {
            self.selected_columns.clone()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.file_path.as_os_str().is_empty() {
            errors.push("file_path cannot be empty".to_string());
        }

        check_columns("esg_columns", &self.esg_columns, &mut errors);
        check_columns("financial_columns", &self.financial_columns, &mut errors);
        if !self.selected_columns.is_empty() {
            check_columns("selected_columns", &self.selected_columns, &mut errors);
        }
        if self.resolved_selected_columns().is_empty() {
            errors.push("selected_columns is empty after defaulting".to_string());
        }
        for name in &self.esg_columns {
            if self.financial_columns.contains(name) {
                errors.push(format!(
                    "'{}' is listed in both esg_columns and financial_columns",
                    name
                ));
            }
        }
        for name in &self.selected_columns {
            if !self.esg_columns.contains(name) && !self.financial_columns.contains(name) {
                errors.push(format!(
                    "selected_columns entry '{}' is in neither esg_columns nor financial_columns",
                    name
                ));
            }
        }

        if self.shock_levels.is_empty() {
            errors.push("shock_levels cannot be empty".to_string());
        }
        for &shock in &self.shock_levels {
            if !(shock.is_finite() && shock > -1.0) {
                errors.push(format!(
                    "Invalid shock level {}. Must be finite and greater than -1",
                    shock
                ));
            }
        }

        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            errors.push(format!(
                "Invalid significance_level {}. Must be in (0, 1)",
                self.significance_level
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            errors.push("output_dir cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load configuration from file and validate
    pub fn load_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load (or default) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Serialise back to TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

fn parse_shock_list(raw: &str) -> Result<Vec<f64>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().map_err(|_| s.to_string()))
        .collect()
}

fn check_columns(field: &str, columns: &[String], errors: &mut Vec<String>) {
    if columns.is_empty() {
        errors.push(format!("{} cannot be empty", field));
        return;
    }
    for (i, name) in columns.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(format!("{} contains a blank column name", field));
        } else if columns[..i].contains(name) {
            errors.push(format!("{} lists '{}' more than once", field, name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn assert_validation_mentions(config: &AnalysisConfig, needle: &str) {
        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert!(
                errors.iter().any(|e| e.contains(needle)),
                "expected an error mentioning '{}', got {:?}",
                needle,
                errors
            ),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config_validates() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.shock_levels, vec![-0.2, -0.1, 0.1, 0.2]);
        assert_eq!(config.significance_level, 0.05);
        assert_eq!(config.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AnalysisConfig::from_toml_str(
            r#"
            file_path = "data/companies.csv"
            esg_columns = ["ESG_Score"]
            financial_columns = ["ROA", "ROE"]
            "#,
        )
        .unwrap();
        assert_eq!(config.file_path, PathBuf::from("data/companies.csv"));
        assert_eq!(config.financial_columns, vec!["ROA", "ROE"]);
        assert_eq!(config.log_level, "info");
        assert!(config.export_tables);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AnalysisConfig::from_toml_str("shocks = [0.1]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_selected_columns_default_to_esg_then_financial() {
        let mut config = AnalysisConfig::default();
        config.esg_columns = vec!["E".into()];
        config.financial_columns = vec!["F".into(), "G".into()];
        assert_eq!(config.resolved_selected_columns(), vec!["E", "F", "G"]);

        config.selected_columns = vec!["G".into()];
        assert_eq!(config.resolved_selected_columns(), vec!["G"]);
    }

    #[test]
    fn test_env_override() {
        let config = AnalysisConfig::default().with_overrides(lookup(&[
            ("ESGRISK_FILE_PATH", "other.csv"),
            ("ESGRISK_OUTPUT_DIR", "out"),
            ("ESGRISK_LOG_LEVEL", "debug"),
            ("ESGRISK_SHOCK_LEVELS", "-0.3, 0.05,0.3"),
        ]))
        .unwrap();
        assert_eq!(config.file_path, PathBuf::from("other.csv"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.shock_levels, vec![-0.3, 0.05, 0.3]);
    }

    #[test]
    fn test_bad_shock_override_rejected() {
        let err = AnalysisConfig::default()
            .with_overrides(lookup(&[("ESGRISK_SHOCK_LEVELS", "0.3,ten")]))
            .unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("ESGRISK_SHOCK_LEVELS"));
                assert!(errors[0].contains("'ten'"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = AnalysisConfig::default();
        config.log_level = "verbose".to_string();
        assert_validation_mentions(&config, "log_level");
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let mut config = AnalysisConfig::default();
            config.log_level = level.to_string();
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_validate_shock_levels() {
        let mut config = AnalysisConfig::default();
        config.shock_levels = vec![0.1, -1.0];
        assert_validation_mentions(&config, "shock level -1");

        config.shock_levels = vec![];
        assert_validation_mentions(&config, "shock_levels");
    }

    #[test]
    fn test_validate_significance_level() {
        for alpha in [0.0, 1.0, 1.5, f64::NAN] {
            let mut config = AnalysisConfig::default();
            config.significance_level = alpha;
            assert_validation_mentions(&config, "significance_level");
        }
    }

    #[test]
    fn test_validate_columns() {
        let mut config = AnalysisConfig::default();
        config.esg_columns = vec![];
        assert_validation_mentions(&config, "esg_columns cannot be empty");

        let mut config = AnalysisConfig::default();
        config.financial_columns = vec!["ROA".into(), "ROA".into()];
        assert_validation_mentions(&config, "'ROA' more than once");
    }

    #[test]
    fn test_validate_column_in_both_lists() {
        let mut config = AnalysisConfig::default();
        config.esg_columns = vec!["ESG_Score".into(), "ROA".into()];
        config.financial_columns = vec!["ROA".into()];
        assert_validation_mentions(
            &config,
            "'ROA' is listed in both esg_columns and financial_columns",
        );
    }

    #[test]
    fn test_validate_selected_columns_within_analysis_columns() {
        let mut config = AnalysisConfig::default();
        config.esg_columns = vec!["ESG_Score".into()];
        config.financial_columns = vec!["ROA".into()];
        config.selected_columns = vec!["ESG_Score".into(), "ROE".into()];
        assert_validation_mentions(&config, "selected_columns entry 'ROE'");

        config.selected_columns = vec!["ROA".into(), "ESG_Score".into()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_multiple_errors() {
        let mut config = AnalysisConfig::default();
        config.log_level = "invalid".to_string();
        config.significance_level = 2.0;
        config.file_path = PathBuf::new();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert!(errors.len() >= 3),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalysisConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(AnalysisConfig::from_toml_str(&text).unwrap(), config);
    }
}
