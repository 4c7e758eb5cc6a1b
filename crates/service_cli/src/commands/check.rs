//! Check command implementation
//!
//! Validates the configuration and confirms that every configured column is
//! present and numeric in the dataset.

use adapter_loader::CsvLoader;
use infra_config::AnalysisConfig;
use std::path::Path;
use tracing::info;

use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &AnalysisConfig, config_path: &Path) -> Result<()> {
    info!("Checking configuration...");
    if config_path.exists() {
        println!("Configuration: {}", config_path.display());
    } else {
        println!("Configuration: {} not found, using defaults", config_path.display());
    }

    config.validate()?;
    println!("  Settings valid");

    if !config.file_path.exists() {
        return Err(CliError::FileNotFound(config.file_path.display().to_string()));
    }

    let frame = CsvLoader::new()
        .with_columns(
            config
                .esg_columns
                .iter()
                .chain(&config.financial_columns)
                .map(String::as_str),
        )
        .load(&config.file_path)?;
    println!(
        "  Dataset {}: {} rows, {} configured columns",
        config.file_path.display(),
        frame.n_rows(),
        frame.n_cols()
    );
    for (name, missing) in frame.missing_counts() {
        if missing > 0 {
            println!("    {}: {} missing", name, missing);
        }
    }

    println!("  Shock levels: {:?}", config.shock_levels);
    println!("  Output directory: {}", config.output_dir.display());
    println!("All checks passed");
    Ok(())
}
