//! Generate command implementation
//!
//! Writes a seeded synthetic ESG/financial dataset.

use adapter_loader::{SyntheticEsgGenerator, SyntheticSpec};
use std::path::Path;
use tracing::info;

use crate::{CliError, Result};

/// Run the generate command
pub fn run(rows: usize, seed: u64, missing_rate: f64, output: &Path) -> Result<()> {
    info!("Generating synthetic dataset...");
    info!("  Rows: {}", rows);
    info!("  Seed: {}", seed);
    info!("  Missing rate: {}", missing_rate);

    let generator = SyntheticEsgGenerator::new(SyntheticSpec {
        rows,
        seed,
        missing_rate,
    })
    .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
    generator.write_to_file(output)?;

    println!("Wrote {} rows to {}", rows, output.display());
    Ok(())
}
