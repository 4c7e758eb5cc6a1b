//! Shared state for the analysis commands.

use adapter_loader::{load_and_process, CsvLoader};
use analytics_core::Frame;
use analytics_risk::{GridOutcome, ParallelConfig, ResilienceGrid, ShockLevel};
use infra_config::AnalysisConfig;
use service_plots::PlotWriter;
use std::path::Path;
use tracing::info;

use crate::export::TableExporter;
use crate::{CliError, Result};

/// Validated configuration plus the writers every analysis command uses.
pub struct AnalysisContext {
    pub config: AnalysisConfig,
    pub parallel: ParallelConfig,
    pub plots: PlotWriter,
    pub exporter: Option<TableExporter>,
}

impl AnalysisContext {
    /// Validate `config` and prepare the output directory.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        if !Path::new(&config.file_path).exists() {
            return Err(CliError::FileNotFound(config.file_path.display().to_string()));
        }

        let parallel = if config.parallel {
            ParallelConfig::default()
        } else {
            ParallelConfig::sequential()
        };
        let plots = PlotWriter::new(&config.output_dir)?;
        let exporter = config
            .export_tables
            .then(|| TableExporter::new(&config.output_dir));

        info!(
            data = %config.file_path.display(),
            output_dir = %config.output_dir.display(),
            parallel = config.parallel,
            "Analysis context ready"
        );

        Ok(Self {
            config,
            parallel,
            plots,
            exporter,
        })
    }

    /// Configured columns with missing values mean-imputed.
    pub fn load_imputed(&self) -> Result<Frame> {
        Ok(load_and_process(
            &self.config.file_path,
            &self.config.esg_columns,
            &self.config.financial_columns,
        )?)
    }

    /// Configured columns as read; missing values stay `NaN`.
    pub fn load_raw(&self) -> Result<Frame> {
        let columns = self
            .config
            .esg_columns
            .iter()
            .chain(&self.config.financial_columns);
        Ok(CsvLoader::new().with_columns(columns).load(&self.config.file_path)?)
    }

    /// Configured shock levels.
    pub fn shock_levels(&self) -> Result<Vec<ShockLevel>> {
        Ok(ShockLevel::from_fractions(&self.config.shock_levels)?)
    }

    /// Run the resilience grid, printing a line per skipped combination.
    pub fn run_grid(&self, frame: &Frame) -> Result<GridOutcome> {
        let grid = ResilienceGrid::new(
            self.config.esg_columns.iter().cloned(),
            self.config.financial_columns.iter().cloned(),
            self.shock_levels()?,
        )?;
        let outcome = grid.run(frame, &self.parallel)?;
        for skip in &outcome.skipped {
            println!("{}", skip.message());
        }
        Ok(outcome)
    }
}
