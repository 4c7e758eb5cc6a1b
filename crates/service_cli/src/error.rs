//! CLI error type.

use thiserror::Error;

/// Errors surfaced by `esgrisk` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration failed to load or validate.
    #[error("Configuration error: {0}")]
    Config(#[from] infra_config::ConfigError),

    /// Dataset loading failed.
    #[error("Data loading error: {0}")]
    Loader(#[from] adapter_loader::LoaderError),

    /// A statistic could not be computed.
    #[error("Statistics error: {0}")]
    Stats(#[from] analytics_core::StatsError),

    /// Resilience or elasticity analysis failed.
    #[error("Analysis error: {0}")]
    Risk(#[from] analytics_risk::RiskError),

    /// Chart rendering failed.
    #[error("Plot error: {0}")]
    Plot(#[from] service_plots::PlotError),

    /// Table export failed.
    #[error("Export error: {0}")]
    Export(String),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        Self::Export(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Export(e.to_string())
    }
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
