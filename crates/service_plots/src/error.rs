//! Plot error types.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors raised while rendering a chart.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Creating the output directory failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The drawing backend rejected an operation.
    #[error("Drawing error: {0}")]
    Drawing(String),

    /// Nothing to plot for the named chart.
    #[error("No data to plot: {0}")]
    NoData(String),

    /// Input statistics failed.
    #[error(transparent)]
    Stats(#[from] analytics_core::StatsError),
}

impl<E> From<DrawingAreaErrorKind<E>> for PlotError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        Self::Drawing(e.to_string())
    }
}

/// Result alias for plotting.
pub type PlotResult<T> = Result<T, PlotError>;
