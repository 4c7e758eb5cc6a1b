//! Risk analysis error types.

use analytics_core::StatsError;
use thiserror::Error;

/// Errors raised while running resilience and elasticity analyses.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskError {
    /// Shock fraction that would flip or zero the metric sign.
    #[error("Invalid shock level {0}: must be finite and greater than -1")]
    InvalidShock(f64),

    /// Significance level outside (0, 1).
    #[error("Invalid significance level {0}: must be in (0, 1)")]
    InvalidSignificance(f64),

    /// A grid dimension has no entries.
    #[error("Empty {0} list")]
    EmptyDimension(&'static str),

    /// Underlying statistics failure.
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Result alias for risk operations.
pub type RiskResult<T> = Result<T, RiskError>;
