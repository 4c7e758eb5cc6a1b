//! Error types for dataset loading.

use analytics_core::StatsError;
use thiserror::Error;

/// Loader error type
#[derive(Debug, Error)]
pub enum LoaderError {
    /// IO error opening or writing a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV (ragged rows, bad quoting, invalid UTF-8)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A requested column is not in the header
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A selected column holds a value that is not a number
    #[error("Non-numeric value '{value}' in column '{column}' at row {row}")]
    NonNumeric {
        /// Column name
        column: String,
        /// 1-based data row number
        row: usize,
        /// Raw cell contents
        value: String,
    },

    /// No observed values to compute an imputation mean from
    #[error("Column '{0}' has no observed values")]
    AllMissing(String),

    /// Table construction failed
    #[error("Table error: {0}")]
    Table(#[from] StatsError),

    /// Invalid generator or loader parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result alias for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;
