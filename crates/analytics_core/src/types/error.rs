//! Error types for statistical operations.

use thiserror::Error;

/// Categorised statistics errors.
///
/// # Variants
/// - `ColumnNotFound`: A named column is not present in the frame
/// - `DuplicateColumn`: Two columns share a name
/// - `LengthMismatch`: Paired inputs have different lengths
/// - `InsufficientData`: Too few complete observations for the estimator
/// - `ZeroVariance`: An input is constant where variation is required
/// - `SingularMatrix`: The normal equations cannot be solved
/// - `InvalidParameter`: A parameter is outside its domain
///
/// # Examples
/// ```
/// use analytics_core::types::StatsError;
///
/// let err = StatsError::InsufficientData { required: 3, actual: 1 };
/// assert_eq!(
///     format!("{}", err),
///     "Insufficient data: need at least 3 observations, got 1"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StatsError {
    /// Column lookup failed.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Column names must be unique within a frame.
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Inputs that must be paired have different lengths.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length
        expected: usize,
        /// Observed length
        actual: usize,
    },

    /// Not enough complete observations.
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations required
        required: usize,
        /// Number of observations available
        actual: usize,
    },

    /// Constant input where variation is required.
    #[error("Zero variance in {0}")]
    ZeroVariance(String),

    /// XᵀX is not invertible.
    #[error("Singular design matrix: {0}")]
    SingularMatrix(String),

    /// Parameter outside its valid domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result alias for statistical operations.
pub type StatsResult<T> = Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_found_display() {
        let err = StatsError::ColumnNotFound("ESG_Score".to_string());
        assert_eq!(format!("{}", err), "Column not found: ESG_Score");
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = StatsError::LengthMismatch {
            expected: 10,
            actual: 9,
        };
        assert_eq!(format!("{}", err), "Length mismatch: expected 10, got 9");
    }

    #[test]
    fn test_zero_variance_display() {
        let err = StatsError::ZeroVariance("ROA".to_string());
        assert!(err.to_string().contains("ROA"));
    }
}
