//! Pearson correlation.
//!
//! This module provides:
//! - [`pearson`]: correlation coefficient with a two-sided t-test p-value
//! - [`correlation_matrix`]: pairwise correlations over every frame column
//! - [`corr_with`]: correlation of several columns against one target
//!
//! All routines use pairwise complete observations.

use super::distributions::student_t_two_sided_p;
use crate::types::frame::complete_pairs;
use crate::types::{Frame, StatsError, StatsResult};

/// Minimum complete pairs for a defined p-value (`n - 2 > 0`).
pub const MIN_PEARSON_OBSERVATIONS: usize = 3;

/// Distance from ±1 below which `r` is treated as a perfect correlation.
const PERFECT_CORRELATION_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Pearson correlation test result.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PearsonResult {
    /// Correlation coefficient in [-1, 1]
    pub r: f64,
    /// Two-sided p-value for H0: ρ = 0
    pub p_value: f64,
    /// Number of complete pairs used
    pub n: usize,
}

impl PearsonResult {
    /// Whether the correlation is significant at level `alpha`.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Pearson correlation of `x` and `y` with a two-sided p-value.
///
/// The test statistic is `t = r · sqrt((n - 2) / (1 - r²))` with `n - 2`
/// degrees of freedom. A perfect correlation yields `p = 0`.
///
/// # Errors
/// - `LengthMismatch` if the slices differ in length
/// - `InsufficientData` with fewer than three complete pairs
/// - `ZeroVariance` if either input is constant
///
/// # Examples
/// ```
/// use analytics_core::math::correlation::pearson;
///
/// let res = pearson(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();
/// assert!((res.r - 1.0).abs() < 1e-12);
/// assert_eq!(res.p_value, 0.0);
/// ```
pub fn pearson(x: &[f64], y: &[f64]) -> StatsResult<PearsonResult> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    let (x, y) = complete_pairs(x, y);
    let n = x.len();
    if n < MIN_PEARSON_OBSERVATIONS {
        return Err(StatsError::InsufficientData {
            required: MIN_PEARSON_OBSERVATIONS,
            actual: n,
        });
    }

    let nf = n as f64;
    let mx = x.iter().sum::<f64>() / nf;
    let my = y.iter().sum::<f64>() / nf;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mx;
        let dy = b - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx <= 0.0 {
        return Err(StatsError::ZeroVariance("x".to_string()));
    }
    if syy <= 0.0 {
        return Err(StatsError::ZeroVariance("y".to_string()));
    }

    let mut r = (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0);
    // exact linear data can land a few ulps short of ±1
    if 1.0 - r.abs() <= PERFECT_CORRELATION_TOLERANCE {
        r = r.signum();
    }
    let df = nf - 2.0;
    let p_value = if r.abs() == 1.0 {
        0.0
    } else {
        let t = r * (df / (1.0 - r * r)).sqrt();
        student_t_two_sided_p(t, df)?
    };

    Ok(PearsonResult { r, p_value, n })
}

impl Frame {
    /// Pearson correlation between two named columns.
    pub fn pearson(&self, x: &str, y: &str) -> StatsResult<PearsonResult> {
        pearson(self.column(x)?, self.column(y)?)
    }
}

/// Symmetric correlation matrix over a set of columns.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelationMatrix {
    /// Column labels, row and column order
    pub labels: Vec<String>,
    /// Row-major coefficients; `NaN` where undefined
    pub values: Vec<f64>,
}

impl CorrelationMatrix {
    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.labels.len()
    }

    /// Coefficient at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.dim() + col]
    }

    /// Coefficient by label.
    pub fn get_by_name(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == row)?;
        let j = self.labels.iter().position(|l| l == col)?;
        Some(self.get(i, j))
    }
}

/// Correlation matrix over every frame column.
///
/// Undefined entries (constant columns, too few pairs) are `NaN`; the
/// diagonal is 1 for any column with variation.
pub fn correlation_matrix(frame: &Frame) -> CorrelationMatrix {
    let labels: Vec<String> = frame.names().to_vec();
    let cols: Vec<&[f64]> = frame.iter().map(|(_, c)| c).collect();
    let d = cols.len();
    let mut values = vec![f64::NAN; d * d];

    for i in 0..d {
        for j in i..d {
            let r = pearson(cols[i], cols[j]).map(|res| res.r).unwrap_or(f64::NAN);
            values[i * d + j] = r;
            values[j * d + i] = r;
        }
    }

    CorrelationMatrix { labels, values }
}

/// Correlation of each of `columns` with `target`.
///
/// Entries that cannot be computed are `NaN`, mirroring the behaviour of a
/// column-wise correlation in a dataframe library.
pub fn corr_with<S: AsRef<str>>(
    frame: &Frame,
    columns: &[S],
    target: &str,
) -> StatsResult<Vec<(String, f64)>> {
    let target_values = frame.column(target)?;
    columns
        .iter()
        .map(|c| {
            let c = c.as_ref();
            let values = frame.column(c)?;
            let r = pearson(values, target_values)
                .map(|res| res.r)
                .unwrap_or(f64::NAN);
            Ok((c.to_string(), r))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pearson_known_value() {
        // scipy.stats.pearsonr([1,2,3,4,5], [2,4,5,4,5]) -> (0.7745966692, 0.1240270...)
        let res = pearson(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0]).unwrap();
        assert_relative_eq!(res.r, 0.774_596_669_2, epsilon = 1e-9);
        assert_relative_eq!(res.p_value, 0.124_027, epsilon = 1e-5);
        assert_eq!(res.n, 5);
    }

    #[test]
    fn test_pearson_negative_perfect() {
        let res = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert_relative_eq!(res.r, -1.0, epsilon = 1e-12);
        assert_eq!(res.p_value, 0.0);
    }

    #[test]
    fn test_pearson_perfect_is_exact() {
        let x: Vec<f64> = (0..50).map(|i| 0.1 * i as f64 + 3.7).collect();
        let up: Vec<f64> = x.iter().map(|v| 2.5 * v - 1.3).collect();
        let down: Vec<f64> = x.iter().map(|v| -0.7 * v + 9.1).collect();

        let pos = pearson(&x, &up).unwrap();
        assert_eq!(pos.r, 1.0);
        assert_eq!(pos.p_value, 0.0);

        let neg = pearson(&x, &down).unwrap();
        assert_eq!(neg.r, -1.0);
        assert_eq!(neg.p_value, 0.0);
    }

    #[test]
    fn test_pearson_uses_complete_pairs() {
        let x = [1.0, 2.0, f64::NAN, 4.0, 5.0];
        let y = [2.0, 4.0, 100.0, 8.0, f64::NAN];
        let res = pearson(&x, &y).unwrap();
        assert_eq!(res.n, 3);
        assert_relative_eq!(res.r, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pearson_errors() {
        assert!(matches!(
            pearson(&[1.0, 2.0], &[1.0, 2.0]),
            Err(StatsError::InsufficientData { .. })
        ));
        assert!(matches!(
            pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]),
            Err(StatsError::ZeroVariance(_))
        ));
        assert!(matches!(
            pearson(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(StatsError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_significance_flag() {
        let res = PearsonResult {
            r: 0.4,
            p_value: 0.049,
            n: 30,
        };
        assert!(res.is_significant(0.05));
        assert!(!res.is_significant(0.01));
    }

    #[test]
    fn test_correlation_matrix_symmetric() {
        let frame = Frame::from_columns(vec![
            ("a".to_string(), vec![1.0, 2.0, 3.0, 4.0]),
            ("b".to_string(), vec![1.0, 3.0, 2.0, 5.0]),
            ("c".to_string(), vec![7.0, 7.0, 7.0, 7.0]),
        ])
        .unwrap();
        let m = correlation_matrix(&frame);
        assert_eq!(m.dim(), 3);
        assert_relative_eq!(m.get(0, 0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(m.get(0, 1), m.get(1, 0));
        assert!(m.get(2, 2).is_nan());
        assert_eq!(m.get_by_name("a", "b"), Some(m.get(0, 1)));
    }

    #[test]
    fn test_corr_with_order_and_unknown() {
        let frame = Frame::from_columns(vec![
            ("esg".to_string(), vec![1.0, 2.0, 3.0, 4.0]),
            ("roa".to_string(), vec![2.0, 4.0, 6.0, 8.0]),
            ("roe".to_string(), vec![8.0, 6.0, 4.0, 2.0]),
        ])
        .unwrap();
        let out = corr_with(&frame, &["roe", "roa"], "esg").unwrap();
        assert_eq!(out[0].0, "roe");
        assert_relative_eq!(out[0].1, -1.0, epsilon = 1e-12);
        assert_relative_eq!(out[1].1, 1.0, epsilon = 1e-12);
        assert!(corr_with(&frame, &["nope"], "esg").is_err());
    }
}
