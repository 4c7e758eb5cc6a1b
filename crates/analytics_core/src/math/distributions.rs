//! Tail probabilities used by the hypothesis tests.
//!
//! Thin wrappers over `statrs` that validate degrees of freedom and map
//! construction failures into [`StatsError`].

use crate::types::{StatsError, StatsResult};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

fn students_t(df: f64) -> StatsResult<StudentsT> {
    StudentsT::new(0.0, 1.0, df)
        .map_err(|e| StatsError::InvalidParameter(format!("t distribution with df = {}: {}", df, e)))
}

/// Two-sided p-value `P(|T| >= |t|)` for `T ~ t(df)`.
///
/// # Examples
/// ```
/// use analytics_core::math::distributions::student_t_two_sided_p;
///
/// let p = student_t_two_sided_p(0.0, 10.0).unwrap();
/// assert!((p - 1.0).abs() < 1e-12);
/// ```
pub fn student_t_two_sided_p(t: f64, df: f64) -> StatsResult<f64> {
    if t.is_infinite() {
        return Ok(0.0);
    }
    if t.is_nan() {
        return Err(StatsError::InvalidParameter("t statistic is NaN".to_string()));
    }
    let dist = students_t(df)?;
    Ok((2.0 * dist.sf(t.abs())).clamp(0.0, 1.0))
}

/// Quantile of the standard Student t distribution.
///
/// Used for the 95% confidence interval bounds in regression summaries.
pub fn student_t_quantile(p: f64, df: f64) -> StatsResult<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(StatsError::InvalidParameter(format!(
            "probability {} outside [0, 1]",
            p
        )));
    }
    Ok(students_t(df)?.inverse_cdf(p))
}

/// Upper tail `P(F >= f)` for `F ~ F(d1, d2)`.
pub fn f_survival(f: f64, d1: f64, d2: f64) -> StatsResult<f64> {
    if f.is_infinite() {
        return Ok(0.0);
    }
    let dist = FisherSnedecor::new(d1, d2).map_err(|e| {
        StatsError::InvalidParameter(format!("F distribution with ({}, {}): {}", d1, d2, e))
    })?;
    Ok(dist.sf(f.max(0.0)).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_sided_p_known_value() {
        // t = 2.228 is the 97.5% quantile of t(10)
        let p = student_t_two_sided_p(2.228_138_85, 10.0).unwrap();
        assert_relative_eq!(p, 0.05, epsilon = 1e-6);
    }

    #[test]
    fn test_two_sided_p_symmetric() {
        let a = student_t_two_sided_p(1.7, 8.0).unwrap();
        let b = student_t_two_sided_p(-1.7, 8.0).unwrap();
        assert_relative_eq!(a, b, epsilon = 1e-14);
    }

    #[test]
    fn test_invalid_df() {
        assert!(student_t_two_sided_p(1.0, 0.0).is_err());
        assert!(student_t_two_sided_p(1.0, -3.0).is_err());
    }

    #[test]
    fn test_quantile_inverts_cdf() {
        let q = student_t_quantile(0.975, 10.0).unwrap();
        assert_relative_eq!(q, 2.228_138_85, epsilon = 1e-6);
    }

    #[test]
    fn test_f_survival_bounds() {
        assert_relative_eq!(f_survival(0.0, 1.0, 10.0).unwrap(), 1.0, epsilon = 1e-12);
        assert!(f_survival(100.0, 1.0, 10.0).unwrap() < 1e-5);
        assert_eq!(f_survival(f64::INFINITY, 1.0, 10.0).unwrap(), 0.0);
    }
}
