//! Log-log elasticity.
//!
//! The elasticity of a financial metric with respect to an ESG score is the
//! slope of `ln(metric + 1)` on `ln(esg + 1)`. The `+ 1` shift keeps zero
//! scores and small negative returns in the domain of the logarithm.

use crate::error::RiskResult;
use analytics_core::types::frame::complete_pairs;
use analytics_core::{Frame, SimpleLinearFit};
use tracing::debug;

/// Result of one elasticity regression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElasticityFit {
    /// Slope of the log-log regression
    pub elasticity: f64,
    /// Intercept of the log-log regression
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Rows used after dropping missing and out-of-domain values
    pub observations: usize,
}

/// Elasticity of `metric` with respect to `esg`.
///
/// Rows with a missing value, or where `ln(v + 1)` is not finite
/// (`v <= -1`), are dropped. Returns `Ok(None)` when no rows remain.
///
/// # Errors
/// `Stats(ColumnNotFound)` if either column is absent.
pub fn calculate_elasticity(
    frame: &Frame,
    esg: &str,
    metric: &str,
) -> RiskResult<Option<ElasticityFit>> {
    let (x, y) = frame.complete_pairs(esg, metric)?;
    let complete = x.len();

    let log_x: Vec<f64> = x.iter().map(|v| v.ln_1p()).map(finite_or_nan).collect();
    let log_y: Vec<f64> = y.iter().map(|v| v.ln_1p()).map(finite_or_nan).collect();
    let (log_x, log_y) = complete_pairs(&log_x, &log_y);

    if log_x.len() < complete {
        debug!(
            esg,
            metric,
            dropped = complete - log_x.len(),
            "Dropped rows outside the log domain"
        );
    }

    Ok(SimpleLinearFit::fit(&log_x, &log_y).map(|fit| ElasticityFit {
        elasticity: fit.slope,
        intercept: fit.intercept,
        r_squared: fit.r_squared,
        observations: fit.n,
    }))
}

fn finite_or_nan(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_power_law_recovers_exponent() {
        // (y + 1) = e · (x + 1)^0.5  =>  elasticity 0.5, intercept 1
        let x: Vec<f64> = (1..20).map(|i| i as f64 * 3.0).collect();
        let y: Vec<f64> = x
            .iter()
            .map(|v| std::f64::consts::E * (v + 1.0).sqrt() - 1.0)
            .collect();
        let frame =
            Frame::from_columns(vec![("esg".to_string(), x), ("m".to_string(), y)]).unwrap();

        let fit = calculate_elasticity(&frame, "esg", "m").unwrap().unwrap();
        assert_relative_eq!(fit.elasticity, 0.5, epsilon = 1e-10);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-10);
        assert_eq!(fit.observations, 19);
    }

    #[test]
    fn test_out_of_domain_rows_dropped() {
        let frame = Frame::from_columns(vec![
            ("esg".to_string(), vec![1.0, 2.0, 3.0, 4.0, f64::NAN]),
            ("m".to_string(), vec![0.1, -1.0, 0.3, -1.5, 0.5]),
        ])
        .unwrap();
        let fit = calculate_elasticity(&frame, "esg", "m").unwrap().unwrap();
        assert_eq!(fit.observations, 2);
    }

    #[test]
    fn test_nothing_left_is_none() {
        let frame = Frame::from_columns(vec![
            ("esg".to_string(), vec![1.0, 2.0]),
            ("m".to_string(), vec![-1.0, -3.0]),
        ])
        .unwrap();
        assert!(calculate_elasticity(&frame, "esg", "m").unwrap().is_none());
    }
}
