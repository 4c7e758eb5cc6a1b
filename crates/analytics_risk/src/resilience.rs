//! Shock resilience regression.
//!
//! Fits `metric · (1 + shock) = intercept + coefficient · esg` for one ESG
//! column and one financial column. Comparing the coefficient across shock
//! levels shows how the ESG sensitivity of the metric moves under stress.

use crate::error::RiskResult;
use crate::shock::ShockLevel;
use analytics_core::types::frame::complete_pairs;
use analytics_core::{Frame, SimpleLinearFit};

/// Result of one shocked regression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResilienceFit {
    /// Slope of the shocked metric on the ESG score
    pub coefficient: f64,
    /// Intercept of the shocked regression
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Complete rows used
    pub observations: usize,
}

/// Regress the shocked metric on an ESG column.
///
/// Rows where either column is missing are dropped after shocking.
/// Returns `Ok(None)` when no complete rows remain.
///
/// # Errors
/// `Stats(ColumnNotFound)` if either column is absent.
///
/// # Examples
/// ```
/// use analytics_core::Frame;
/// use analytics_risk::{resilience_regression, ShockLevel};
///
/// let frame = Frame::from_columns(vec![
///     ("esg".to_string(), vec![1.0, 2.0, 3.0]),
///     ("roa".to_string(), vec![2.0, 4.0, 6.0]),
/// ])
/// .unwrap();
///
/// let shock = ShockLevel::new(0.5).unwrap();
/// let fit = resilience_regression(&frame, "esg", "roa", shock).unwrap().unwrap();
/// assert!((fit.coefficient - 3.0).abs() < 1e-12);
/// ```
pub fn resilience_regression(
    frame: &Frame,
    esg: &str,
    metric: &str,
    shock: ShockLevel,
) -> RiskResult<Option<ResilienceFit>> {
    let x = frame.column(esg)?;
    let y = frame.column(metric)?;
    let m = shock.multiplier();
    let shocked: Vec<f64> = y.iter().map(|v| v * m).collect();

    let (x, shocked) = complete_pairs(x, &shocked);
    Ok(SimpleLinearFit::fit(&x, &shocked).map(|fit| ResilienceFit {
        coefficient: fit.slope,
        intercept: fit.intercept,
        r_squared: fit.r_squared,
        observations: fit.n,
    }))
}
