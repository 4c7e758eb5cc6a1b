//! Shock levels.
//!
//! A shock is a fractional perturbation applied multiplicatively to a
//! financial metric: `+0.10` scales every observation by `1.10`.

use crate::error::{RiskError, RiskResult};
use std::fmt;

/// Fractional perturbation of a financial metric.
///
/// # Examples
/// ```
/// use analytics_risk::ShockLevel;
///
/// let s = ShockLevel::new(-0.2).unwrap();
/// assert_eq!(s.multiplier(), 0.8);
/// assert_eq!(s.label(), "-20%");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ShockLevel(f64);

impl ShockLevel {
    /// Create a shock level.
    ///
    /// # Errors
    /// `InvalidShock` unless the fraction is finite and greater than -1.
    pub fn new(fraction: f64) -> RiskResult<Self> {
        if fraction.is_finite() && fraction > -1.0 {
            Ok(Self(fraction))
        } else {
            Err(RiskError::InvalidShock(fraction))
        }
    }

    /// Validate a list of fractions.
    pub fn from_fractions(fractions: &[f64]) -> RiskResult<Vec<Self>> {
        fractions.iter().map(|&f| Self::new(f)).collect()
    }

    /// The default stress set: -20%, -10%, +10%, +20%.
    pub fn defaults() -> Vec<Self> {
        [-0.2, -0.1, 0.1, 0.2].into_iter().map(Self).collect()
    }

    /// Raw fraction.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Factor applied to the metric, `1 + shock`.
    #[inline]
    pub fn multiplier(self) -> f64 {
        1.0 + self.0
    }

    /// Shock in percent.
    #[inline]
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Signed whole-percent label such as `+10%`.
    pub fn label(self) -> String {
        format!("{:+.0}%", self.percent())
    }
}

impl fmt::Display for ShockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
