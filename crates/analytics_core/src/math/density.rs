//! Gaussian kernel density estimation.
//!
//! Bandwidth follows Scott's rule, `h = σ · n^(-1/5)`, which is what the
//! distribution and pair plots overlay on their histograms.

use super::descriptive::{observed, std_dev};
use std::f64::consts::PI;

/// Univariate Gaussian KDE.
#[derive(Clone, Debug)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fit to observed values.
    ///
    /// Returns `None` with fewer than two observations or zero spread, where
    /// a density estimate is degenerate.
    pub fn new(values: &[f64]) -> Option<Self> {
        let samples = observed(values);
        if samples.len() < 2 {
            return None;
        }
        let sigma = std_dev(&samples)?;
        if sigma <= 0.0 {
            return None;
        }
        let bandwidth = sigma * (samples.len() as f64).powf(-0.2);
        Some(Self { samples, bandwidth })
    }

    /// Kernel bandwidth.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Density at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let norm = 1.0 / ((2.0 * PI).sqrt() * h * self.samples.len() as f64);
        self.samples
            .iter()
            .map(|s| {
                let z = (x - s) / h;
                (-0.5 * z * z).exp()
            })
            .sum::<f64>()
            * norm
    }

    /// Evaluate on `points` evenly spaced points spanning `[lo, hi]`.
    pub fn curve(&self, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
        let points = points.max(2);
        let step = (hi - lo) / (points - 1) as f64;
        (0..points)
            .map(|i| {
                let x = lo + step * i as f64;
                (x, self.evaluate(x))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_inputs() {
        assert!(GaussianKde::new(&[1.0]).is_none());
        assert!(GaussianKde::new(&[2.0, 2.0, 2.0]).is_none());
        assert!(GaussianKde::new(&[f64::NAN, 1.0]).is_none());
    }

    #[test]
    fn test_density_integrates_to_one() {
        let values: Vec<f64> = (0..50).map(|i| (i as f64 * 0.37).sin() * 3.0).collect();
        let kde = GaussianKde::new(&values).unwrap();
        let curve = kde.curve(-15.0, 15.0, 3001);
        let dx = curve[1].0 - curve[0].0;
        let area: f64 = curve.iter().map(|(_, y)| y * dx).sum();
        assert!((area - 1.0).abs() < 1e-3, "area = {}", area);
    }

    #[test]
    fn test_density_peaks_near_mass() {
        let kde = GaussianKde::new(&[0.0, 0.1, -0.1, 0.05, 10.0]).unwrap();
        assert!(kde.evaluate(0.0) > kde.evaluate(5.0));
    }
}
