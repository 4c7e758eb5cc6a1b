//! Descriptive statistics.
//!
//! All functions skip `NaN` entries; a slice with no observed values yields
//! `None` rather than an error because callers (plotting, imputation) treat
//! an all-missing column as "nothing to draw".

/// Observed (non-`NaN`) values of a slice.
pub fn observed(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).collect()
}

/// Arithmetic mean of observed values.
pub fn mean(values: &[f64]) -> Option<f64> {
    let (sum, n) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Sample variance (denominator `n - 1`) of observed values.
pub fn variance(values: &[f64]) -> Option<f64> {
    let obs = observed(values);
    if obs.len() < 2 {
        return None;
    }
    let m = obs.iter().sum::<f64>() / obs.len() as f64;
    let ss: f64 = obs.iter().map(|v| (v - m) * (v - m)).sum();
    Some(ss / (obs.len() - 1) as f64)
}

/// Sample standard deviation of observed values.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Minimum and maximum of observed values.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Quantile with linear interpolation between order statistics.
///
/// `q` is clamped to `[0, 1]`. Matches the default method of numpy/pandas.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let mut obs = observed(values);
    if obs.is_empty() {
        return None;
    }
    obs.sort_by(|a, b| a.total_cmp(b));
    Some(quantile_sorted(&obs, q))
}

fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Five-number summary with Tukey whiskers.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Lowest observation within `q1 - 1.5 * IQR`
    pub whisker_low: f64,
    /// Highest observation within `q3 + 1.5 * IQR`
    pub whisker_high: f64,
    /// Observations beyond the whiskers
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Summarise observed values; `None` if there are none.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut obs = observed(values);
        if obs.is_empty() {
            return None;
        }
        obs.sort_by(|a, b| a.total_cmp(b));

        let q1 = quantile_sorted(&obs, 0.25);
        let median = quantile_sorted(&obs, 0.5);
        let q3 = quantile_sorted(&obs, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let inside: Vec<f64> = obs
            .iter()
            .copied()
            .filter(|v| *v >= low_fence && *v <= high_fence)
            .collect();
        let outliers = obs
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            whisker_low: inside.first().copied().unwrap_or(q1),
            whisker_high: inside.last().copied().unwrap_or(q3),
            outliers,
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Equal-width histogram over the observed range.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    /// Bin edges, `bins + 1` entries
    pub edges: Vec<f64>,
    /// Count per bin
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin observed values into `bins` equal-width bins.
    ///
    /// The last bin is closed on the right. A constant input is widened by
    /// ±0.5 so that it still produces `bins` bins.
    pub fn new(values: &[f64], bins: usize) -> Option<Self> {
        let bins = bins.max(1);
        let (mut lo, mut hi) = min_max(values)?;
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0usize; bins];
        for v in values.iter().filter(|v| !v.is_nan()) {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Some(Self { edges, counts })
    }

    /// Bin width.
    pub fn width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Total count.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_skips_nan() {
        assert_relative_eq!(mean(&[1.0, f64::NAN, 3.0]).unwrap(), 2.0);
        assert!(mean(&[f64::NAN]).is_none());
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn test_sample_variance() {
        // 2, 4, 4, 4, 5, 5, 7, 9 has population variance 4, sample variance 32/7
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(variance(&v).unwrap(), 32.0 / 7.0, epsilon = 1e-12);
        assert!(variance(&[1.0]).is_none());
    }

    #[test]
    fn test_quantile_linear_interpolation() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(quantile(&v, 0.5).unwrap(), 2.5);
        assert_relative_eq!(quantile(&v, 0.25).unwrap(), 1.75);
        assert_relative_eq!(quantile(&v, 1.0).unwrap(), 4.0);
    }

    #[test]
    fn test_box_stats_flags_outlier() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let stats = BoxStats::from_values(&v).unwrap();
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.whisker_high, 5.0);
        assert_eq!(stats.whisker_low, 1.0);
    }

    #[test]
    fn test_histogram_counts_everything() {
        let v = [0.0, 0.1, 0.5, 0.9, 1.0, f64::NAN];
        let h = Histogram::new(&v, 4).unwrap();
        assert_eq!(h.edges.len(), 5);
        assert_eq!(h.total(), 5);
        assert_eq!(h.counts[3], 2);
    }

    #[test]
    fn test_histogram_constant_input() {
        let h = Histogram::new(&[3.0, 3.0, 3.0], 20).unwrap();
        assert_eq!(h.counts.len(), 20);
        assert_eq!(h.total(), 3);
    }
}
