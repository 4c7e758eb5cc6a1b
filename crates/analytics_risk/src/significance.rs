//! Pairwise significance screen.

use crate::error::{RiskError, RiskResult};
use crate::results::{CorrelationRecord, Significance};
use analytics_core::{Frame, StatsError};
use tracing::warn;

/// Conventional screening level.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Pearson test of every ESG × financial pair, ESG outermost.
///
/// Pairs whose correlation is undefined (fewer than three complete rows or a
/// constant column) are logged and left out of the result.
///
/// # Errors
/// - `InvalidSignificance` unless `0 < alpha < 1`
/// - `Stats(ColumnNotFound)` for an unknown column
pub fn significance_screen<S: AsRef<str>>(
    frame: &Frame,
    esg_columns: &[S],
    financial_columns: &[S],
    alpha: f64,
) -> RiskResult<Vec<CorrelationRecord>> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(RiskError::InvalidSignificance(alpha));
    }

    let mut out = Vec::with_capacity(esg_columns.len() * financial_columns.len());
    for esg in esg_columns {
        let esg = esg.as_ref();
        for metric in financial_columns {
            let metric = metric.as_ref();
            match frame.pearson(esg, metric) {
                Ok(res) => out.push(CorrelationRecord {
                    esg_component: esg.to_string(),
                    financial_metric: metric.to_string(),
                    correlation: res.r,
                    p_value: res.p_value,
                    observations: res.n,
                    significance: if res.is_significant(alpha) {
                        Significance::Significant
                    } else {
                        Significance::NotSignificant
                    },
                }),
                Err(e @ StatsError::ColumnNotFound(_)) => return Err(e.into()),
                Err(e) => warn!(esg, metric, error = %e, "Correlation undefined, pair skipped"),
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::from_columns(vec![
            ("ESG".to_string(), vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            ("ROA".to_string(), vec![2.0, 4.0, 5.0, 4.0, 5.0]),
            ("ROE".to_string(), vec![1.1, 2.0, 2.9, 4.2, 5.0]),
            ("Flat".to_string(), vec![3.0; 5]),
        ])
        .unwrap()
    }

    #[test]
    fn test_screen_labels_pairs() {
        let out = significance_screen(&frame(), &["ESG"], &["ROA", "ROE"], DEFAULT_ALPHA).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].financial_metric, "ROA");
        assert_eq!(out[0].significance, Significance::NotSignificant);
        assert_eq!(out[1].significance, Significance::Significant);
        assert_eq!(
            out[0].to_string(),
            "ESG vs ROA: Correlation = 0.77, p-value = 0.1240 (Not Significant)"
        );
    }

    #[test]
    fn test_undefined_pair_skipped() {
        let out = significance_screen(&frame(), &["ESG"], &["Flat", "ROE"], 0.05).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].financial_metric, "ROE");
    }

    #[test]
    fn test_unknown_column_is_error() {
        assert!(significance_screen(&frame(), &["ESG"], &["Nope"], 0.05).is_err());
    }

    #[test]
    fn test_alpha_bounds() {
        for alpha in [0.0, 1.0, -0.1, f64::NAN] {
            assert!(matches!(
                significance_screen(&frame(), &["ESG"], &["ROA"], alpha),
                Err(RiskError::InvalidSignificance(_))
            ));
        }
    }
}
