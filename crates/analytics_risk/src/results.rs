//! Result rows and pivots.
//!
//! Record types serialise with the human-readable column headers used in
//! exported tables (`"ESG Component"`, `"Shock Level"`, ...).

use std::fmt;

/// One cell of the resilience grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResilienceRecord {
    /// ESG predictor column
    #[cfg_attr(feature = "serde", serde(rename = "ESG Component"))]
    pub esg_component: String,
    /// Financial response column
    #[cfg_attr(feature = "serde", serde(rename = "Financial Metric"))]
    pub financial_metric: String,
    /// Shock fraction, e.g. `0.1` for +10%
    #[cfg_attr(feature = "serde", serde(rename = "Shock Level"))]
    pub shock_level: f64,
    /// Regression slope
    #[cfg_attr(feature = "serde", serde(rename = "Coefficient"))]
    pub coefficient: f64,
    /// Regression intercept
    #[cfg_attr(feature = "serde", serde(rename = "Intercept"))]
    pub intercept: f64,
    /// Coefficient of determination
    #[cfg_attr(feature = "serde", serde(rename = "R Squared"))]
    pub r_squared: f64,
    /// Complete rows used
    #[cfg_attr(feature = "serde", serde(rename = "Observations"))]
    pub observations: usize,
}

/// Elasticity of one financial metric with respect to one ESG column.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElasticityRecord {
    /// ESG predictor column
    #[cfg_attr(feature = "serde", serde(rename = "ESG Component"))]
    pub esg_component: String,
    /// Financial response column
    #[cfg_attr(feature = "serde", serde(rename = "Financial Metric"))]
    pub financial_metric: String,
    /// Log-log slope
    #[cfg_attr(feature = "serde", serde(rename = "Elasticity"))]
    pub elasticity: f64,
    /// Rows used
    #[cfg_attr(feature = "serde", serde(rename = "Observations"))]
    pub observations: usize,
}

/// Outcome label of a significance test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Significance {
    /// `p < alpha`
    Significant,
    /// `p >= alpha`
    #[cfg_attr(feature = "serde", serde(rename = "Not Significant"))]
    NotSignificant,
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Significant => write!(f, "Significant"),
            Self::NotSignificant => write!(f, "Not Significant"),
        }
    }
}

/// Pearson test of one ESG/financial pair.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrelationRecord {
    /// ESG column
    #[cfg_attr(feature = "serde", serde(rename = "ESG Component"))]
    pub esg_component: String,
    /// Financial column
    #[cfg_attr(feature = "serde", serde(rename = "Financial Metric"))]
    pub financial_metric: String,
    /// Pearson r
    #[cfg_attr(feature = "serde", serde(rename = "Correlation"))]
    pub correlation: f64,
    /// Two-sided p-value
    #[cfg_attr(feature = "serde", serde(rename = "P Value"))]
    pub p_value: f64,
    /// Complete pairs used
    #[cfg_attr(feature = "serde", serde(rename = "Observations"))]
    pub observations: usize,
    /// Test outcome at the screening level
    #[cfg_attr(feature = "serde", serde(rename = "Significance"))]
    pub significance: Significance,
}

impl CorrelationRecord {
    /// Whether the pair passed the screen.
    pub fn is_significant(&self) -> bool {
        self.significance == Significance::Significant
    }
}

impl fmt::Display for CorrelationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}: Correlation = {:.2}, p-value = {:.4} ({})",
            self.esg_component,
            self.financial_metric,
            self.correlation,
            self.p_value,
            self.significance
        )
    }
}

/// Dense matrix with row and column labels.
///
/// Used for coefficient and elasticity heatmaps; absent cells are `NaN`.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelledMatrix {
    /// Row labels (ESG components)
    pub rows: Vec<String>,
    /// Column labels (financial metrics)
    pub cols: Vec<String>,
    /// Row-major values
    pub values: Vec<Vec<f64>>,
}

impl LabelledMatrix {
    /// All-`NaN` matrix with the given labels.
    pub fn empty(rows: Vec<String>, cols: Vec<String>) -> Self {
        let values = vec![vec![f64::NAN; cols.len()]; rows.len()];
        Self { rows, cols, values }
    }

    /// Value by labels.
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.rows.iter().position(|r| r == row)?;
        let j = self.cols.iter().position(|c| c == col)?;
        Some(self.values[i][j])
    }

    /// Set a value by labels; unknown labels are ignored.
    pub fn set(&mut self, row: &str, col: &str, value: f64) {
        if let (Some(i), Some(j)) = (
            self.rows.iter().position(|r| r == row),
            self.cols.iter().position(|c| c == col),
        ) {
            self.values[i][j] = value;
        }
    }

    /// Finite minimum and maximum.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .flatten()
            .filter(|v| v.is_finite())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Pivot elasticities into an ESG × financial matrix.
pub fn elasticity_matrix(records: &[ElasticityRecord]) -> LabelledMatrix {
    let rows = unique(records.iter().map(|r| r.esg_component.as_str()));
    let cols = unique(records.iter().map(|r| r.financial_metric.as_str()));
    let mut matrix = LabelledMatrix::empty(rows, cols);
    for r in records {
        matrix.set(&r.esg_component, &r.financial_metric, r.elasticity);
    }
    matrix
}

/// Distinct values in first-seen order.
pub(crate) fn unique<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.iter().any(|o| o == item) {
            out.push(item.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elasticity(esg: &str, fin: &str, e: f64) -> ElasticityRecord {
        ElasticityRecord {
            esg_component: esg.to_string(),
            financial_metric: fin.to_string(),
            elasticity: e,
            observations: 10,
        }
    }

    #[test]
    fn test_correlation_record_display() {
        let rec = CorrelationRecord {
            esg_component: "ESG_Score".to_string(),
            financial_metric: "ROA".to_string(),
            correlation: 0.774_596_669_2,
            p_value: 0.124_027,
            observations: 5,
            significance: Significance::NotSignificant,
        };
        assert_eq!(
            rec.to_string(),
            "ESG_Score vs ROA: Correlation = 0.77, p-value = 0.1240 (Not Significant)"
        );
        assert!(!rec.is_significant());
    }

    #[test]
    fn test_elasticity_matrix_pivot() {
        let records = vec![
            elasticity("E", "ROA", 0.5),
            elasticity("E", "ROE", 0.7),
            elasticity("S", "ROE", -0.1),
        ];
        let m = elasticity_matrix(&records);
        assert_eq!(m.rows, vec!["E", "S"]);
        assert_eq!(m.cols, vec!["ROA", "ROE"]);
        assert_eq!(m.get("E", "ROE"), Some(0.7));
        assert!(m.get("S", "ROA").unwrap().is_nan());
        assert_eq!(m.get("G", "ROA"), None);
        assert_eq!(m.finite_range(), Some((-0.1, 0.7)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_headers() {
        let rec = ResilienceRecord {
            esg_component: "ESG_Score".to_string(),
            financial_metric: "ROA".to_string(),
            shock_level: 0.1,
            coefficient: 0.002,
            intercept: 0.01,
            r_squared: 0.4,
            observations: 100,
        };
        let json = serde_json::to_value(&rec).unwrap();
        for key in [
            "ESG Component",
            "Financial Metric",
            "Shock Level",
            "Coefficient",
            "Intercept",
            "R Squared",
            "Observations",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
