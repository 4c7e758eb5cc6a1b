//! Ordinary least squares regression.
//!
//! This module provides:
//! - [`OlsModel`]: multi-predictor OLS solved through the normal equations,
//!   producing an [`OlsFit`] with a full [`RegressionSummary`]
//! - [`ols`]: single-predictor OLS between two frame columns
//! - [`SimpleLinearFit`]: lightweight least-squares line used by the
//!   shock and elasticity grids, where only slope and intercept matter
//!
//! ## Mathematical Definition
//!
//! β̂ = (XᵀX)⁻¹ Xᵀy, with Var(β̂) = σ̂² (XᵀX)⁻¹ and σ̂² = RSS / (n - p).

use super::distributions::{f_survival, student_t_quantile, student_t_two_sided_p};
use crate::types::{Frame, StatsError, StatsResult};
use nalgebra::{DMatrix, DVector};
use std::f64::consts::PI;
use std::fmt;

/// Label used for the intercept term.
pub const INTERCEPT_LABEL: &str = "const";

/// Confidence level for coefficient intervals.
const CI_LEVEL: f64 = 0.95;

/// OLS model definition.
///
/// # Examples
/// ```
/// use analytics_core::math::regression::OlsModel;
///
/// let fit = OlsModel::new("y", vec![1.0, 3.1, 4.9, 7.2, 9.0])
///     .with_predictor("x", vec![0.0, 1.0, 2.0, 3.0, 4.0])
///     .fit()
///     .unwrap();
///
/// assert!((fit.slope() - 2.0).abs() < 0.1);
/// assert!(fit.summary().r_squared > 0.99);
/// ```
#[derive(Clone, Debug)]
pub struct OlsModel {
    response: String,
    y: Vec<f64>,
    predictors: Vec<(String, Vec<f64>)>,
    intercept: bool,
}

impl OlsModel {
    /// New model for response `y`; an intercept is included by default.
    pub fn new(response: impl Into<String>, y: Vec<f64>) -> Self {
        Self {
            response: response.into(),
            y,
            predictors: Vec::new(),
            intercept: true,
        }
    }

    /// Add a predictor column.
    pub fn with_predictor(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.predictors.push((name.into(), values));
        self
    }

    /// Include or omit the intercept term.
    pub fn with_intercept(mut self, intercept: bool) -> Self {
        self.intercept = intercept;
        self
    }

    /// Fit by least squares.
    ///
    /// Rows with a missing value in the response or any predictor are
    /// dropped before fitting.
    ///
    /// # Errors
    /// - `LengthMismatch` if a predictor differs in length from the response
    /// - `InsufficientData` if no residual degrees of freedom remain
    /// - `ZeroVariance` for a constant predictor alongside an intercept
    /// - `SingularMatrix` if XᵀX is not positive definite
    pub fn fit(&self) -> StatsResult<OlsFit> {
        for (_, values) in &self.predictors {
            if values.len() != self.y.len() {
                return Err(StatsError::LengthMismatch {
                    expected: self.y.len(),
                    actual: values.len(),
                });
            }
        }

        let rows: Vec<usize> = (0..self.y.len())
            .filter(|&i| !self.y[i].is_nan() && self.predictors.iter().all(|(_, c)| !c[i].is_nan()))
            .collect();

        let offset = usize::from(self.intercept);
        let p = self.predictors.len() + offset;
        let n = rows.len();
        if p == 0 {
            return Err(StatsError::InvalidParameter(
                "model has neither predictors nor intercept".to_string(),
            ));
        }
        if n <= p {
            return Err(StatsError::InsufficientData {
                required: p + 1,
                actual: n,
            });
        }

        if self.intercept {
            for (name, values) in &self.predictors {
                let first = values[rows[0]];
                if rows.iter().all(|&i| values[i] == first) {
                    return Err(StatsError::ZeroVariance(name.clone()));
                }
            }
        }

        let x = DMatrix::from_fn(n, p, |r, c| {
            if self.intercept && c == 0 {
                1.0
            } else {
                self.predictors[c - offset].1[rows[r]]
            }
        });
        let y = DVector::from_iterator(n, rows.iter().map(|&i| self.y[i]));

        let xtx = x.transpose() * &x;
        let xtx_inv = xtx
            .cholesky()
            .map(|c| c.inverse())
            .ok_or_else(|| StatsError::SingularMatrix("XᵀX is not positive definite".to_string()))?;
        let beta = &xtx_inv * (x.transpose() * &y);

        let fitted = &x * &beta;
        let residuals = &y - &fitted;

        let mut names = Vec::with_capacity(p);
        if self.intercept {
            names.push(INTERCEPT_LABEL.to_string());
        }
        names.extend(self.predictors.iter().map(|(n, _)| n.clone()));

        let summary = summarise(
            &self.response,
            &names,
            self.intercept,
            y.as_slice(),
            beta.as_slice(),
            residuals.as_slice(),
            &xtx_inv,
        )?;

        Ok(OlsFit {
            names,
            intercept: self.intercept,
            beta: beta.iter().copied().collect(),
            fitted: fitted.iter().copied().collect(),
            residuals: residuals.iter().copied().collect(),
            summary,
        })
    }
}

fn summarise(
    response: &str,
    names: &[String],
    intercept: bool,
    y: &[f64],
    beta: &[f64],
    residuals: &[f64],
    xtx_inv: &DMatrix<f64>,
) -> StatsResult<RegressionSummary> {
    let n = y.len();
    let p = beta.len();
    let nf = n as f64;
    let df_resid = nf - p as f64;
    let df_model = (p - usize::from(intercept)) as f64;

    let ssr: f64 = residuals.iter().map(|e| e * e).sum();
    let tss: f64 = if intercept {
        let m = y.iter().sum::<f64>() / nf;
        y.iter().map(|v| (v - m) * (v - m)).sum()
    } else {
        y.iter().map(|v| v * v).sum()
    };

    let sigma2 = ssr / df_resid;
    let t_crit = student_t_quantile(0.5 + CI_LEVEL / 2.0, df_resid)?;

    let mut coefficients = Vec::with_capacity(p);
    for (j, name) in names.iter().enumerate() {
        let coef = beta[j];
        let std_err = (sigma2 * xtx_inv[(j, j)]).max(0.0).sqrt();
        let (t_value, p_value) = if std_err > 0.0 {
            let t = coef / std_err;
            (t, student_t_two_sided_p(t, df_resid)?)
        } else if coef == 0.0 {
            (0.0, 1.0)
        } else {
            (coef.signum() * f64::INFINITY, 0.0)
        };
        coefficients.push(CoefficientRow {
            name: name.clone(),
            coef,
            std_err,
            t_value,
            p_value,
            ci_lower: coef - t_crit * std_err,
            ci_upper: coef + t_crit * std_err,
        });
    }

    let (r_squared, adj_r_squared) = if tss > 0.0 {
        let r2 = 1.0 - ssr / tss;
        let denom = if intercept { nf - 1.0 } else { nf };
        (r2, 1.0 - (1.0 - r2) * denom / df_resid)
    } else {
        (f64::NAN, f64::NAN)
    };

    let (f_statistic, f_p_value) = if df_model > 0.0 && tss > 0.0 {
        let f = ((tss - ssr) / df_model) / (ssr / df_resid);
        let pf = if f.is_nan() {
            f64::NAN
        } else {
            f_survival(f, df_model, df_resid)?
        };
        (f, pf)
    } else {
        (f64::NAN, f64::NAN)
    };

    let log_likelihood = -0.5 * nf * ((2.0 * PI).ln() + (ssr / nf).ln() + 1.0);
    let k = p as f64;
    let aic = -2.0 * log_likelihood + 2.0 * k;
    let bic = -2.0 * log_likelihood + k * nf.ln();

    let durbin_watson = if ssr > 0.0 {
        residuals
            .windows(2)
            .map(|w| (w[1] - w[0]) * (w[1] - w[0]))
            .sum::<f64>()
            / ssr
    } else {
        f64::NAN
    };

    Ok(RegressionSummary {
        response: response.to_string(),
        n_obs: n,
        df_model: df_model as usize,
        df_resid: df_resid as usize,
        r_squared,
        adj_r_squared,
        f_statistic,
        f_p_value,
        log_likelihood,
        aic,
        bic,
        durbin_watson,
        residual_std_error: sigma2.sqrt(),
        coefficients,
    })
}

/// One row of the coefficient table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoefficientRow {
    /// Term name (`const` for the intercept)
    pub name: String,
    /// Estimate
    pub coef: f64,
    /// Standard error
    pub std_err: f64,
    /// t statistic
    pub t_value: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Lower 95% bound
    pub ci_lower: f64,
    /// Upper 95% bound
    pub ci_upper: f64,
}

/// Regression diagnostics in the layout of a conventional OLS report.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegressionSummary {
    /// Response variable name
    pub response: String,
    /// Observations used
    pub n_obs: usize,
    /// Model degrees of freedom (predictors, excluding intercept)
    pub df_model: usize,
    /// Residual degrees of freedom
    pub df_resid: usize,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Adjusted R²
    pub adj_r_squared: f64,
    /// Overall F statistic
    pub f_statistic: f64,
    /// p-value of the F statistic
    pub f_p_value: f64,
    /// Gaussian log-likelihood at the estimate
    pub log_likelihood: f64,
    /// Akaike information criterion
    pub aic: f64,
    /// Bayesian information criterion
    pub bic: f64,
    /// Durbin–Watson statistic of the residuals
    pub durbin_watson: f64,
    /// Residual standard error, σ̂
    pub residual_std_error: f64,
    /// Coefficient table, intercept first when present
    pub coefficients: Vec<CoefficientRow>,
}

impl RegressionSummary {
    /// Coefficient row by term name.
    pub fn coefficient(&self, name: &str) -> Option<&CoefficientRow> {
        self.coefficients.iter().find(|c| c.name == name)
    }
}

const RULE_WIDTH: usize = 78;

fn header_line(f: &mut fmt::Formatter<'_>, left: (&str, String), right: (&str, String)) -> fmt::Result {
    writeln!(f, "{:<16}{:>22}   {:<20}{:>17}", left.0, left.1, right.0, right.1)
}

impl fmt::Display for RegressionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{:^width$}", "OLS Regression Results", width = RULE_WIDTH)?;
        writeln!(f, "{}", heavy)?;
        header_line(
            f,
            ("Dep. Variable:", self.response.clone()),
            ("R-squared:", format!("{:.3}", self.r_squared)),
        )?;
        header_line(
            f,
            ("Model:", "OLS".to_string()),
            ("Adj. R-squared:", format!("{:.3}", self.adj_r_squared)),
        )?;
        header_line(
            f,
            ("Method:", "Least Squares".to_string()),
            ("F-statistic:", format!("{:.4}", self.f_statistic)),
        )?;
        header_line(
            f,
            ("No. Observations:", self.n_obs.to_string()),
            ("Prob (F-statistic):", format!("{:.3e}", self.f_p_value)),
        )?;
        header_line(
            f,
            ("Df Residuals:", self.df_resid.to_string()),
            ("Log-Likelihood:", format!("{:.3}", self.log_likelihood)),
        )?;
        header_line(
            f,
            ("Df Model:", self.df_model.to_string()),
            ("AIC:", format!("{:.4}", self.aic)),
        )?;
        header_line(f, ("", String::new()), ("BIC:", format!("{:.4}", self.bic)))?;
        writeln!(f, "{}", heavy)?;
        writeln!(
            f,
            "{:<14}{:>10}{:>11}{:>11}{:>11}{:>11}{:>10}",
            "", "coef", "std err", "t", "P>|t|", "[0.025", "0.975]"
        )?;
        writeln!(f, "{}", light)?;
        for row in &self.coefficients {
            writeln!(
                f,
                "{:<14}{:>10.4}{:>11.3}{:>11.3}{:>11.3}{:>11.3}{:>10.3}",
                truncate(&row.name, 13),
                row.coef,
                row.std_err,
                row.t_value,
                row.p_value,
                row.ci_lower,
                row.ci_upper
            )?;
        }
        writeln!(f, "{}", heavy)?;
        writeln!(f, "{:<20}{:>12.3}", "Durbin-Watson:", self.durbin_watson)?;
        writeln!(f, "{:<20}{:>12.4}", "Residual Std. Err.:", self.residual_std_error)?;
        write!(f, "{}", heavy)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

/// A fitted OLS model.
#[derive(Clone, Debug)]
pub struct OlsFit {
    names: Vec<String>,
    intercept: bool,
    beta: Vec<f64>,
    fitted: Vec<f64>,
    residuals: Vec<f64>,
    summary: RegressionSummary,
}

impl OlsFit {
    /// Term names in coefficient order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Estimated coefficients, intercept first when present.
    pub fn coefficients(&self) -> &[f64] {
        &self.beta
    }

    /// Coefficient by term name.
    pub fn coefficient(&self, name: &str) -> Option<f64> {
        self.names.iter().position(|n| n == name).map(|i| self.beta[i])
    }

    /// Intercept, or 0 for a model without one.
    pub fn intercept(&self) -> f64 {
        if self.intercept {
            self.beta[0]
        } else {
            0.0
        }
    }

    /// Coefficient of the first predictor.
    pub fn slope(&self) -> f64 {
        self.beta.get(usize::from(self.intercept)).copied().unwrap_or(f64::NAN)
    }

    /// In-sample fitted values over the complete rows.
    pub fn fitted_values(&self) -> &[f64] {
        &self.fitted
    }

    /// In-sample residuals over the complete rows.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Prediction for one row of predictor values.
    pub fn predict_row(&self, row: &[f64]) -> StatsResult<f64> {
        let expected = self.beta.len() - usize::from(self.intercept);
        if row.len() != expected {
            return Err(StatsError::LengthMismatch {
                expected,
                actual: row.len(),
            });
        }
        let offset = usize::from(self.intercept);
        Ok(self.intercept() + row.iter().zip(&self.beta[offset..]).map(|(x, b)| x * b).sum::<f64>())
    }

    /// Predictions for a single-predictor model.
    pub fn predict(&self, x: &[f64]) -> Vec<f64> {
        let (a, b) = (self.intercept(), self.slope());
        x.iter().map(|v| a + b * v).collect()
    }

    /// Full regression summary.
    pub fn summary(&self) -> &RegressionSummary {
        &self.summary
    }
}

/// Single-predictor OLS of `response` on `predictor` with an intercept.
///
/// Rows with a missing value in either column are dropped.
pub fn ols(frame: &Frame, predictor: &str, response: &str) -> StatsResult<OlsFit> {
    OlsModel::new(response, frame.column(response)?.to_vec())
        .with_predictor(predictor, frame.column(predictor)?.to_vec())
        .fit()
}

/// Least-squares line without inference.
///
/// A constant predictor yields slope 0 and intercept `mean(y)`, the
/// minimum-norm least-squares solution, so any non-empty input is fitted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleLinearFit {
    /// Slope
    pub slope: f64,
    /// Intercept
    pub intercept: f64,
    /// Coefficient of determination; `NaN` for a constant response
    pub r_squared: f64,
    /// Complete pairs used
    pub n: usize,
}

impl SimpleLinearFit {
    /// Fit `y = intercept + slope · x` over complete pairs.
    ///
    /// Returns `None` when no complete pair exists.
    pub fn fit(x: &[f64], y: &[f64]) -> Option<Self> {
        let (x, y) = crate::types::frame::complete_pairs(x, y);
        let n = x.len();
        if n == 0 {
            return None;
        }
        let nf = n as f64;
        let mx = x.iter().sum::<f64>() / nf;
        let my = y.iter().sum::<f64>() / nf;

        let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
        for (a, b) in x.iter().zip(y.iter()) {
            sxy += (a - mx) * (b - my);
            sxx += (a - mx) * (a - mx);
            syy += (b - my) * (b - my);
        }

        let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        let intercept = my - slope * mx;
        let r_squared = if syy > 0.0 {
            let ssr: f64 = x
                .iter()
                .zip(y.iter())
                .map(|(a, b)| {
                    let e = b - (intercept + slope * a);
                    e * e
                })
                .sum();
            1.0 - ssr / syy
        } else {
            f64::NAN
        };

        Some(Self {
            slope,
            intercept,
            r_squared,
            n,
        })
    }

    /// Predicted value at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}
