//! Combination grids.
//!
//! [`ResilienceGrid`] runs one shocked regression per
//! {ESG column × financial column × shock level}; [`elasticity_table`] runs
//! one log-log regression per {ESG column × financial column}. Both iterate
//! ESG outermost and return rows in that nested order regardless of whether
//! rayon was used.

use crate::elasticity::calculate_elasticity;
use crate::error::{RiskError, RiskResult};
use crate::parallel::ParallelConfig;
use crate::resilience::resilience_regression;
use crate::results::{unique, ElasticityRecord, LabelledMatrix, ResilienceRecord};
use crate::shock::ShockLevel;
use analytics_core::{Frame, StatsError};
use tracing::{debug, info};

/// A grid cell that had no complete rows to fit.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedCombination {
    /// ESG column
    pub esg_component: String,
    /// Financial column
    pub financial_metric: String,
    /// Shock applied
    pub shock_level: ShockLevel,
}

impl SkippedCombination {
    /// Console message for the skip.
    pub fn message(&self) -> String {
        format!(
            "Skipping {} vs {} under {:.1}% shock (insufficient data).",
            self.esg_component,
            self.financial_metric,
            self.shock_level.percent()
        )
    }
}

/// Shock resilience grid definition.
///
/// # Examples
/// ```
/// use analytics_core::Frame;
/// use analytics_risk::{ParallelConfig, ResilienceGrid, ShockLevel};
///
/// let frame = Frame::from_columns(vec![
///     ("ESG_Score".to_string(), vec![40.0, 55.0, 70.0, 85.0]),
///     ("ROA".to_string(), vec![0.02, 0.03, 0.05, 0.06]),
/// ])
/// .unwrap();
///
/// let grid = ResilienceGrid::new(["ESG_Score"], ["ROA"], ShockLevel::defaults()).unwrap();
/// let outcome = grid.run(&frame, &ParallelConfig::default()).unwrap();
/// assert_eq!(outcome.records.len(), 4);
/// assert!(outcome.skipped.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ResilienceGrid {
    esg_columns: Vec<String>,
    financial_columns: Vec<String>,
    shock_levels: Vec<ShockLevel>,
}

impl ResilienceGrid {
    /// Create a grid.
    ///
    /// # Errors
    /// `EmptyDimension` if any of the three lists is empty.
    pub fn new<E, F>(
        esg_columns: E,
        financial_columns: F,
        shock_levels: Vec<ShockLevel>,
    ) -> RiskResult<Self>
    where
        E: IntoIterator,
        E::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let esg_columns: Vec<String> = esg_columns.into_iter().map(Into::into).collect();
        let financial_columns: Vec<String> = financial_columns.into_iter().map(Into::into).collect();
        if esg_columns.is_empty() {
            return Err(RiskError::EmptyDimension("ESG column"));
        }
        if financial_columns.is_empty() {
            return Err(RiskError::EmptyDimension("financial column"));
        }
        if shock_levels.is_empty() {
            return Err(RiskError::EmptyDimension("shock level"));
        }
        Ok(Self {
            esg_columns,
            financial_columns,
            shock_levels,
        })
    }

    /// ESG columns.
    pub fn esg_columns(&self) -> &[String] {
        &self.esg_columns
    }

    /// Financial columns.
    pub fn financial_columns(&self) -> &[String] {
        &self.financial_columns
    }

    /// Shock levels.
    pub fn shock_levels(&self) -> &[ShockLevel] {
        &self.shock_levels
    }

    /// Number of grid cells.
    pub fn len(&self) -> usize {
        self.esg_columns.len() * self.financial_columns.len() * self.shock_levels.len()
    }

    /// Always false; construction rejects empty dimensions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fit every cell.
    ///
    /// # Errors
    /// `Stats(ColumnNotFound)` if a configured column is absent from `frame`.
    pub fn run(&self, frame: &Frame, config: &ParallelConfig) -> RiskResult<GridOutcome> {
        require_columns(frame, self.esg_columns.iter().chain(&self.financial_columns))?;

        let mut cells = Vec::with_capacity(self.len());
        for esg in &self.esg_columns {
            for metric in &self.financial_columns {
                for &shock in &self.shock_levels {
                    cells.push((esg.as_str(), metric.as_str(), shock));
                }
            }
        }

        let parallel = config.should_parallelize(cells.len());
        debug!(cells = cells.len(), parallel, "Running resilience grid");

        let fitted = config.map(&cells, |&(esg, metric, shock)| {
            resilience_regression(frame, esg, metric, shock)
        });

        let mut outcome = GridOutcome::default();
        for ((esg, metric, shock), fit) in cells.into_iter().zip(fitted) {
            match fit? {
                Some(fit) => outcome.records.push(ResilienceRecord {
                    esg_component: esg.to_string(),
                    financial_metric: metric.to_string(),
                    shock_level: shock.value(),
                    coefficient: fit.coefficient,
                    intercept: fit.intercept,
                    r_squared: fit.r_squared,
                    observations: fit.observations,
                }),
                None => {
                    let skipped = SkippedCombination {
                        esg_component: esg.to_string(),
                        financial_metric: metric.to_string(),
                        shock_level: shock,
                    };
                    info!("{}", skipped.message());
                    outcome.skipped.push(skipped);
                }
            }
        }

        info!(
            fitted = outcome.records.len(),
            skipped = outcome.skipped.len(),
            "Resilience grid complete"
        );
        Ok(outcome)
    }
}

/// Records and skips produced by [`ResilienceGrid::run`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridOutcome {
    /// Fitted cells in nested grid order
    pub records: Vec<ResilienceRecord>,
    /// Cells without complete data
    pub skipped: Vec<SkippedCombination>,
}

impl GridOutcome {
    /// Record with the largest absolute coefficient.
    pub fn most_sensitive(&self) -> Option<&ResilienceRecord> {
        self.records
            .iter()
            .filter(|r| r.coefficient.is_finite())
            .max_by(|a, b| a.coefficient.abs().total_cmp(&b.coefficient.abs()))
    }

    /// Records of one pair, in shock order.
    pub fn records_for(&self, esg: &str, metric: &str) -> Vec<&ResilienceRecord> {
        self.records
            .iter()
            .filter(|r| r.esg_component == esg && r.financial_metric == metric)
            .collect()
    }

    /// ESG components present, in grid order.
    pub fn esg_components(&self) -> Vec<String> {
        unique(self.records.iter().map(|r| r.esg_component.as_str()))
    }

    /// Financial metrics present, in grid order.
    pub fn financial_metrics(&self) -> Vec<String> {
        unique(self.records.iter().map(|r| r.financial_metric.as_str()))
    }

    /// Distinct shock fractions present, in grid order.
    pub fn shock_levels(&self) -> Vec<f64> {
        let mut out: Vec<f64> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.shock_level) {
                out.push(r.shock_level);
            }
        }
        out
    }

    /// ESG × financial coefficients at one shock level.
    pub fn coefficient_matrix(&self, shock: ShockLevel) -> LabelledMatrix {
        let mut matrix = LabelledMatrix::empty(self.esg_components(), self.financial_metrics());
        for r in self.records.iter().filter(|r| r.shock_level == shock.value()) {
            matrix.set(&r.esg_component, &r.financial_metric, r.coefficient);
        }
        matrix
    }
}

/// Elasticity of every ESG × financial pair, ESG outermost.
///
/// Pairs with no usable rows are logged and omitted.
///
/// # Errors
/// `Stats(ColumnNotFound)` if a column is absent from `frame`.
pub fn elasticity_table<S: AsRef<str> + Sync>(
    frame: &Frame,
    esg_columns: &[S],
    financial_columns: &[S],
    config: &ParallelConfig,
) -> RiskResult<Vec<ElasticityRecord>> {
    require_columns(frame, esg_columns.iter().chain(financial_columns))?;

    let pairs: Vec<(&str, &str)> = esg_columns
        .iter()
        .flat_map(|e| financial_columns.iter().map(move |f| (e.as_ref(), f.as_ref())))
        .collect();

    let fitted = config.map(&pairs, |&(esg, metric)| calculate_elasticity(frame, esg, metric));

    let mut out = Vec::with_capacity(pairs.len());
    for ((esg, metric), fit) in pairs.into_iter().zip(fitted) {
        match fit? {
            Some(fit) => out.push(ElasticityRecord {
                esg_component: esg.to_string(),
                financial_metric: metric.to_string(),
                elasticity: fit.elasticity,
                observations: fit.observations,
            }),
            None => info!("Skipping elasticity for {esg} vs {metric} (insufficient data)."),
        }
    }
    Ok(out)
}

fn require_columns<I>(frame: &Frame, names: I) -> RiskResult<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for name in names {
        let name = name.as_ref();
        if !frame.contains(name) {
            return Err(StatsError::ColumnNotFound(name.to_string()).into());
        }
    }
    Ok(())
}
