//! Column-mean imputation.

use crate::error::{LoaderError, LoaderResult};
use analytics_core::math::descriptive::mean;
use analytics_core::Frame;

/// Fitted per-column means used to fill missing cells.
#[derive(Clone, Debug, PartialEq)]
pub struct MeanImputer {
    means: Vec<(String, f64)>,
}

impl MeanImputer {
    /// Compute the mean of the observed values of every column.
    ///
    /// # Errors
    /// `AllMissing` if a column has no observed values.
    pub fn fit(frame: &Frame) -> LoaderResult<Self> {
        let means = frame
            .iter()
            .map(|(name, values)| {
                mean(values)
                    .map(|m| (name.to_string(), m))
                    .ok_or_else(|| LoaderError::AllMissing(name.to_string()))
            })
            .collect::<LoaderResult<Vec<_>>>()?;
        Ok(Self { means })
    }

    /// Fitted means in column order.
    pub fn means(&self) -> &[(String, f64)] {
        &self.means
    }

    /// Fitted mean for one column.
    pub fn mean_of(&self, column: &str) -> Option<f64> {
        self.means
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, m)| *m)
    }

    /// Replace missing cells with the fitted means.
    ///
    /// Columns of `frame` that were not seen by `fit` are an error.
    pub fn transform(&self, frame: &Frame) -> LoaderResult<Frame> {
        let mut out = frame.clone();
        for name in frame.names() {
            let fill = self
                .mean_of(name)
                .ok_or_else(|| LoaderError::MissingColumn(name.clone()))?;
            out.map_column(name, |v| if v.is_nan() { fill } else { v })?;
        }
        Ok(out)
    }

    /// `fit` followed by `transform` on the same frame.
    pub fn fit_transform(frame: &Frame) -> LoaderResult<Frame> {
        Self::fit(frame)?.transform(frame)
    }
}
