//! Column-oriented numeric table.
//!
//! `Frame` holds an ordered set of named `f64` columns of equal length.
//! Missing observations are stored as `NaN`; nothing in this module fills
//! them in (see `adapter_loader::MeanImputer` for imputation).

use super::error::{StatsError, StatsResult};
use std::collections::HashMap;

/// In-memory numeric table with named columns.
///
/// # Examples
/// ```
/// use analytics_core::types::Frame;
///
/// let frame = Frame::from_columns(vec![
///     ("ESG_Score".to_string(), vec![55.0, 61.0, f64::NAN]),
///     ("ROA".to_string(), vec![0.04, 0.05, 0.06]),
/// ])
/// .unwrap();
///
/// assert_eq!(frame.n_rows(), 3);
/// assert_eq!(frame.n_cols(), 2);
/// assert!(frame.has_missing());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    index: HashMap<String, usize>,
    n_rows: usize,
}

impl Frame {
    /// Create an empty frame with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from `(name, values)` pairs.
    ///
    /// # Errors
    /// - `DuplicateColumn` if two columns share a name
    /// - `LengthMismatch` if columns differ in length
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> StatsResult<Self> {
        let mut frame = Self::new();
        for (name, values) in columns {
            frame.push_column(name, values)?;
        }
        Ok(frame)
    }

    /// Append a column.
    ///
    /// The first column fixes the row count.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> StatsResult<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(StatsError::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && values.len() != self.n_rows {
            return Err(StatsError::LengthMismatch {
                expected: self.n_rows,
                actual: values.len(),
            });
        }
        if self.columns.is_empty() {
            self.n_rows = values.len();
        }
        self.index.insert(name.clone(), self.columns.len());
        self.names.push(name);
        self.columns.push(values);
        Ok(())
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Whether the frame has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether a column with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Borrow a column by name.
    pub fn column(&self, name: &str) -> StatsResult<&[f64]> {
        self.index
            .get(name)
            .map(|&i| self.columns[i].as_slice())
            .ok_or_else(|| StatsError::ColumnNotFound(name.to_string()))
    }

    /// Iterate `(name, values)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .zip(self.columns.iter())
            .map(|(n, c)| (n.as_str(), c.as_slice()))
    }

    /// New frame holding only `names`, in the given order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> StatsResult<Frame> {
        let mut out = Frame::new();
        for name in names {
            let name = name.as_ref();
            out.push_column(name, self.column(name)?.to_vec())?;
        }
        if out.is_empty() {
            out.n_rows = self.n_rows;
        }
        Ok(out)
    }

    /// Replace a column with `f(value)` applied element-wise.
    pub fn map_column<F>(&mut self, name: &str, f: F) -> StatsResult<()>
    where
        F: Fn(f64) -> f64,
    {
        let i = *self
            .index
            .get(name)
            .ok_or_else(|| StatsError::ColumnNotFound(name.to_string()))?;
        for v in self.columns[i].iter_mut() {
            *v = f(*v);
        }
        Ok(())
    }

    /// Whether any cell is missing.
    pub fn has_missing(&self) -> bool {
        self.columns.iter().flatten().any(|v| v.is_nan())
    }

    /// Count of missing cells per column, in column order.
    pub fn missing_counts(&self) -> Vec<(&str, usize)> {
        self.iter()
            .map(|(n, c)| (n, c.iter().filter(|v| v.is_nan()).count()))
            .collect()
    }

    /// Rows where both `x` and `y` are observed.
    ///
    /// Returns two equal-length vectors in row order.
    pub fn complete_pairs(&self, x: &str, y: &str) -> StatsResult<(Vec<f64>, Vec<f64>)> {
        Ok(complete_pairs(self.column(x)?, self.column(y)?))
    }
}

/// Drop positions where either slice holds `NaN`.
///
/// Extra trailing elements of the longer slice are ignored.
pub fn complete_pairs(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    x.iter()
        .zip(y.iter())
        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
        .map(|(a, b)| (*a, *b))
        .unzip()
}
