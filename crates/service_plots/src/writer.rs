//! SVG file writer shared by every chart.

use crate::error::PlotResult;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

/// Default font family for captions and labels.
pub(crate) const FONT: &str = "sans-serif";

/// Writes charts as SVG files into one output directory.
///
/// Clones share the record of written files, so a chart that lands on a
/// path already written by this writer is reported.
#[derive(Clone, Debug)]
pub struct PlotWriter {
    output_dir: PathBuf,
    written_files: Arc<RwLock<Vec<PathBuf>>>,
}

impl PlotWriter {
    /// Create a writer, creating the directory if needed.
    pub fn new(output_dir: impl AsRef<Path>) -> PlotResult<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            written_files: Arc::new(RwLock::new(Vec::new())),
        })
    }

    /// Output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the SVG for `stem`, with unsafe characters replaced.
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{}.svg", file_stem(stem)))
    }

    /// Every chart path written so far, in write order, repeats included.
    pub fn written_files(&self) -> Vec<PathBuf> {
        self.written_files
            .read()
            .map(|files| files.clone())
            .unwrap_or_default()
    }

    pub(crate) fn written(&self, path: &Path, chart: &str) {
        if let Ok(mut files) = self.written_files.write() {
            // distinct names such as "ESG Score" and "esg_score" share a stem
            if files.iter().any(|p| p == path) {
                warn!(path = %path.display(), chart, "Chart overwrote an earlier chart from this run");
            }
            files.push(path.to_path_buf());
        }
        info!(path = %path.display(), chart, "Chart written");
    }
}

/// Lower-case, filesystem-safe version of `name`.
pub fn file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_underscore = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            out.push(c.to_ascii_lowercase());
            last_underscore = false;
        } else if !last_underscore {
            out.push('_');
            last_underscore = true;
        }
    }
    out.trim_matches('_').to_string()
}

/// Rows and columns of a near-square subplot grid holding `n` panels.
pub fn grid_dims(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let cols = (n as f64).sqrt().ceil() as usize;
    let rows = n.div_ceil(cols);
    (rows, cols)
}

/// Axis range covering `values` with 5% padding on each side.
///
/// Degenerate or empty input gets a unit-width range.
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return (-0.5, 0.5);
    }
    let span = hi - lo;
    if span <= f64::EPSILON * lo.abs().max(1.0) {
        return (lo - 0.5, hi + 0.5);
    }
    (lo - 0.05 * span, hi + 0.05 * span)
}

/// Category label for an axis tick at `v` over categories `0..labels.len()`.
pub(crate) fn category_label(labels: &[String], v: f64) -> String {
    let r = v.round();
    if (v - r).abs() > 1e-6 || r < 0.0 {
        return String::new();
    }
    labels.get(r as usize).cloned().unwrap_or_default()
}
