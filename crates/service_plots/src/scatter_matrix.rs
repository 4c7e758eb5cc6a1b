//! Pair plot.
//!
//! Off-diagonal panels scatter one column against another over complete
//! rows; diagonal panels show the Gaussian KDE of the column.

use crate::error::{PlotError, PlotResult};
use crate::palette::series_color;
use crate::writer::{padded_range, PlotWriter, FONT};
use analytics_core::math::density::GaussianKde;
use analytics_core::math::descriptive::min_max;
use analytics_core::types::frame::complete_pairs;
use analytics_core::Frame;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

const PANEL_PX: u32 = 240;
const KDE_POINTS: usize = 100;

impl PlotWriter {
    /// Pair plot of `columns`.
    pub fn scatter_matrix<S: AsRef<str>>(&self, frame: &Frame, columns: &[S]) -> PlotResult<PathBuf> {
        let mut data: Vec<(&str, &[f64])> = Vec::with_capacity(columns.len());
        for c in columns {
            let c = c.as_ref();
            data.push((c, frame.column(c)?));
        }
        let path = self.path_for("scatter_matrix");
        draw_scatter_matrix(&path, &data)?;
        self.written(&path, "scatter_matrix");
        Ok(path)
    }
}

fn draw_scatter_matrix(path: &Path, data: &[(&str, &[f64])]) -> PlotResult<()> {
    let k = data.len();
    if k == 0 {
        return Err(PlotError::NoData("scatter matrix".to_string()));
    }
    let side = PANEL_PX * k as u32;
    let root = SVGBackend::new(path, (side, side + 40)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        "Pairplot of Selected ESG Components and Financial Metrics",
        (FONT, 22),
    )?;
    let panels = root.split_evenly((k, k));

    let ranges: Vec<(f64, f64)> = data
        .iter()
        .map(|(_, v)| padded_range(v.iter().copied()))
        .collect();

    for (idx, panel) in panels.iter().enumerate() {
        let (i, j) = (idx / k, idx % k);
        let (x_name, x_vals) = data[j];
        let (y_name, y_vals) = data[i];
        let (x_lo, x_hi) = ranges[j];

        let bottom = i == k - 1;
        let left = j == 0;

        if i == j {
            let curve = GaussianKde::new(x_vals)
                .zip(min_max(x_vals))
                .map(|(kde, (lo, hi))| kde.curve(lo, hi, KDE_POINTS))
                .unwrap_or_default();
            let y_hi = curve.iter().map(|(_, d)| *d).fold(0.0f64, f64::max).max(1e-12) * 1.1;

            let mut chart = ChartBuilder::on(panel)
                .margin(5)
                .x_label_area_size(if bottom { 35 } else { 5 })
                .y_label_area_size(if left { 55 } else { 5 })
                .build_cartesian_2d(x_lo..x_hi, 0.0..y_hi)?;
            let mut mesh = chart.configure_mesh();
            mesh.disable_mesh();
            if bottom {
                mesh.x_desc(x_name);
            } else {
                mesh.x_labels(0);
            }
            if left {
                mesh.y_desc(y_name);
            } else {
                mesh.y_labels(0);
            }
            mesh.draw()?;
            chart.draw_series(LineSeries::new(curve, series_color(j).stroke_width(2)))?;
        } else {
            let (xs, ys) = complete_pairs(x_vals, y_vals);
            let (y_lo, y_hi) = ranges[i];

            let mut chart = ChartBuilder::on(panel)
                .margin(5)
                .x_label_area_size(if bottom { 35 } else { 5 })
                .y_label_area_size(if left { 55 } else { 5 })
                .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
            let mut mesh = chart.configure_mesh();
            mesh.disable_mesh();
            if bottom {
                mesh.x_desc(x_name);
            } else {
                mesh.x_labels(0);
            }
            if left {
                mesh.y_desc(y_name);
            } else {
                mesh.y_labels(0);
            }
            mesh.draw()?;
            chart.draw_series(
                xs.iter()
                    .zip(ys.iter())
                    .map(|(&a, &b)| Circle::new((a, b), 2, series_color(0).mix(0.6).filled())),
            )?;
        }
    }

    root.present()?;
    Ok(())
}
