//! Horizontal bar charts.

use crate::error::{PlotError, PlotResult};
use crate::palette::viridis;
use crate::writer::{category_label, padded_range, PlotWriter, FONT};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

impl PlotWriter {
    /// Correlation of one ESG column with each financial metric.
    ///
    /// `correlations` is the output of `analytics_core::corr_with`.
    pub fn pairwise_correlation(
        &self,
        esg: &str,
        correlations: &[(String, f64)],
    ) -> PlotResult<PathBuf> {
        let path = self.path_for(&format!("pairwise_correlation_{}", esg));
        draw_hbar(
            &path,
            &format!("Correlation of {} with Financial Metrics", esg),
            "Correlation Coefficient",
            "Financial Metric",
            correlations,
            Some((-1.0, 1.0)),
        )?;
        self.written(&path, "pairwise_correlation");
        Ok(path)
    }
}

/// Bars from zero to each value, first entry at the top, viridis fills.
///
/// `fixed_range` pins the value axis; otherwise it spans the data and zero.
pub(crate) fn draw_hbar(
    path: &Path,
    title: &str,
    value_desc: &str,
    category_desc: &str,
    bars: &[(String, f64)],
    fixed_range: Option<(f64, f64)>,
) -> PlotResult<()> {
    if bars.is_empty() {
        return Err(PlotError::NoData(title.to_string()));
    }
    let n = bars.len();
    let reversed: Vec<String> = bars.iter().rev().map(|(label, _)| label.clone()).collect();
    let longest = bars.iter().map(|(l, _)| l.len()).max().unwrap_or(0) as u32;

    let (lo, hi) = fixed_range.unwrap_or_else(|| {
        padded_range(bars.iter().map(|(_, v)| *v).chain(std::iter::once(0.0)))
    });

    let height = 120 + 40 * n as u32;
    let root = SVGBackend::new(path, (900, height.max(300))).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(30 + 8 * longest)
        .build_cartesian_2d(lo..hi, -0.5..(n as f64 - 0.5))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&|v| category_label(&reversed, *v))
        .x_desc(value_desc)
        .y_desc(category_desc)
        .draw()?;

    let denom = (n.max(2) - 1) as f64;
    chart.draw_series(bars.iter().enumerate().filter(|(_, (_, v))| v.is_finite()).map(
        |(i, (_, v))| {
            let y = (n - 1 - i) as f64;
            let (x0, x1) = if *v >= 0.0 { (0.0, *v) } else { (*v, 0.0) };
            Rectangle::new(
                [(x0, y + 0.4), (x1, y - 0.4)],
                viridis(i as f64 / denom).filled(),
            )
        },
    ))?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, -0.5), (0.0, n as f64 - 0.5)],
        BLACK.stroke_width(1),
    )))?;

    root.present()?;
    Ok(())
}
