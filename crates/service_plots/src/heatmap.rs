//! Annotated heatmaps.

use crate::error::{PlotError, PlotResult};
use crate::palette::{coolwarm, text_on};
use crate::writer::{category_label, PlotWriter, FONT};
use analytics_core::CorrelationMatrix;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

const CELL_PX: u32 = 90;

impl PlotWriter {
    /// Correlation heatmap over every column, annotated to two decimals,
    /// coolwarm over `[-1, 1]`.
    pub fn correlation_heatmap(&self, matrix: &CorrelationMatrix) -> PlotResult<PathBuf> {
        let path = self.path_for("correlation_heatmap");
        let rows: Vec<Vec<f64>> = matrix
            .values
            .chunks(matrix.dim().max(1))
            .map(<[f64]>::to_vec)
            .collect();
        draw_heatmap(
            &path,
            "Correlation Heatmap of ESG Components and Financial Metrics",
            &matrix.labels,
            &matrix.labels,
            &rows,
            (-1.0, 1.0),
        )?;
        self.written(&path, "correlation_heatmap");
        Ok(path)
    }
}

/// Draw a labelled matrix as a heatmap; the first row is drawn at the top.
pub(crate) fn draw_heatmap(
    path: &Path,
    title: &str,
    rows: &[String],
    cols: &[String],
    values: &[Vec<f64>],
    range: (f64, f64),
) -> PlotResult<()> {
    if rows.is_empty() || cols.is_empty() {
        return Err(PlotError::NoData(title.to_string()));
    }
    let (n_rows, n_cols) = (rows.len(), cols.len());
    let longest = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
    let y_label_px = 20 + 8 * longest;
    let width = y_label_px + CELL_PX * n_cols as u32 + 60;
    let height = CELL_PX * n_rows as u32 + 140;

    // y axis runs bottom-up; reverse so row 0 sits at the top
    let reversed: Vec<String> = rows.iter().rev().cloned().collect();

    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, 18))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(y_label_px)
        .build_cartesian_2d(-0.5..(n_cols as f64 - 0.5), -0.5..(n_rows as f64 - 0.5))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n_cols)
        .y_labels(n_rows)
        .x_label_formatter(&|v| category_label(cols, *v))
        .y_label_formatter(&|v| category_label(&reversed, *v))
        .draw()?;

    let (lo, hi) = range;
    let centre = Pos::new(HPos::Center, VPos::Center);
    for (i, row) in values.iter().enumerate().take(n_rows) {
        let y = (n_rows - 1 - i) as f64;
        for (j, &v) in row.iter().enumerate().take(n_cols) {
            let x = j as f64;
            let fill = if v.is_finite() {
                coolwarm(v, lo, hi)
            } else {
                RGBColor(245, 245, 245)
            };
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x - 0.5, y + 0.5), (x + 0.5, y - 0.5)],
                fill.filled(),
            )))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x - 0.5, y + 0.5), (x + 0.5, y - 0.5)],
                WHITE.stroke_width(1),
            )))?;
            let label = if v.is_finite() {
                format!("{:.2}", v)
            } else {
                "n/a".to_string()
            };
            let style = (FONT, 14).into_font().color(&text_on(fill)).pos(centre);
            chart.draw_series(std::iter::once(Text::new(label, (x, y), style)))?;
        }
    }

    root.present()?;
    Ok(())
}
