//! Per-column distribution charts: box plots and histograms with a KDE.

use crate::error::{PlotError, PlotResult};
use crate::palette::{series_color, HISTOGRAM};
use crate::writer::{grid_dims, padded_range, PlotWriter, FONT};
use analytics_core::math::density::GaussianKde;
use analytics_core::math::descriptive::{BoxStats, Histogram};
use analytics_core::Frame;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Histogram bin count.
pub const HISTOGRAM_BINS: usize = 20;

const PANEL_W: u32 = 320;
const PANEL_H: u32 = 260;
const KDE_POINTS: usize = 120;

impl PlotWriter {
    /// One box plot per column, laid out on a near-square grid.
    pub fn boxplots<S: AsRef<str>>(&self, frame: &Frame, columns: &[S]) -> PlotResult<PathBuf> {
        let data = collect_columns(frame, columns)?;
        let path = self.path_for("boxplots");
        draw_panels(&path, "Box Plots of Selected Columns", &data, draw_box_panel)?;
        self.written(&path, "boxplots");
        Ok(path)
    }

    /// One histogram per column with its kernel density overlaid.
    pub fn distributions<S: AsRef<str>>(
        &self,
        frame: &Frame,
        columns: &[S],
    ) -> PlotResult<PathBuf> {
        let data = collect_columns(frame, columns)?;
        let path = self.path_for("distributions");
        draw_panels(&path, "Distributions of Selected Columns", &data, draw_histogram_panel)?;
        self.written(&path, "distributions");
        Ok(path)
    }
}

fn collect_columns<'a, S: AsRef<str>>(
    frame: &'a Frame,
    columns: &'a [S],
) -> PlotResult<Vec<(&'a str, &'a [f64])>> {
    let mut data = Vec::with_capacity(columns.len());
    for c in columns {
        let c = c.as_ref();
        data.push((c, frame.column(c)?));
    }
    Ok(data)
}

type PanelFn = fn(&DrawingArea<SVGBackend<'_>, Shift>, usize, &str, &[f64]) -> PlotResult<()>;

fn draw_panels(path: &Path, title: &str, data: &[(&str, &[f64])], panel: PanelFn) -> PlotResult<()> {
    if data.is_empty() {
        return Err(PlotError::NoData(title.to_string()));
    }
    let (rows, cols) = grid_dims(data.len());
    let root = SVGBackend::new(path, (PANEL_W * cols as u32, PANEL_H * rows as u32 + 40))
        .into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, (FONT, 22))?;

    // trailing cells of the last row stay blank
    for (i, area) in root.split_evenly((rows, cols)).iter().enumerate().take(data.len()) {
        let (name, values) = data[i];
        panel(area, i, name, values)?;
    }

    root.present()?;
    Ok(())
}

fn empty_panel(area: &DrawingArea<SVGBackend<'_>, Shift>, name: &str) -> PlotResult<()> {
    let mut chart = ChartBuilder::on(area)
        .caption(format!("{} (no data)", name), (FONT, 16))
        .margin(10)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;
    chart.configure_mesh().disable_mesh().x_labels(0).y_labels(0).draw()?;
    Ok(())
}

fn draw_box_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    index: usize,
    name: &str,
    values: &[f64],
) -> PlotResult<()> {
    let Some(stats) = BoxStats::from_values(values) else {
        return empty_panel(area, name);
    };
    let (lo, hi) = padded_range(
        [stats.whisker_low, stats.whisker_high]
            .into_iter()
            .chain(stats.outliers.iter().copied()),
    );

    let mut chart = ChartBuilder::on(area)
        .caption(name, (FONT, 16))
        .margin(10)
        .x_label_area_size(10)
        .y_label_area_size(50)
        .build_cartesian_2d(-1.0..1.0, lo..hi)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc(name)
        .draw()?;

    let color = series_color(index);
    let half = 0.35;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(-half, stats.q3), (half, stats.q1)],
        color.mix(0.6).filled(),
    )))?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(-half, stats.q3), (half, stats.q1)],
        BLACK.stroke_width(1),
    )))?;

    let segments = [
        vec![(-half, stats.median), (half, stats.median)],
        vec![(0.0, stats.q3), (0.0, stats.whisker_high)],
        vec![(0.0, stats.q1), (0.0, stats.whisker_low)],
        vec![(-half / 2.0, stats.whisker_high), (half / 2.0, stats.whisker_high)],
        vec![(-half / 2.0, stats.whisker_low), (half / 2.0, stats.whisker_low)],
    ];
    chart.draw_series(
        segments
            .into_iter()
            .map(|points| PathElement::new(points, BLACK.stroke_width(1))),
    )?;

    chart.draw_series(
        stats
            .outliers
            .iter()
            .map(|&v| Circle::new((0.0, v), 3, BLACK.stroke_width(1))),
    )?;
    Ok(())
}

fn draw_histogram_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    _index: usize,
    name: &str,
    values: &[f64],
) -> PlotResult<()> {
    let Some(hist) = Histogram::new(values, HISTOGRAM_BINS) else {
        return empty_panel(area, name);
    };
    let width = hist.width();
    let x_lo = hist.edges[0];
    let x_hi = hist.edges[hist.edges.len() - 1];

    // density rescaled to counts so both share the y axis
    let scale = hist.total() as f64 * width;
    let curve: Vec<(f64, f64)> = GaussianKde::new(values)
        .map(|kde| {
            kde.curve(x_lo, x_hi, KDE_POINTS)
                .into_iter()
                .map(|(x, d)| (x, d * scale))
                .collect()
        })
        .unwrap_or_default();
    let y_hi = curve
        .iter()
        .map(|(_, y)| *y)
        .fold(hist.max_count() as f64, f64::max)
        .max(1.0)
        * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(format!("Distribution of {}", name), (FONT, 16))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(x_lo..x_hi, 0.0..y_hi)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(name)
        .y_desc("Frequency")
        .x_labels(5)
        .draw()?;

    chart.draw_series(hist.counts.iter().enumerate().map(|(i, &count)| {
        let x0 = hist.edges[i];
        Rectangle::new([(x0, count as f64), (x0 + width, 0.0)], HISTOGRAM.mix(0.5).filled())
    }))?;
    chart.draw_series(LineSeries::new(curve, HISTOGRAM.stroke_width(2)))?;
    Ok(())
}
