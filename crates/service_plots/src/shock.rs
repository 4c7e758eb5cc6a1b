//! Shock-response charts: fitted coefficient and intercept against the
//! shock size, one line per ESG component.

use crate::error::{PlotError, PlotResult};
use crate::palette::series_color;
use crate::writer::{padded_range, PlotWriter, FONT};
use analytics_risk::GridOutcome;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

impl PlotWriter {
    /// One file per financial metric, `shock_{metric}.svg`.
    ///
    /// # Errors
    /// `NoData` if the outcome holds no records.
    pub fn shock_visualizations(&self, outcome: &GridOutcome) -> PlotResult<Vec<PathBuf>> {
        if outcome.records.is_empty() {
            return Err(PlotError::NoData("shock visualizations".to_string()));
        }
        let esg = outcome.esg_components();
        let mut written = Vec::new();
        for metric in outcome.financial_metrics() {
            let path = self.path_for(&format!("shock_{}", metric));
            draw_shock_chart(&path, outcome, &esg, &metric)?;
            self.written(&path, "shock_visualization");
            written.push(path);
        }
        Ok(written)
    }
}

#[derive(Clone, Copy)]
enum Panel {
    Coefficient,
    Intercept,
}

impl Panel {
    fn title(self) -> &'static str {
        match self {
            Panel::Coefficient => "Coefficient",
            Panel::Intercept => "Intercept",
        }
    }
}

fn draw_shock_chart(path: &Path, outcome: &GridOutcome, esg: &[String], metric: &str) -> PlotResult<()> {
    let root = SVGBackend::new(path, (1200, 500)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(&format!("Shock Response of {}", metric), (FONT, 22))?;
    let (left, right) = root.split_horizontally(600);
    draw_panel(&left, outcome, esg, metric, Panel::Coefficient)?;
    draw_panel(&right, outcome, esg, metric, Panel::Intercept)?;
    root.present()?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    outcome: &GridOutcome,
    esg: &[String],
    metric: &str,
    panel: Panel,
) -> PlotResult<()> {
    let series: Vec<(usize, &String, Vec<(f64, f64)>)> = esg
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let points = outcome
                .records_for(e, metric)
                .into_iter()
                .map(|r| {
                    let y = match panel {
                        Panel::Coefficient => r.coefficient,
                        Panel::Intercept => r.intercept,
                    };
                    (r.shock_level * 100.0, y)
                })
                .filter(|(_, y)| y.is_finite())
                .collect();
            (i, e, points)
        })
        .collect();

    let (x_lo, x_hi) = padded_range(outcome.shock_levels().into_iter().map(|s| s * 100.0));
    let (y_lo, y_hi) = padded_range(series.iter().flat_map(|(_, _, p)| p.iter().map(|(_, y)| *y)));

    let mut chart = ChartBuilder::on(area)
        .caption(format!("{} vs Shock Level", panel.title()), (FONT, 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
    chart
        .configure_mesh()
        .x_desc("Shock Level (%)")
        .y_desc(panel.title())
        .x_label_formatter(&|v| format!("{:+.0}", v))
        .draw()?;

    for (i, name, points) in series {
        let color = series_color(i);
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)).point_size(4))?
            .label(name.as_str())
            .legend(move |(px, py)| PathElement::new(vec![(px, py), (px + 20, py)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;
    Ok(())
}
