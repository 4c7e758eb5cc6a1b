//! Scatter plot with a fitted regression line.

use crate::error::{PlotError, PlotResult};
use crate::writer::{padded_range, PlotWriter, FONT};
use analytics_core::{Frame, OlsFit};
use plotters::prelude::*;
use std::path::PathBuf;

impl PlotWriter {
    /// Data points of `metric` against `esg` and the OLS line from `fit`.
    pub fn regression_plot(
        &self,
        frame: &Frame,
        esg: &str,
        metric: &str,
        fit: &OlsFit,
    ) -> PlotResult<PathBuf> {
        let (x, y) = frame.complete_pairs(esg, metric)?;
        let title = format!("Regression: {} on {}", metric, esg);
        if x.is_empty() {
            return Err(PlotError::NoData(title));
        }

        let (x_lo, x_hi) = padded_range(x.iter().copied());
        let line_x = [x_lo, x_hi];
        let line_y = fit.predict(&line_x);
        let (y_lo, y_hi) = padded_range(y.iter().chain(line_y.iter()).copied());

        let path = self.path_for(&format!("regression_{}_vs_{}", esg, metric));
        {
            let root = SVGBackend::new(&path, (800, 500)).into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&title, (FONT, 20))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(70)
                .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

            chart.configure_mesh().x_desc(esg).y_desc(metric).draw()?;

            chart
                .draw_series(
                    x.iter()
                        .zip(y.iter())
                        .map(|(&a, &b)| Circle::new((a, b), 3, BLUE.mix(0.7).filled())),
                )?
                .label("Data Points")
                .legend(|(px, py)| Circle::new((px + 10, py), 3, BLUE.mix(0.7).filled()));

            chart
                .draw_series(LineSeries::new(
                    line_x.iter().copied().zip(line_y.iter().copied()),
                    RED.stroke_width(2),
                ))?
                .label("Regression Line")
                .legend(|(px, py)| PathElement::new(vec![(px, py), (px + 20, py)], RED.stroke_width(2)));

            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;

            root.present()?;
        }
        self.written(&path, "regression_plot");
        Ok(path)
    }
}
