//! Elasticity charts.

use crate::bars::draw_hbar;
use crate::error::{PlotError, PlotResult};
use crate::heatmap::draw_heatmap;
use crate::writer::PlotWriter;
use analytics_risk::{elasticity_matrix, ElasticityRecord};
use std::path::PathBuf;

impl PlotWriter {
    /// Bar chart of every pair's elasticity plus an ESG × financial heatmap.
    ///
    /// Returns `[elasticity_bars.svg, elasticity_heatmap.svg]`. The heatmap
    /// colour scale is symmetric around zero.
    pub fn elasticity_results(&self, records: &[ElasticityRecord]) -> PlotResult<Vec<PathBuf>> {
        if records.is_empty() {
            return Err(PlotError::NoData("elasticity results".to_string()));
        }

        let bars: Vec<(String, f64)> = records
            .iter()
            .map(|r| {
                (
                    format!("{} / {}", r.esg_component, r.financial_metric),
                    r.elasticity,
                )
            })
            .collect();
        let bars_path = self.path_for("elasticity_bars");
        draw_hbar(
            &bars_path,
            "ESG Elasticity of Financial Metrics",
            "Elasticity",
            "ESG Component / Financial Metric",
            &bars,
            None,
        )?;
        self.written(&bars_path, "elasticity_bars");

        let matrix = elasticity_matrix(records);
        let bound = matrix
            .finite_range()
            .map(|(lo, hi)| lo.abs().max(hi.abs()))
            .filter(|b| *b > 0.0)
            .unwrap_or(1.0);
        let heatmap_path = self.path_for("elasticity_heatmap");
        draw_heatmap(
            &heatmap_path,
            "Elasticity Heatmap",
            &matrix.rows,
            &matrix.cols,
            &matrix.values,
            (-bound, bound),
        )?;
        self.written(&heatmap_path, "elasticity_heatmap");

        Ok(vec![bars_path, heatmap_path])
    }
}
