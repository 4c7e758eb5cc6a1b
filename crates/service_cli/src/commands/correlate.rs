//! Correlate command implementation
//!
//! Correlation heatmap, pairwise correlations, significance screen, per-pair
//! OLS and the distribution charts, all on the mean-imputed dataset.

use analytics_core::{corr_with, correlation_matrix, ols};
use analytics_risk::significance_screen;
use tracing::{info, warn};

use crate::context::AnalysisContext;
use crate::export::{maybe_export, print_correlations};
use crate::Result;

/// Run the correlate command
pub fn run(ctx: &AnalysisContext) -> Result<()> {
    let config = &ctx.config;
    info!("Starting correlation analysis...");

    let data = ctx.load_imputed()?;
    info!(rows = data.n_rows(), columns = data.n_cols(), "Dataset ready");

    ctx.plots.correlation_heatmap(&correlation_matrix(&data))?;

    for esg in &config.esg_columns {
        let correlations = corr_with(&data, &config.financial_columns, esg)?;
        ctx.plots.pairwise_correlation(esg, &correlations)?;
    }

    let screen = significance_screen(
        &data,
        &config.esg_columns,
        &config.financial_columns,
        config.significance_level,
    )?;
    print_correlations(&screen);
    maybe_export(ctx.exporter.as_ref(), "correlations", &screen)?;

    for esg in &config.esg_columns {
        for metric in &config.financial_columns {
            match ols(&data, esg, metric) {
                Ok(fit) => {
                    println!("\nRegression Analysis: {} ~ {}", metric, esg);
                    println!("{}", fit.summary());
                    ctx.plots.regression_plot(&data, esg, metric, &fit)?;
                }
                Err(e) => warn!(esg = %esg, metric = %metric, error = %e, "Regression skipped"),
            }
        }
    }

    let selected = config.resolved_selected_columns();
    ctx.plots.scatter_matrix(&data, &selected)?;

    let all_columns: Vec<&String> = config
        .esg_columns
        .iter()
        .chain(&config.financial_columns)
        .collect();
    ctx.plots.boxplots(&data, &all_columns)?;
    ctx.plots.distributions(&data, &all_columns)?;

    info!("Correlation analysis complete");
    Ok(())
}
