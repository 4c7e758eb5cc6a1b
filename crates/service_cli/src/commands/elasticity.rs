//! Elasticity command implementation
//!
//! Resilience grid followed by the log-log elasticity of every pair.

use analytics_core::Frame;
use analytics_risk::{elasticity_table, ElasticityRecord, GridOutcome};
use tracing::info;

use crate::context::AnalysisContext;
use crate::export::maybe_export;
use crate::Result;

/// Both result sets of a combined run.
pub struct CombinedResults {
    pub resilience: GridOutcome,
    pub elasticity: Vec<ElasticityRecord>,
}

/// Compute, export and chart both result sets.
pub fn analyse(ctx: &AnalysisContext, data: &Frame) -> Result<CombinedResults> {
    let config = &ctx.config;

    let resilience = ctx.run_grid(data)?;
    let elasticity = elasticity_table(
        data,
        &config.esg_columns,
        &config.financial_columns,
        &ctx.parallel,
    )?;

    maybe_export(ctx.exporter.as_ref(), "resilience", &resilience.records)?;
    maybe_export(ctx.exporter.as_ref(), "elasticity", &elasticity)?;

    if !resilience.records.is_empty() {
        ctx.plots.shock_visualizations(&resilience)?;
    }
    if !elasticity.is_empty() {
        ctx.plots.elasticity_results(&elasticity)?;
    }

    Ok(CombinedResults {
        resilience,
        elasticity,
    })
}

/// Run the elasticity command
pub fn run(ctx: &AnalysisContext) -> Result<()> {
    info!("Starting resilience and elasticity analysis...");

    let data = ctx.load_raw()?;
    let results = analyse(ctx, &data)?;

    info!(
        resilience_records = results.resilience.records.len(),
        elasticity_records = results.elasticity.len(),
        "Elasticity analysis complete"
    );
    Ok(())
}
