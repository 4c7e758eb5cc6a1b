//! Resilience command implementation
//!
//! Shocked regressions over every ESG × financial × shock combination on the
//! dataset as read, without imputation.

use tracing::info;

use crate::context::AnalysisContext;
use crate::export::maybe_export;
use crate::Result;

/// Run the resilience command
pub fn run(ctx: &AnalysisContext) -> Result<()> {
    info!("Starting resilience analysis...");

    let data = ctx.load_raw()?;
    let outcome = ctx.run_grid(&data)?;
    maybe_export(ctx.exporter.as_ref(), "resilience", &outcome.records)?;

    if outcome.records.is_empty() {
        info!("No combination had usable data; shock charts not drawn");
    } else {
        ctx.plots.shock_visualizations(&outcome)?;
    }

    info!(
        records = outcome.records.len(),
        skipped = outcome.skipped.len(),
        "Resilience analysis complete"
    );
    Ok(())
}
