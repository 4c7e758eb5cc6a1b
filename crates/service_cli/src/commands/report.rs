//! Report command implementation
//!
//! Runs the combined analysis and prints both tables to the console.

use tracing::info;

use crate::commands::elasticity::analyse;
use crate::context::AnalysisContext;
use crate::export::{print_elasticity_table, print_resilience_table};
use crate::Result;

/// Run the report command
pub fn run(ctx: &AnalysisContext) -> Result<()> {
    info!("Generating report...");

    let data = ctx.load_raw()?;
    let results = analyse(ctx, &data)?;

    print_resilience_table(&results.resilience.records);
    print_elasticity_table(&results.elasticity);

    println!();
    match results.resilience.most_sensitive() {
        Some(r) => println!(
            "Most shock-sensitive pair: {} vs {} at {:+.0}% shock (coefficient {:.6})",
            r.esg_component,
            r.financial_metric,
            r.shock_level * 100.0,
            r.coefficient
        ),
        None => println!("No resilience results available."),
    }

    info!(output_dir = %ctx.config.output_dir.display(), "Report generation complete");
    Ok(())
}
