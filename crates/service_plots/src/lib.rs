//! # service_plots: SVG Charts for ESG Resilience Results
//!
//! Every chart is a method on [`PlotWriter`], which owns the output directory
//! and returns the path of each file it writes.
//!
//! | Chart | Method | File |
//! |-------|--------|------|
//! | Correlation heatmap | [`PlotWriter::correlation_heatmap`] | `correlation_heatmap.svg` |
//! | Pairwise correlation bars | [`PlotWriter::pairwise_correlation`] | `pairwise_correlation_{esg}.svg` |
//! | Pair plot | [`PlotWriter::scatter_matrix`] | `scatter_matrix.svg` |
//! | Box plots | [`PlotWriter::boxplots`] | `boxplots.svg` |
//! | Histograms with KDE | [`PlotWriter::distributions`] | `distributions.svg` |
//! | Regression line | [`PlotWriter::regression_plot`] | `regression_{esg}_vs_{metric}.svg` |
//! | Shock response | [`PlotWriter::shock_visualizations`] | `shock_{metric}.svg` |
//! | Elasticity | [`PlotWriter::elasticity_results`] | `elasticity_bars.svg`, `elasticity_heatmap.svg` |
//!
//! File names pass through [`file_stem`], so they are lower case.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bars;
mod distribution;
mod elasticity;
mod error;
mod heatmap;
pub mod palette;
mod regression_plot;
mod scatter_matrix;
mod shock;
mod writer;

pub use distribution::HISTOGRAM_BINS;
pub use error::{PlotError, PlotResult};
pub use writer::{file_stem, grid_dims, padded_range, PlotWriter};
