//! # analytics_core: Statistical Foundation for ESG Resilience Analytics
//!
//! ## Layer Role
//!
//! analytics_core is the bottom layer of the workspace, providing:
//! - An in-memory numeric table with named columns (`types::frame`)
//! - Error types: `StatsError` (`types::error`)
//! - Descriptive statistics, box-plot summaries and histograms (`math::descriptive`)
//! - Pearson correlation with two-sided p-values (`math::correlation`)
//! - Ordinary least squares with a full regression summary (`math::regression`)
//! - Gaussian kernel density estimation for distribution plots (`math::density`)
//! - Student t / Fisher F helpers over `statrs` (`math::distributions`)
//!
//! ## Missing Values
//!
//! A missing observation is represented as `f64::NAN`. Routines that pair two
//! columns use pairwise complete observations unless stated otherwise.
//!
//! ## Usage Examples
//!
//! ```rust
//! use analytics_core::math::regression::ols;
//! use analytics_core::types::Frame;
//!
//! let frame = Frame::from_columns(vec![
//!     ("esg".to_string(), vec![1.0, 2.0, 3.0, 4.0]),
//!     ("roa".to_string(), vec![3.0, 5.0, 7.0, 9.0]),
//! ])
//! .unwrap();
//!
//! let fit = ols(&frame, "esg", "roa").unwrap();
//! assert!((fit.slope() - 2.0).abs() < 1e-10);
//! assert!((fit.intercept() - 1.0).abs() < 1e-10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

pub use math::correlation::{corr_with, correlation_matrix, pearson, CorrelationMatrix, PearsonResult};
pub use math::regression::{ols, OlsFit, OlsModel, RegressionSummary, SimpleLinearFit};
pub use types::{Frame, StatsError, StatsResult};
