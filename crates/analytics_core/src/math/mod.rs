//! Statistical routines.
//!
//! - `descriptive`: Means, variances, quantiles, box-plot summaries, histograms
//! - `correlation`: Pearson correlation, correlation matrices, `corr_with`
//! - `regression`: Ordinary least squares and simple linear fits
//! - `density`: Gaussian kernel density estimation
//! - `distributions`: Student t and Fisher F tail probabilities

pub mod correlation;
pub mod density;
pub mod descriptive;
pub mod distributions;
pub mod regression;
