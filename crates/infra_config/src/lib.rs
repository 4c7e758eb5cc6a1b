//! # infra_config: Analysis Configuration
//!
//! TOML-backed configuration for the esgrisk analyses with environment
//! variable overrides and validation that reports every problem at once.
//!
//! ## Example
//!
//! ```
//! use infra_config::AnalysisConfig;
//!
//! let config = AnalysisConfig::from_toml_str(
//!     r#"
//!     file_path = "data/esg.csv"
//!     esg_columns = ["ESG_Score"]
//!     financial_columns = ["ROA"]
//!     shock_levels = [-0.1, 0.1]
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.resolved_selected_columns(), vec!["ESG_Score", "ROA"]);
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod error;

pub use config::{AnalysisConfig, VALID_LOG_LEVELS};
pub use error::ConfigError;
