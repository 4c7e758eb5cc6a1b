//! # adapter_loader: Dataset Input Adapter
//!
//! Turns CSV files into an [`analytics_core::Frame`] ready for analysis.
//!
//! ## Modules
//!
//! - [`csv_loader`]: Header-driven CSV parsing with optional column selection
//! - [`imputer`]: Column-mean imputation of missing values
//! - [`synthetic`]: Seeded generator for ESG/financial sample datasets
//! - [`error`]: `LoaderError`
//!
//! ## Example
//!
//! ```
//! use adapter_loader::{CsvLoader, MeanImputer};
//!
//! let data = "ESG_Score,ROA\n50,0.04\n,0.05\n70,0.06\n";
//! let frame = CsvLoader::new().load_from_reader(data.as_bytes()).unwrap();
//! assert!(frame.has_missing());
//!
//! let imputed = MeanImputer::fit(&frame).unwrap().transform(&frame).unwrap();
//! assert_eq!(imputed.column("ESG_Score").unwrap()[1], 60.0);
//! ```

#![deny(missing_docs)]

pub mod csv_loader;
pub mod error;
pub mod imputer;
pub mod synthetic;

pub use csv_loader::{load_and_process, CsvLoader, DEFAULT_MISSING_TOKENS};
pub use error::{LoaderError, LoaderResult};
pub use imputer::MeanImputer;
pub use synthetic::{SyntheticEsgGenerator, SyntheticSpec};
