//! # analytics_risk: Shock Resilience and Elasticity
//!
//! Scenario-style analysis of how financial metrics respond to ESG scores.
//!
//! This crate provides:
//! - Shock levels and the shocked-regression primitive (`shock`, `resilience`)
//! - Log-log elasticity estimation (`elasticity`)
//! - Pearson significance screening of ESG/financial pairs (`significance`)
//! - The {ESG × financial × shock} combination grid with rayon fan-out (`grid`, `parallel`)
//! - Serializable result rows and heatmap pivots (`results`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           analytics_risk                │
//! ├─────────────────────────────────────────┤
//! │  grid/         - ResilienceGrid,       │
//! │                  elasticity_table      │
//! │  resilience/   - shocked OLS line      │
//! │  elasticity/   - log-log slope         │
//! │  significance/ - Pearson screen        │
//! │  parallel/     - Rayon utilities       │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           analytics_core                │
//! │  Frame, pearson, SimpleLinearFit       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use analytics_core::Frame;
//! use analytics_risk::{elasticity_table, ParallelConfig};
//!
//! let frame = Frame::from_columns(vec![
//!     ("ESG_Score".to_string(), vec![40.0, 55.0, 70.0, 85.0]),
//!     ("ROE".to_string(), vec![0.08, 0.10, 0.13, 0.15]),
//! ])
//! .unwrap();
//!
//! let table = elasticity_table(&frame, &["ESG_Score"], &["ROE"], &ParallelConfig::default()).unwrap();
//! assert_eq!(table.len(), 1);
//! assert!(table[0].elasticity > 0.0);
//! ```

#![deny(missing_docs)]

pub mod elasticity;
pub mod error;
pub mod grid;
pub mod parallel;
pub mod resilience;
pub mod results;
pub mod shock;
pub mod significance;

pub use elasticity::{calculate_elasticity, ElasticityFit};
pub use error::{RiskError, RiskResult};
pub use grid::{elasticity_table, GridOutcome, ResilienceGrid, SkippedCombination};
pub use parallel::ParallelConfig;
pub use resilience::{resilience_regression, ResilienceFit};
pub use results::{
    elasticity_matrix, CorrelationRecord, ElasticityRecord, LabelledMatrix, ResilienceRecord,
    Significance,
};
pub use shock::ShockLevel;
pub use significance::{significance_screen, DEFAULT_ALPHA};
