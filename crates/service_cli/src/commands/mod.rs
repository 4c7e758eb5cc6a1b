//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod correlate;
pub mod elasticity;
pub mod generate;
pub mod report;
pub mod resilience;
