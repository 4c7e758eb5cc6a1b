//! Core table and error types.
//!
//! This module provides:
//! - `frame`: Column-oriented numeric table with `NaN` as the missing marker
//! - `error`: Structured error type for statistical operations

pub mod error;
pub mod frame;

pub use error::{StatsError, StatsResult};
pub use frame::Frame;
