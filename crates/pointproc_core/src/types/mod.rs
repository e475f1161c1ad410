//! Core data and error types.
//!
//! This module provides:
//! - `sequence`: Arrival sequences and compound paths produced by the simulators
//! - `error`: Structured error type shared by every simulation operation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`ArrivalSequence`], [`CompoundPath`] from `sequence`
//! - [`SimulationError`], [`SimulationResult`] from `error`

pub mod error;
pub mod sequence;

// Re-export commonly used types at module level
pub use error::{SimulationError, SimulationResult};
pub use sequence::{ArrivalSequence, CompoundPath};
