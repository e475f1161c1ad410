//! # pointproc_core: Foundation for Point Process Simulation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pointproc_core is the bottom layer of the workspace, providing:
//! - The injected draw engine abstraction and its seeded implementation (`rng`)
//! - Arrival and compound path sequence types (`types::sequence`)
//! - The simulation error taxonomy (`types::error`)
//! - Simulation configuration with TOML loading (`config`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pointproc_* crates, with minimal
//! external dependencies:
//! - rand / rand_distr: Seeded PRNG and exponential variates
//! - thiserror: Error derivation
//! - serde / toml: Configuration loading
//!
//! ## Usage Examples
//!
//! ```rust
//! use pointproc_core::rng::{DrawEngine, ProcessRng};
//! use pointproc_core::types::ArrivalSequence;
//!
//! let mut rng = ProcessRng::from_seed(42);
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let arrivals = ArrivalSequence::new(vec![0.5, 1.25, 3.0], 4.0).unwrap();
//! assert_eq!(arrivals.count_at(2.0), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod rng;
pub mod types;

pub use config::{ConfigError, SimulationConfig, SimulationConfigBuilder};
pub use rng::{DrawEngine, ProcessRng};
pub use types::{ArrivalSequence, CompoundPath, SimulationError, SimulationResult};
