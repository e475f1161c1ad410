//! # Draw Engine Infrastructure
//!
//! This module provides the random draw facilities every simulator in the
//! workspace consumes. The uniform/exponential primitive source is injected
//! into each operation rather than constructed internally.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All engines support seeding for deterministic sequences
//! - **Static dispatch**: Simulators are generic over [`DrawEngine`]; no `Box<dyn Trait>`
//! - **Exclusive access**: Every draw takes `&mut self`, so one engine instance
//!   cannot be consumed by two simulations at once
//! - **Explicit defaults**: Entropy seeding is a named constructor
//!   ([`ProcessRng::from_entropy`]), never hidden process-wide state
//!
//! ## Module Structure
//!
//! - [`engine`]: The [`DrawEngine`] capability trait
//! - [`prng`]: [`ProcessRng`], the seeded `StdRng` wrapper
//!
//! ## Usage Example
//!
//! ```rust
//! use pointproc_core::rng::{DrawEngine, ProcessRng};
//!
//! // Create a seeded engine for reproducible simulations
//! let mut rng = ProcessRng::from_seed(12345);
//!
//! // Single uniform in [0, 1)
//! let u = rng.gen_uniform();
//!
//! // Single exponential with mean 1/2
//! let s = rng.gen_exponential(2.0);
//!
//! // Batch of uniforms
//! let batch = rng.uniforms(100);
//! assert_eq!(batch.len(), 100);
//! # assert!(u < 1.0 && s >= 0.0);
//! ```
//!
//! ## Concurrency
//!
//! Engines are not shared between threads. Callers that need parallel
//! simulation must give each worker its own independently seeded engine.

pub mod engine;
pub mod prng;

// Public re-exports
pub use engine::DrawEngine;
pub use prng::ProcessRng;
