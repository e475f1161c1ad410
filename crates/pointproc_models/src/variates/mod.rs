//! General-purpose random variate generators based on inversion sampling.
//!
//! Inversion sampling maps a uniform draw `U` through the inverse cumulative
//! distribution function of the target law. The same principle drives the
//! exponential interarrival gaps of the homogeneous simulator.
//!
//! - [`discrete`]: Finite probability mass tables ([`sample_discrete`], [`DiscreteInversion`])
//! - [`exponential`]: Exponential variates ([`sample_exponential`])

pub mod discrete;
pub mod exponential;

pub use discrete::{sample_discrete, DiscreteInversion};
pub use exponential::sample_exponential;
