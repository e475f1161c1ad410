//! Point process simulators on a finite horizon `[0, T]`.
//!
//! - [`homogeneous`]: Constant-rate arrivals from accumulated exponential gaps
//! - [`thinning`]: Time-varying rates by Lewis–Shedler thinning of a dominating process
//! - [`compound`]: Cumulative sums of i.i.d. marks attached to homogeneous arrivals
//! - [`simulator`]: [`ProcessSimulator`], a configuration-bound facade over the above
//!
//! All simulators take the draw engine as `&mut R` and validate their
//! parameters before the first draw.

pub mod compound;
pub mod homogeneous;
pub mod simulator;
pub mod thinning;

pub use compound::{exponential_marks, simulate_compound};
pub use homogeneous::simulate_homogeneous;
pub use simulator::ProcessSimulator;
pub use thinning::{
    simulate_nonhomogeneous, simulate_nonhomogeneous_with_tolerance, thin, RateFunction,
    ENVELOPE_TOLERANCE,
};
