//! Homogeneous (constant-rate) point process on `[0, T]`.
//!
//! Interarrival gaps of a rate-`lambda` process are i.i.d. `Exp(lambda)`, so
//! the arrival times are generated by accumulating gaps until the clock
//! passes the horizon:
//!
//! ```text
//! t = 0
//! loop:
//!     t += S,  S ~ Exp(lambda)
//!     if t > T: stop            (overshoot is drawn but discarded)
//!     emit t
//! ```
//!
//! The number of arrivals is `Poisson(lambda * T)` and the expected number
//! of exponential draws is `lambda * T + 1`.

use pointproc_core::rng::DrawEngine;
use pointproc_core::types::{ArrivalSequence, SimulationError, SimulationResult};
use tracing::debug;

/// Simulates the arrival times of a constant-rate point process on `[0, horizon]`.
///
/// Every returned time lies in `(0, horizon]` and the times are strictly
/// increasing. Zero arrivals is a valid outcome. Each call advances the
/// engine, so repeated calls yield independent samples.
///
/// # Errors
///
/// - `InvalidParameter` if `rate` or `horizon` is not finite and strictly
///   positive. Validation happens before any draw.
/// - `InvalidDraw` if the engine returns a negative or non-finite gap.
///
/// # Examples
///
/// ```rust
/// use pointproc_core::rng::ProcessRng;
/// use pointproc_models::processes::simulate_homogeneous;
///
/// let mut rng = ProcessRng::from_seed(42);
/// let arrivals = simulate_homogeneous(3.0, 5.0, &mut rng).unwrap();
///
/// assert!(arrivals.times().windows(2).all(|w| w[0] < w[1]));
/// assert!(arrivals.iter().all(|&t| t > 0.0 && t <= 5.0));
/// ```
pub fn simulate_homogeneous<R: DrawEngine + ?Sized>(
    rate: f64,
    horizon: f64,
    rng: &mut R,
) -> SimulationResult<ArrivalSequence> {
    let rate = SimulationError::require_positive("rate", rate)?;
    let horizon = SimulationError::require_positive("horizon", horizon)?;

    let mut times = Vec::with_capacity(expected_capacity(rate, horizon));
    let mut t = 0.0;
    loop {
        let gap = rng.gen_exponential(rate);
        if !(gap.is_finite() && gap >= 0.0) {
            return Err(SimulationError::InvalidDraw { value: gap });
        }
        let previous = t;
        t += gap;
        if t > horizon {
            break;
        }
        // Gaps that vanish in floating point would repeat a time.
        if t > previous {
            times.push(t);
        }
    }

    debug!(rate, horizon, arrivals = times.len(), "simulated homogeneous process");
    ArrivalSequence::new(times, horizon)
}

/// Largest up-front reservation; bigger samples grow the vector.
const MAX_RESERVE: usize = 1 << 20;

/// Initial buffer size: the mean count plus three standard deviations.
fn expected_capacity(rate: f64, horizon: f64) -> usize {
    let mean = rate * horizon;
    let bound = mean + 3.0 * mean.sqrt() + 1.0;
    bound.min(MAX_RESERVE as f64) as usize
}
