//! Exponential variates by inversion.
//!
//! For `U ~ Uniform[0, 1)` the inverse CDF of `Exp(rate)` gives
//!
//! ```text
//! X = -ln(1 - U) / rate
//! ```
//!
//! Using `1 - U` keeps the logarithm argument in `(0, 1]`, so a draw of
//! exactly `0` yields `X = 0` rather than `ln(0)`.

use pointproc_core::rng::DrawEngine;
use pointproc_core::types::{SimulationError, SimulationResult};

/// Draws `size` i.i.d. exponential variates with mean `1 / rate`.
///
/// All `size` uniforms are drawn in one batch before the transform is
/// applied. Every output is finite and `>= 0`.
///
/// # Errors
///
/// Returns `SimulationError::InvalidParameter` if `rate` is not finite and
/// strictly positive. No draw is consumed in that case.
///
/// # Examples
///
/// ```rust
/// use pointproc_core::rng::ProcessRng;
/// use pointproc_models::variates::sample_exponential;
///
/// let mut rng = ProcessRng::from_seed(42);
/// let xs = sample_exponential(2.0, 1000, &mut rng).unwrap();
/// assert_eq!(xs.len(), 1000);
/// assert!(xs.iter().all(|&x| x >= 0.0));
/// ```
pub fn sample_exponential<R: DrawEngine + ?Sized>(
    rate: f64,
    size: usize,
    rng: &mut R,
) -> SimulationResult<Vec<f64>> {
    let rate = SimulationError::require_positive("rate", rate)?;

    let mut samples = vec![0.0; size];
    rng.fill_uniform(&mut samples);
    for x in samples.iter_mut() {
        *x = inverse_cdf(*x, rate);
    }
    Ok(samples)
}

/// Inverse CDF of `Exp(rate)` evaluated at `u`.
#[inline]
pub(crate) fn inverse_cdf(u: f64, rate: f64) -> f64 {
    -(1.0 - u).ln() / rate
}
