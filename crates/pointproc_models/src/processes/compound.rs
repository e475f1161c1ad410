//! Compound point process on `[0, T]`.
//!
//! A homogeneous process `N(t)` of rate `lambda` carries i.i.d. marks
//! `Y_1, Y_2, ...`; the compound process is
//!
//! ```text
//! X(t) = Y_1 + ... + Y_{N(t)}
//! ```
//!
//! The marks are requested from the caller's sampler in a single batch of
//! exactly `N(T)` values once the arrivals are known.

use pointproc_core::rng::DrawEngine;
use pointproc_core::types::{CompoundPath, SimulationError, SimulationResult};
use tracing::debug;

use super::homogeneous::simulate_homogeneous;
use crate::variates::sample_exponential;

/// Simulates a compound process with arrival rate `rate` on `[0, horizon]`.
///
/// `mark_sampler` receives the engine and the number of arrivals `n`, and
/// must return exactly `n` i.i.d. marks. It is called at most once, and not
/// at all when no event occurs (the result is then three empty sequences).
///
/// # Errors
///
/// - `InvalidParameter` (converted into `E`) if `rate` or `horizon` is not
///   finite and strictly positive.
/// - `MarkCountMismatch` (converted into `E`) if the sampler returns the
///   wrong number of marks.
/// - Any error returned by `mark_sampler`, unchanged.
///
/// # Examples
///
/// ```rust
/// use pointproc_core::rng::ProcessRng;
/// use pointproc_models::processes::simulate_compound;
/// use pointproc_models::variates::sample_exponential;
///
/// let mut rng = ProcessRng::from_seed(42);
/// let path = simulate_compound(
///     2.0,
///     5.0,
///     |rng: &mut ProcessRng, n| sample_exponential(1.0, n, rng),
///     &mut rng,
/// )
/// .unwrap();
///
/// assert_eq!(path.values().len(), path.marks().len());
/// assert_eq!(path.arrivals().len(), path.marks().len());
/// ```
pub fn simulate_compound<R, S, E>(
    rate: f64,
    horizon: f64,
    mut mark_sampler: S,
    rng: &mut R,
) -> Result<CompoundPath, E>
where
    R: DrawEngine + ?Sized,
    S: FnMut(&mut R, usize) -> Result<Vec<f64>, E>,
    E: From<SimulationError>,
{
    let arrivals = simulate_homogeneous(rate, horizon, rng)?;
    let n = arrivals.len();
    if n == 0 {
        debug!(rate, horizon, "compound process has no jumps");
        return Ok(CompoundPath::empty(horizon));
    }

    let marks = mark_sampler(rng, n)?;
    let path = CompoundPath::from_marks(arrivals, marks)?;
    debug!(
        rate,
        horizon,
        jumps = n,
        total = path.total(),
        "simulated compound process"
    );
    Ok(path)
}

/// Mark sampler drawing exponential jump sizes with the given mean.
///
/// Marks come from [`sample_exponential`] with rate `1 / mean`.
///
/// # Errors
///
/// Returns `SimulationError::InvalidParameter` if `mean` is not finite and
/// strictly positive.
///
/// # Examples
///
/// ```rust
/// use pointproc_core::rng::ProcessRng;
/// use pointproc_models::processes::{exponential_marks, simulate_compound};
///
/// let mut rng = ProcessRng::from_seed(7);
/// let sampler = exponential_marks::<ProcessRng>(1.0).unwrap();
/// let path = simulate_compound(2.0, 5.0, sampler, &mut rng).unwrap();
/// assert!(path.marks().iter().all(|&y| y >= 0.0));
/// ```
pub fn exponential_marks<R>(
    mean: f64,
) -> SimulationResult<impl FnMut(&mut R, usize) -> SimulationResult<Vec<f64>>>
where
    R: DrawEngine + ?Sized,
{
    let mean = SimulationError::require_positive("mean", mean)?;
    let rate = 1.0 / mean;
    Ok(move |rng: &mut R, n: usize| sample_exponential(rate, n, rng))
}
