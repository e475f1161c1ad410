//! Non-homogeneous point process by thinning.
//!
//! A process with intensity `lambda(t) <= lambda_max` on `[0, T]` is sampled
//! by drawing candidates from a homogeneous process of rate `lambda_max` and
//! keeping each candidate `t` independently with probability
//! `lambda(t) / lambda_max`. The kept subsequence has exactly the law of the
//! target process provided the envelope bound holds everywhere.
//!
//! # Lazy precondition checks
//!
//! Non-negativity and the envelope bound are checked only at candidate times
//! that were actually drawn. A violation between sampled candidates is not
//! detected; the bound is never clipped on the caller's behalf.

use pointproc_core::rng::DrawEngine;
use pointproc_core::types::{ArrivalSequence, SimulationError, SimulationResult};
use tracing::{debug, trace};

use super::homogeneous::simulate_homogeneous;

/// Default tolerance on `lambda(t) <= rate_bound` absorbing round-off.
pub use pointproc_core::config::DEFAULT_ENVELOPE_TOLERANCE as ENVELOPE_TOLERANCE;

/// A time-varying intensity `t -> lambda(t)`.
///
/// Implemented for every `Fn(f64) -> f64`, so closures and function
/// pointers can be passed directly.
///
/// # Examples
///
/// ```rust
/// use pointproc_models::processes::RateFunction;
///
/// let seasonal = |t: f64| 2.0 + 3.0 * (std::f64::consts::PI * t / 10.0).sin().powi(2);
/// assert_eq!(seasonal.rate(0.0), 2.0);
/// ```
pub trait RateFunction {
    /// Intensity at time `t`.
    fn rate(&self, t: f64) -> f64;
}

impl<F: Fn(f64) -> f64> RateFunction for F {
    #[inline]
    fn rate(&self, t: f64) -> f64 {
        self(t)
    }
}

/// Simulates a point process with intensity `rate_fn` on `[0, horizon]`.
///
/// `rate_bound` is the caller-asserted envelope: `rate_fn(t) <= rate_bound`
/// for every `t` in `[0, horizon]`. Uses the default
/// [`ENVELOPE_TOLERANCE`].
///
/// # Errors
///
/// - `InvalidParameter` if `horizon` or `rate_bound` is not finite and
///   strictly positive (before any draw).
/// - `InvalidRate` if `rate_fn` is negative at a sampled candidate.
/// - `EnvelopeViolation` if `rate_fn` exceeds `rate_bound` at a sampled
///   candidate.
///
/// # Examples
///
/// ```rust
/// use pointproc_core::rng::ProcessRng;
/// use pointproc_models::processes::simulate_nonhomogeneous;
///
/// let horizon = 10.0;
/// let rate = |t: f64| 2.0 + 3.0 * (std::f64::consts::PI * t / horizon).sin().powi(2);
///
/// let mut rng = ProcessRng::from_seed(42);
/// let arrivals = simulate_nonhomogeneous(rate, horizon, 5.0, &mut rng).unwrap();
/// assert!(arrivals.iter().all(|&t| t > 0.0 && t <= horizon));
/// ```
pub fn simulate_nonhomogeneous<F, R>(
    rate_fn: F,
    horizon: f64,
    rate_bound: f64,
    rng: &mut R,
) -> SimulationResult<ArrivalSequence>
where
    F: RateFunction,
    R: DrawEngine + ?Sized,
{
    simulate_nonhomogeneous_with_tolerance(rate_fn, horizon, rate_bound, ENVELOPE_TOLERANCE, rng)
}

/// [`simulate_nonhomogeneous`] with an explicit envelope tolerance.
///
/// # Errors
///
/// As [`simulate_nonhomogeneous`], plus `InvalidParameter` if `tolerance`
/// is negative or not finite.
pub fn simulate_nonhomogeneous_with_tolerance<F, R>(
    rate_fn: F,
    horizon: f64,
    rate_bound: f64,
    tolerance: f64,
    rng: &mut R,
) -> SimulationResult<ArrivalSequence>
where
    F: RateFunction,
    R: DrawEngine + ?Sized,
{
    SimulationError::require_positive("horizon", horizon)?;
    let rate_bound = SimulationError::require_positive("rate_bound", rate_bound)?;
    validate_tolerance(tolerance)?;

    let candidates = simulate_homogeneous(rate_bound, horizon, rng)?;
    thin(&candidates, rate_fn, rate_bound, tolerance, rng)
}

/// Thins a candidate sequence drawn at rate `rate_bound`.
///
/// Each candidate `t`, in order, is validated against `rate_fn` and then
/// kept iff a fresh uniform `u` satisfies `u <= rate_fn(t) / rate_bound`.
/// Exactly one uniform is drawn per candidate; the output is a
/// subsequence of `candidates` in the same order.
///
/// # Errors
///
/// - `InvalidParameter` for a non-positive `rate_bound` or a negative
///   `tolerance`.
/// - `InvalidRate` / `EnvelopeViolation` at the first offending candidate.
///   Nothing accepted before the failure is returned.
///
/// # Examples
///
/// ```rust
/// use pointproc_core::rng::ProcessRng;
/// use pointproc_core::types::ArrivalSequence;
/// use pointproc_models::processes::{thin, ENVELOPE_TOLERANCE};
///
/// let candidates = ArrivalSequence::new(vec![0.5, 1.5, 2.5], 3.0).unwrap();
/// let mut rng = ProcessRng::from_seed(1);
///
/// // A rate equal to the bound keeps every candidate.
/// let kept = thin(&candidates, |_t: f64| 4.0, 4.0, ENVELOPE_TOLERANCE, &mut rng).unwrap();
/// assert_eq!(kept, candidates);
/// ```
pub fn thin<F, R>(
    candidates: &ArrivalSequence,
    rate_fn: F,
    rate_bound: f64,
    tolerance: f64,
    rng: &mut R,
) -> SimulationResult<ArrivalSequence>
where
    F: RateFunction,
    R: DrawEngine + ?Sized,
{
    let rate_bound = SimulationError::require_positive("rate_bound", rate_bound)?;
    validate_tolerance(tolerance)?;

    let mut accepted = Vec::with_capacity(candidates.len());
    for &t in candidates {
        let rate = rate_fn.rate(t);

        if rate.is_nan() || rate < 0.0 {
            return Err(SimulationError::InvalidRate { time: t, rate });
        }
        if rate > rate_bound + tolerance {
            return Err(SimulationError::EnvelopeViolation {
                time: t,
                rate,
                bound: rate_bound,
            });
        }

        let acceptance = rate / rate_bound;
        let u = rng.gen_uniform();
        let keep = u <= acceptance;
        trace!(time = t, rate, acceptance, u, keep, "thinning decision");
        if keep {
            accepted.push(t);
        }
    }

    debug!(
        rate_bound,
        candidates = candidates.len(),
        accepted = accepted.len(),
        "thinned candidate process"
    );
    ArrivalSequence::new(accepted, candidates.horizon())
}

fn validate_tolerance(tolerance: f64) -> SimulationResult<()> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::invalid_parameter(
            "tolerance",
            format!("must be finite and >= 0, got {}", tolerance),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointproc_core::rng::ProcessRng;

    /// Engine replaying fixed uniforms and counting draws.
    struct ScriptedUniforms {
        uniforms: Vec<f64>,
        drawn: usize,
    }

    impl DrawEngine for ScriptedUniforms {
        fn gen_uniform(&mut self) -> f64 {
            let u = self.uniforms[self.drawn];
            self.drawn += 1;
            u
        }

        fn gen_exponential(&mut self, _rate: f64) -> f64 {
            unreachable!("thinning draws uniforms only")
        }
    }

    fn candidates() -> ArrivalSequence {
        ArrivalSequence::new(vec![1.0, 2.0, 3.0, 4.0], 5.0).unwrap()
    }

    #[test]
    fn test_acceptance_rule() {
        // lambda(t) = t, bound 4: acceptance probabilities 0.25, 0.5, 0.75, 1.0.
        let mut rng = ScriptedUniforms {
            uniforms: vec![0.25, 0.9, 0.1, 0.999],
            drawn: 0,
        };

        let kept = thin(&candidates(), |t: f64| t, 4.0, ENVELOPE_TOLERANCE, &mut rng).unwrap();

        // u == acceptance is kept (u <= p).
        assert_eq!(kept.times(), &[1.0, 3.0, 4.0]);
        assert_eq!(kept.horizon(), 5.0);
        assert_eq!(rng.drawn, 4);
    }

    #[test]
    fn test_zero_rate_rejects_everything() {
        let mut rng = ProcessRng::from_seed(3);
        let kept = thin(&candidates(), |_t: f64| 0.0, 2.0, ENVELOPE_TOLERANCE, &mut rng).unwrap();
        // u in [0, 1) can equal 0.0 only with negligible probability.
        assert!(kept.len() <= 1);
    }

    #[test]
    fn test_negative_rate_fails_at_first_sampled_time() {
        let mut rng = ScriptedUniforms {
            uniforms: vec![0.0; 4],
            drawn: 0,
        };

        let err = thin(
            &candidates(),
            |t: f64| if t > 2.5 { -1.0 } else { 1.0 },
            2.0,
            ENVELOPE_TOLERANCE,
            &mut rng,
        )
        .unwrap_err();

        assert_eq!(err, SimulationError::InvalidRate { time: 3.0, rate: -1.0 });
        // Draws were made for the two candidates before the failure only.
        assert_eq!(rng.drawn, 2);
    }

    #[test]
    fn test_nan_rate_is_invalid() {
        let mut rng = ProcessRng::from_seed(3);
        let err = thin(&candidates(), |_t: f64| f64::NAN, 2.0, ENVELOPE_TOLERANCE, &mut rng)
            .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidRate { time, .. } if time == 1.0));
    }

    #[test]
    fn test_envelope_violation_reports_time_and_value() {
        let mut rng = ProcessRng::from_seed(3);
        let err = thin(&candidates(), |t: f64| t, 3.0, ENVELOPE_TOLERANCE, &mut rng).unwrap_err();

        assert_eq!(
            err,
            SimulationError::EnvelopeViolation {
                time: 4.0,
                rate: 4.0,
                bound: 3.0
            }
        );
    }

    #[test]
    fn test_tolerance_absorbs_round_off() {
        let mut rng = ProcessRng::from_seed(3);
        let slightly_above = 2.0 + 1e-10;
        let kept = thin(
            &candidates(),
            move |_t: f64| slightly_above,
            2.0,
            ENVELOPE_TOLERANCE,
            &mut rng,
        )
        .unwrap();
        assert_eq!(kept, candidates());

        let mut strict = ProcessRng::from_seed(3);
        assert!(thin(&candidates(), move |_t: f64| slightly_above, 2.0, 0.0, &mut strict).is_err());
    }

    #[test]
    fn test_malformed_candidates_never_reach_thinning() {
        assert!(ArrivalSequence::new(vec![3.0, 1.0], 5.0).is_err());
        assert!(ArrivalSequence::new(vec![3.0, 1.0, -2.0, 9.0], 2.0).is_err());

        // Any candidate sequence that can be built thins to a valid one.
        let mut rng = ProcessRng::from_seed(3);
        let kept = thin(&candidates(), |_t: f64| 1.0, 1.0, ENVELOPE_TOLERANCE, &mut rng).unwrap();
        assert_eq!(kept, candidates());
    }

    #[test]
    fn test_default_tolerance_matches_config_default() {
        use pointproc_core::config::SimulationConfig;

        let config = SimulationConfig::builder().horizon(1.0).build().unwrap();
        assert_eq!(config.envelope_tolerance(), ENVELOPE_TOLERANCE);
    }

    #[test]
    fn test_lazy_check_misses_unsampled_violation() {
        // The spike sits between candidates, so it is never evaluated.
        let spike = |t: f64| if (2.4..2.6).contains(&t) { 100.0 } else { 1.0 };
        let mut rng = ProcessRng::from_seed(9);
        assert!(thin(&candidates(), spike, 1.0, ENVELOPE_TOLERANCE, &mut rng).is_ok());
    }

    #[test]
    fn test_invalid_parameters_before_drawing() {
        let mut rng = ProcessRng::from_seed(1);
        let mut reference = ProcessRng::from_seed(1);

        for (horizon, bound, name) in [
            (0.0, 1.0, "horizon"),
            (-1.0, 1.0, "horizon"),
            (1.0, 0.0, "rate_bound"),
            (1.0, -3.0, "rate_bound"),
        ] {
            match simulate_nonhomogeneous(|_t: f64| 0.5, horizon, bound, &mut rng) {
                Err(SimulationError::InvalidParameter { name: got, .. }) => assert_eq!(got, name),
                other => panic!("Expected InvalidParameter, got {:?}", other),
            }
        }
        assert!(matches!(
            simulate_nonhomogeneous_with_tolerance(|_t: f64| 0.5, 1.0, 1.0, -1.0, &mut rng),
            Err(SimulationError::InvalidParameter { name: "tolerance", .. })
        ));

        assert_eq!(rng.gen_uniform(), reference.gen_uniform());
    }

    #[test]
    fn test_candidates_drawn_before_acceptance_uniforms() {
        let rate = |t: f64| 1.0 + t.sin().abs();
        let mut rng = ProcessRng::from_seed(2718);
        let mut reference = ProcessRng::from_seed(2718);

        let kept = simulate_nonhomogeneous(rate, 6.0, 2.0, &mut rng).unwrap();

        let candidates = simulate_homogeneous(2.0, 6.0, &mut reference).unwrap();
        let expected = thin(&candidates, rate, 2.0, ENVELOPE_TOLERANCE, &mut reference).unwrap();

        assert_eq!(kept, expected);
        assert_eq!(rng.gen_uniform(), reference.gen_uniform());
    }
}
