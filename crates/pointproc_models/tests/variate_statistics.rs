//! Statistical checks for the inversion samplers.

use approx::assert_relative_eq;
use pointproc_core::rng::{DrawEngine, ProcessRng};
use pointproc_models::variates::{sample_discrete, sample_exponential, DiscreteInversion};

// ============================================================================
// Discrete Sampler Tests
// ============================================================================

#[test]
fn test_point_mass_always_selected() {
    let mut rng = ProcessRng::from_seed(42);
    let draws = sample_discrete(&[10, 20, 30], &[0.0, 1.0, 0.0], 5, &mut rng).unwrap();
    assert_eq!(draws, vec![20; 5]);
}

#[test]
fn test_weights_are_scale_invariant() {
    let mut a = ProcessRng::from_seed(5);
    let mut b = ProcessRng::from_seed(5);

    let raw = sample_discrete(&[1, 2], &[3.0, 1.0], 500, &mut a).unwrap();
    let normalised = sample_discrete(&[1, 2], &[0.75, 0.25], 500, &mut b).unwrap();
    assert_eq!(raw, normalised);
}

#[test]
fn test_empirical_frequencies() {
    let n = 100_000;
    let table = DiscreteInversion::new(vec![0usize, 1, 2], &[1.0, 2.0, 7.0]).unwrap();
    let mut rng = ProcessRng::from_seed(2718);

    let mut counts = [0usize; 3];
    for k in table.sample_n(n, &mut rng) {
        counts[k] += 1;
    }

    for (count, p) in counts.iter().zip(table.probabilities()) {
        let freq = *count as f64 / n as f64;
        assert!((freq - p).abs() < 0.01, "frequency {} vs probability {}", freq, p);
    }
}

#[test]
fn test_zero_size_draws_nothing() {
    let mut rng = ProcessRng::from_seed(9);
    let mut reference = ProcessRng::from_seed(9);

    assert!(sample_discrete(&[1, 2], &[1.0, 1.0], 0, &mut rng).unwrap().is_empty());
    assert!(sample_exponential(1.0, 0, &mut rng).unwrap().is_empty());
    assert_eq!(rng.gen_uniform(), reference.gen_uniform());
}

// ============================================================================
// Exponential Sampler Tests
// ============================================================================

#[test]
fn test_exponential_moments() {
    let n = 200_000;
    let mut rng = ProcessRng::from_seed(42);
    let draws = sample_exponential(1.0, n, &mut rng).unwrap();

    assert!(draws.iter().all(|&x| x >= 0.0));

    let mean = draws.iter().sum::<f64>() / n as f64;
    let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    assert_relative_eq!(mean, 1.0, max_relative = 0.02);
    assert_relative_eq!(var, 1.0, max_relative = 0.05);
}

#[test]
fn test_exponential_rate_scales_mean() {
    let n = 200_000;
    let mut rng = ProcessRng::from_seed(7);
    let draws = sample_exponential(4.0, n, &mut rng).unwrap();

    let mean = draws.iter().sum::<f64>() / n as f64;
    assert_relative_eq!(mean, 0.25, max_relative = 0.02);
}

#[test]
fn test_exponential_invalid_rate() {
    let mut rng = ProcessRng::from_seed(1);
    assert!(sample_exponential(0.0, 3, &mut rng).is_err());
    assert!(sample_exponential(-1.0, 3, &mut rng).is_err());
    assert!(sample_exponential(f64::NAN, 3, &mut rng).is_err());
}
