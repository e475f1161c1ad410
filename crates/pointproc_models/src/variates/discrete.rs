//! Discrete variates by inversion of the cumulative distribution.
//!
//! Given values `x_1..x_n` with weights `w_1..w_n`, the weights are
//! normalised to probabilities `p_i = w_i / sum(w)`, accumulated into
//! `F_i = p_1 + ... + p_i`, and each uniform `u` is mapped to `x_k` with
//! `k` the smallest index such that `F_k >= u`.

use pointproc_core::rng::DrawEngine;
use pointproc_core::types::{SimulationError, SimulationResult};

/// A validated probability mass table ready for inversion sampling.
///
/// Building the table once and sampling from it repeatedly avoids
/// re-normalising the weights on every call.
///
/// # Examples
///
/// ```rust
/// use pointproc_core::rng::ProcessRng;
/// use pointproc_models::variates::DiscreteInversion;
///
/// let table = DiscreteInversion::new(vec!['a', 'b', 'c'], &[1.0, 2.0, 1.0]).unwrap();
/// assert_eq!(table.probabilities(), vec![0.25, 0.5, 0.25]);
///
/// let mut rng = ProcessRng::from_seed(3);
/// let draws = table.sample_n(10, &mut rng);
/// assert_eq!(draws.len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct DiscreteInversion<T> {
    values: Vec<T>,
    cumulative: Vec<f64>,
}

impl<T: Clone> DiscreteInversion<T> {
    /// Validates and normalises a probability mass table.
    ///
    /// Weights need not sum to one.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` if the table is empty,
    /// the lengths differ, a weight is negative or not finite, or all weights
    /// are zero.
    pub fn new(values: Vec<T>, weights: &[f64]) -> SimulationResult<Self> {
        if values.is_empty() {
            return Err(SimulationError::invalid_parameter(
                "values",
                "must contain at least one value",
            ));
        }
        if values.len() != weights.len() {
            return Err(SimulationError::invalid_parameter(
                "weights",
                format!(
                    "expected {} weights to match the values, got {}",
                    values.len(),
                    weights.len()
                ),
            ));
        }
        if let Some((i, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(SimulationError::invalid_parameter(
                "weights",
                format!("weight {} at index {} must be finite and >= 0", w, i),
            ));
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "weights",
                "total weight is zero; cannot normalise",
            ));
        }

        let cumulative = weights
            .iter()
            .scan(0.0, |acc, &w| {
                *acc += w / total;
                Some(*acc)
            })
            .collect();

        Ok(Self { values, cumulative })
    }

    /// Normalised probabilities, one per value.
    pub fn probabilities(&self) -> Vec<f64> {
        let mut previous = 0.0;
        self.cumulative
            .iter()
            .map(|&c| {
                let p = c - previous;
                previous = c;
                p
            })
            .collect()
    }

    /// The support of the table, in construction order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Maps one uniform in `[0, 1)` to its value.
    #[inline]
    fn invert(&self, u: f64) -> &T {
        let index = self.cumulative.partition_point(|&c| c < u);
        // Round-off can leave the last cumulative entry just below 1.
        &self.values[index.min(self.values.len() - 1)]
    }

    /// Draws a single value.
    pub fn sample<R: DrawEngine + ?Sized>(&self, rng: &mut R) -> T {
        self.invert(rng.gen_uniform()).clone()
    }

    /// Draws `size` i.i.d. values from one batch of `size` uniforms.
    pub fn sample_n<R: DrawEngine + ?Sized>(&self, size: usize, rng: &mut R) -> Vec<T> {
        rng.uniforms(size)
            .into_iter()
            .map(|u| self.invert(u).clone())
            .collect()
    }
}

/// Draws `size` i.i.d. values from an unnormalised probability mass table.
///
/// # Errors
///
/// Returns `SimulationError::InvalidParameter` for an empty table,
/// mismatched lengths, negative or non-finite weights, or all-zero weights.
/// No draw is consumed on error.
///
/// # Examples
///
/// ```rust
/// use pointproc_core::rng::ProcessRng;
/// use pointproc_models::variates::sample_discrete;
///
/// let mut rng = ProcessRng::from_seed(42);
/// let draws = sample_discrete(&[10, 20, 30], &[0.0, 1.0, 0.0], 5, &mut rng).unwrap();
/// assert_eq!(draws, vec![20, 20, 20, 20, 20]);
/// ```
pub fn sample_discrete<T: Clone, R: DrawEngine + ?Sized>(
    values: &[T],
    weights: &[f64],
    size: usize,
    rng: &mut R,
) -> SimulationResult<Vec<T>> {
    let table = DiscreteInversion::new(values.to_vec(), weights)?;
    Ok(table.sample_n(size, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pointproc_core::rng::ProcessRng;

    #[test]
    fn test_probabilities_are_normalised() {
        let table = DiscreteInversion::new(vec![1, 2, 3, 4], &[2.0, 2.0, 4.0, 0.0]).unwrap();
        let probs = table.probabilities();
        let expected = [0.25, 0.25, 0.5, 0.0];
        for (p, e) in probs.iter().zip(expected) {
            assert_relative_eq!(*p, e, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_invert_boundaries() {
        let table = DiscreteInversion::new(vec!["x", "y"], &[1.0, 1.0]).unwrap();
        // Smallest index whose cumulative probability is >= u.
        assert_eq!(*table.invert(0.0), "x");
        assert_eq!(*table.invert(0.5), "x");
        assert_eq!(*table.invert(0.500_000_1), "y");
        assert_eq!(*table.invert(0.999_999), "y");
    }

    #[test]
    fn test_zero_mass_value_is_skipped() {
        let table = DiscreteInversion::new(vec![1, 2], &[0.0, 1.0]).unwrap();
        assert_eq!(*table.invert(1e-12), 2);
        assert_eq!(*table.invert(0.75), 2);
    }

    #[test]
    fn test_round_off_clamps_to_last_value() {
        let weights = vec![0.1; 10];
        let table = DiscreteInversion::new((0..10).collect(), &weights).unwrap();
        // Past the final cumulative entry, whatever its rounding.
        assert_eq!(*table.invert(1.0), 9);
    }

    #[test]
    fn test_sample_matches_sample_n_stream() {
        let table = DiscreteInversion::new(vec![1, 2, 3], &[1.0, 1.0, 1.0]).unwrap();
        let mut a = ProcessRng::from_seed(8);
        let mut b = ProcessRng::from_seed(8);

        let batch = table.sample_n(20, &mut a);
        let singles: Vec<i32> = (0..20).map(|_| table.sample(&mut b)).collect();
        assert_eq!(batch, singles);
    }

    #[test]
    fn test_invalid_tables() {
        let empty: Vec<i32> = vec![];
        assert!(DiscreteInversion::new(empty, &[]).is_err());
        assert!(DiscreteInversion::new(vec![1, 2], &[1.0]).is_err());
        assert!(DiscreteInversion::new(vec![1, 2], &[1.0, -0.5]).is_err());
        assert!(DiscreteInversion::new(vec![1, 2], &[1.0, f64::NAN]).is_err());
        assert!(DiscreteInversion::new(vec![1, 2], &[1.0, f64::INFINITY]).is_err());

        match DiscreteInversion::new(vec![1, 2, 3], &[0.0, 0.0, 0.0]) {
            Err(SimulationError::InvalidParameter { name, reason }) => {
                assert_eq!(name, "weights");
                assert!(reason.contains("zero"));
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_table_consumes_no_draws() {
        let mut rng = ProcessRng::from_seed(4);
        let mut reference = ProcessRng::from_seed(4);

        assert!(sample_discrete(&[1, 2], &[0.0, 0.0], 10, &mut rng).is_err());
        assert_eq!(rng.gen_uniform(), reference.gen_uniform());
    }
}
