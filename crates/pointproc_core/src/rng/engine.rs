//! The draw engine capability consumed by every simulator.

/// Source of primitive random draws.
///
/// A draw engine is a stateful generator whose state advances monotonically
/// with each draw and is never rolled back. Given a fixed initial state, the
/// sequence of draws is fully reproducible.
///
/// Implementors only need [`gen_uniform`](DrawEngine::gen_uniform) and
/// [`gen_exponential`](DrawEngine::gen_exponential); the batch operations
/// are provided in terms of `gen_uniform`.
///
/// # Concurrency
///
/// One instance must not be shared across parallel invocations. All methods
/// take `&mut self`, so sequential exclusive access is enforced at compile
/// time; workers running in parallel each need their own independently
/// seeded engine.
///
/// # Examples
///
/// ```rust
/// use pointproc_core::rng::DrawEngine;
///
/// /// A deterministic engine cycling through a fixed table of uniforms.
/// struct Table {
///     values: Vec<f64>,
///     next: usize,
/// }
///
/// impl DrawEngine for Table {
///     fn gen_uniform(&mut self) -> f64 {
///         let u = self.values[self.next % self.values.len()];
///         self.next += 1;
///         u
///     }
///
///     fn gen_exponential(&mut self, rate: f64) -> f64 {
///         -(1.0 - self.gen_uniform()).ln() / rate
///     }
/// }
///
/// let mut engine = Table { values: vec![0.25, 0.5], next: 0 };
/// assert_eq!(engine.uniforms(3), vec![0.25, 0.5, 0.25]);
/// ```
pub trait DrawEngine {
    /// Draws a single uniform value in `[0, 1)`.
    fn gen_uniform(&mut self) -> f64;

    /// Draws a single exponential value with mean `1 / rate`.
    ///
    /// `rate` must be finite and strictly positive; callers validate it
    /// before drawing. The result must be finite and `>= 0`; the simulators
    /// reject any other value with `SimulationError::InvalidDraw`.
    fn gen_exponential(&mut self, rate: f64) -> f64;

    /// Fills `buffer` with independent uniform values in `[0, 1)`.
    ///
    /// Empty buffers consume no draws.
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.gen_uniform();
        }
    }

    /// Draws `n` independent uniform values in `[0, 1)`.
    fn uniforms(&mut self, n: usize) -> Vec<f64> {
        let mut buffer = vec![0.0; n];
        self.fill_uniform(&mut buffer);
        buffer
    }
}

impl<E: DrawEngine + ?Sized> DrawEngine for &mut E {
    #[inline]
    fn gen_uniform(&mut self) -> f64 {
        (**self).gen_uniform()
    }

    #[inline]
    fn gen_exponential(&mut self, rate: f64) -> f64 {
        (**self).gen_exponential(rate)
    }

    #[inline]
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        (**self).fill_uniform(buffer)
    }
}
