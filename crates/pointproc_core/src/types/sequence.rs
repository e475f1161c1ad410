//! Arrival sequences and compound paths produced by the simulators.
//!
//! Both types are immutable once built: accessors hand out slices, and the
//! only way to take ownership of the underlying buffers is to consume the
//! value.

use super::error::{SimulationError, SimulationResult};

/// Ordered event times `T_1 < T_2 < ... < T_n` of a point process on `[0, T]`.
///
/// Every time lies in `(0, horizon]`. The sequence may be empty.
///
/// # Examples
///
/// ```rust
/// use pointproc_core::types::ArrivalSequence;
///
/// let arrivals = ArrivalSequence::new(vec![0.4, 1.1, 2.7], 3.0).unwrap();
/// assert_eq!(arrivals.len(), 3);
/// assert_eq!(arrivals.count_at(1.1), 2);
/// assert_eq!(arrivals.count_at(0.1), 0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ArrivalSequence {
    times: Vec<f64>,
    horizon: f64,
}

impl ArrivalSequence {
    /// Wraps arrival times sampled on `[0, horizon]`.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` if `horizon` is not finite
    /// and strictly positive, if a time falls outside `(0, horizon]`, or if
    /// the times are not strictly increasing.
    pub fn new(times: Vec<f64>, horizon: f64) -> SimulationResult<Self> {
        let horizon = SimulationError::require_positive("horizon", horizon)?;
        if let Some(&t) = times.iter().find(|&&t| !(t > 0.0 && t <= horizon)) {
            return Err(SimulationError::invalid_parameter(
                "times",
                format!("arrival time {} lies outside (0, {}]", t, horizon),
            ));
        }
        if let Some(w) = times.windows(2).find(|w| w[0] >= w[1]) {
            return Err(SimulationError::invalid_parameter(
                "times",
                format!("must be strictly increasing, got {} then {}", w[0], w[1]),
            ));
        }
        Ok(Self { times, horizon })
    }

    /// An empty sequence on `[0, horizon]`.
    pub fn empty(horizon: f64) -> Self {
        Self {
            times: Vec::new(),
            horizon,
        }
    }

    /// The arrival times in increasing order.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The horizon `T` the sequence was sampled on.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Number of arrivals.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether no event occurred on `[0, T]`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Counting function `N(t)`: the number of arrivals at or before `t`.
    pub fn count_at(&self, t: f64) -> usize {
        self.times.partition_point(|&s| s <= t)
    }

    /// Vertices of the counting step path `t -> N(t)`.
    ///
    /// Starts at `(0, 0)`; each arrival contributes the point just before
    /// the jump and the point just after it; the path ends at `(T, n)`.
    pub fn step_points(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(2 * self.times.len() + 2);
        points.push((0.0, 0.0));
        for (k, &t) in self.times.iter().enumerate() {
            points.push((t, k as f64));
            points.push((t, (k + 1) as f64));
        }
        points.push((self.horizon, self.times.len() as f64));
        points
    }

    /// Iterates over the arrival times.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.times.iter()
    }

    /// Consumes the sequence, returning the raw times.
    pub fn into_vec(self) -> Vec<f64> {
        self.times
    }
}

impl<'a> IntoIterator for &'a ArrivalSequence {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.times.iter()
    }
}

/// A compound process sampled on `[0, T]`.
///
/// Holds the arrivals `T_k`, the marks `Y_k` attached to them, and the
/// cumulative values `X(T_k) = Y_1 + ... + Y_k`. All three have the same
/// length and are paired positionally.
///
/// # Examples
///
/// ```rust
/// use pointproc_core::types::{ArrivalSequence, CompoundPath};
///
/// let arrivals = ArrivalSequence::new(vec![1.0, 2.0, 4.0], 5.0).unwrap();
/// let path = CompoundPath::from_marks(arrivals, vec![0.5, -0.25, 2.0]).unwrap();
///
/// assert_eq!(path.values(), &[0.5, 0.25, 2.25]);
/// assert_eq!(path.value_at(3.0), 0.25);
/// assert_eq!(path.total(), 2.25);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CompoundPath {
    arrivals: ArrivalSequence,
    values: Vec<f64>,
    marks: Vec<f64>,
}

impl CompoundPath {
    /// Builds the path by accumulating `marks` over `arrivals`.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::MarkCountMismatch` unless there is exactly
    /// one mark per arrival.
    pub fn from_marks(arrivals: ArrivalSequence, marks: Vec<f64>) -> SimulationResult<Self> {
        if marks.len() != arrivals.len() {
            return Err(SimulationError::MarkCountMismatch {
                expected: arrivals.len(),
                actual: marks.len(),
            });
        }
        let values = marks
            .iter()
            .scan(0.0, |acc, &y| {
                *acc += y;
                Some(*acc)
            })
            .collect();
        Ok(Self {
            arrivals,
            values,
            marks,
        })
    }

    /// An empty path on `[0, horizon]`.
    pub fn empty(horizon: f64) -> Self {
        Self {
            arrivals: ArrivalSequence::empty(horizon),
            values: Vec::new(),
            marks: Vec::new(),
        }
    }

    /// The arrival sequence driving the path.
    #[inline]
    pub fn arrivals(&self) -> &ArrivalSequence {
        &self.arrivals
    }

    /// Cumulative values `X(T_k)` immediately after each arrival.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Marks `Y_k`, one per arrival.
    #[inline]
    pub fn marks(&self) -> &[f64] {
        &self.marks
    }

    /// Number of jumps.
    #[inline]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the path has no jumps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// `X(t)`: sum of the marks whose arrival time is at or before `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        match self.arrivals.count_at(t) {
            0 => 0.0,
            k => self.values[k - 1],
        }
    }

    /// `X(T)`, the final cumulative value.
    pub fn total(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    /// Vertices of the compound step path `t -> X(t)`.
    pub fn step_points(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(2 * self.len() + 2);
        points.push((0.0, 0.0));
        let mut level = 0.0;
        for (&t, &x) in self.arrivals.times().iter().zip(&self.values) {
            points.push((t, level));
            points.push((t, x));
            level = x;
        }
        points.push((self.arrivals.horizon(), level));
        points
    }

    /// Consumes the path, returning `(arrivals, values, marks)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.arrivals.into_vec(), self.values, self.marks)
    }
}
