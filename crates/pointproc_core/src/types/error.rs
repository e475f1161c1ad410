//! Error types for structured error handling.
//!
//! This module provides:
//! - `SimulationError`: Errors from process simulation and variate generation
//! - `SimulationResult`: Result alias used throughout the workspace

use thiserror::Error;

/// Categorised simulation errors.
///
/// Every failure is fatal to the call that raised it: no partial sequence is
/// returned, and nothing is retried or clipped on the caller's behalf.
///
/// # Variants
/// - `InvalidParameter`: Scalar precondition violated before any draw
/// - `InvalidRate`: Rate function returned a negative value at a sampled time
/// - `EnvelopeViolation`: Rate function exceeded its declared upper bound
/// - `MarkCountMismatch`: Mark sampler broke its batching contract
/// - `InvalidDraw`: Draw engine returned a value outside its contract
///
/// # Examples
/// ```
/// use pointproc_core::types::SimulationError;
///
/// let err = SimulationError::invalid_parameter("rate", "must be > 0, got 0");
/// assert_eq!(format!("{}", err), "Invalid parameter 'rate': must be > 0, got 0");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// A structural precondition on the inputs was violated.
    ///
    /// Detected eagerly, before the draw engine is touched.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        reason: String,
    },

    /// The rate function returned a negative (or NaN) value at a sampled time.
    #[error("Invalid rate: lambda({time}) = {rate} must be non-negative")]
    InvalidRate {
        /// Candidate time at which the rate was evaluated
        time: f64,
        /// The offending rate value
        rate: f64,
    },

    /// The rate function exceeded its declared envelope at a sampled time.
    #[error("Envelope violation: lambda({time}) = {rate} exceeds rate bound {bound}; choose a larger bound")]
    EnvelopeViolation {
        /// Candidate time at which the rate was evaluated
        time: f64,
        /// The offending rate value
        rate: f64,
        /// The declared upper bound
        bound: f64,
    },

    /// A mark sampler returned a different number of marks than requested.
    #[error("Mark sampler returned {actual} marks, expected {expected}")]
    MarkCountMismatch {
        /// Number of marks requested
        expected: usize,
        /// Number of marks returned
        actual: usize,
    },

    /// The draw engine returned a negative or non-finite exponential gap.
    #[error("Invalid draw: exponential gap {value} must be finite and >= 0")]
    InvalidDraw {
        /// The offending gap
        value: f64,
    },
}

impl SimulationError {
    /// Shorthand for [`SimulationError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Checks that `value` is finite and strictly positive.
    ///
    /// # Examples
    /// ```
    /// use pointproc_core::types::SimulationError;
    ///
    /// assert!(SimulationError::require_positive("horizon", 5.0).is_ok());
    /// assert!(SimulationError::require_positive("horizon", 0.0).is_err());
    /// assert!(SimulationError::require_positive("horizon", f64::NAN).is_err());
    /// ```
    pub fn require_positive(name: &'static str, value: f64) -> SimulationResult<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::invalid_parameter(
                name,
                format!("must be finite and > 0, got {}", value),
            ))
        }
    }
}

/// Result alias for simulation operations.
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SimulationError::invalid_parameter("horizon", "must be finite and > 0, got -1");
        assert_eq!(
            format!("{}", err),
            "Invalid parameter 'horizon': must be finite and > 0, got -1"
        );
    }

    #[test]
    fn test_invalid_rate_display() {
        let err = SimulationError::InvalidRate {
            time: 1.5,
            rate: -0.25,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid rate: lambda(1.5) = -0.25 must be non-negative"
        );
    }

    #[test]
    fn test_envelope_violation_names_time_and_value() {
        let err = SimulationError::EnvelopeViolation {
            time: 2.0,
            rate: 7.5,
            bound: 5.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("lambda(2) = 7.5"));
        assert!(msg.contains("rate bound 5"));
    }

    #[test]
    fn test_mark_count_mismatch_display() {
        let err = SimulationError::MarkCountMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(format!("{}", err), "Mark sampler returned 3 marks, expected 4");
    }

    #[test]
    fn test_invalid_draw_display() {
        let err = SimulationError::InvalidDraw { value: -1.0 };
        assert_eq!(
            format!("{}", err),
            "Invalid draw: exponential gap -1 must be finite and >= 0"
        );
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(SimulationError::require_positive("rate", 2.0), Ok(2.0));

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            match SimulationError::require_positive("rate", bad) {
                Err(SimulationError::InvalidParameter { name, .. }) => assert_eq!(name, "rate"),
                other => panic!("Expected InvalidParameter for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SimulationError::invalid_parameter("rate", "zero");
        let _: &dyn std::error::Error = &err;
    }
}
