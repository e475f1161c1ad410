//! Simulation configuration.
//!
//! This module provides [`SimulationConfig`], the immutable set of settings
//! shared by a batch of simulation calls: the horizon, the optional engine
//! seed and the envelope tolerance used by thinning. Configurations are built
//! with [`SimulationConfigBuilder`] or loaded from TOML.
//!
//! ```toml
//! horizon = 10.0
//! seed = 42
//! envelope_tolerance = 1e-8
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::rng::ProcessRng;
use crate::types::{SimulationError, SimulationResult};

/// Default numerical tolerance on the envelope check during thinning.
pub const DEFAULT_ENVELOPE_TOLERANCE: f64 = 1e-8;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document parsed but holds invalid values.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] SimulationError),
}

/// Simulation configuration.
///
/// Immutable configuration specifying simulation settings.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pointproc_core::config::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .horizon(10.0)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.horizon(), 10.0);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawSimulationConfig")]
pub struct SimulationConfig {
    /// Simulation horizon `T`.
    horizon: f64,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Tolerance on `lambda(t) <= rate_bound` during thinning.
    envelope_tolerance: f64,
}

/// Serde mirror of [`SimulationConfig`] before validation.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSimulationConfig {
    horizon: f64,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default = "default_envelope_tolerance")]
    envelope_tolerance: f64,
}

fn default_envelope_tolerance() -> f64 {
    DEFAULT_ENVELOPE_TOLERANCE
}

impl TryFrom<RawSimulationConfig> for SimulationConfig {
    type Error = SimulationError;

    fn try_from(raw: RawSimulationConfig) -> Result<Self, Self::Error> {
        let config = SimulationConfig {
            horizon: raw.horizon,
            seed: raw.seed,
            envelope_tolerance: raw.envelope_tolerance,
        };
        config.validate()?;
        Ok(config)
    }
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Parses and validates a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or missing/unknown
    /// keys, and [`ConfigError::Invalid`] for out-of-range values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointproc_core::config::SimulationConfig;
    ///
    /// let config = SimulationConfig::from_toml_str("horizon = 5.0\nseed = 7").unwrap();
    /// assert_eq!(config.horizon(), 5.0);
    /// assert_eq!(config.seed(), Some(7));
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawSimulationConfig = toml::from_str(source)?;
        Ok(SimulationConfig::try_from(raw)?)
    }

    /// Returns the simulation horizon `T`.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the thinning envelope tolerance.
    #[inline]
    pub fn envelope_tolerance(&self) -> f64 {
        self.envelope_tolerance
    }

    /// Creates the draw engine this configuration describes.
    ///
    /// Seeded configurations always yield the same engine state; without a
    /// seed a fresh entropy-seeded engine is built.
    pub fn make_rng(&self) -> ProcessRng {
        match self.seed {
            Some(seed) => ProcessRng::from_seed(seed),
            None => ProcessRng::from_entropy(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` if:
    /// - `horizon` is not finite or not strictly positive
    /// - `envelope_tolerance` is not finite or negative
    pub fn validate(&self) -> SimulationResult<()> {
        SimulationError::require_positive("horizon", self.horizon)?;
        if !self.envelope_tolerance.is_finite() || self.envelope_tolerance < 0.0 {
            return Err(SimulationError::invalid_parameter(
                "envelope_tolerance",
                format!("must be finite and >= 0, got {}", self.envelope_tolerance),
            ));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Provides a fluent API for constructing configurations with validation at
/// build time.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    horizon: Option<f64>,
    seed: Option<u64>,
    envelope_tolerance: Option<f64>,
}

impl SimulationConfigBuilder {
    /// Sets the simulation horizon `T` (required, `> 0`).
    #[inline]
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the thinning envelope tolerance (defaults to `1e-8`).
    #[inline]
    pub fn envelope_tolerance(mut self, tolerance: f64) -> Self {
        self.envelope_tolerance = Some(tolerance);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` if the horizon is missing
    /// or any value is out of range.
    pub fn build(self) -> SimulationResult<SimulationConfig> {
        let horizon = self
            .horizon
            .ok_or_else(|| SimulationError::invalid_parameter("horizon", "must be specified"))?;

        let config = SimulationConfig {
            horizon,
            seed: self.seed,
            envelope_tolerance: self
                .envelope_tolerance
                .unwrap_or(DEFAULT_ENVELOPE_TOLERANCE),
        };
        config.validate()?;
        Ok(config)
    }
}
