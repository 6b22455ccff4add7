//! Configuration error type.
//!
//! Every rule enforced by [`SwarmConfig::validate`][crate::SwarmConfig::validate]
//! has its own variant so callers (and the service layer in front of the
//! engine) can report a precise reason without parsing strings.

use thiserror::Error;

/// A run configuration was rejected before any iteration started.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("service area side must be finite and > 0 (got {0})")]
    AreaSide(f64),

    #[error("coverage radius must be finite and > 0 (got {0})")]
    CoverageRadius(f64),

    #[error("fitness weights must be >= 0 (got coverage={coverage}, efficiency={efficiency})")]
    NegativeWeight { coverage: f64, efficiency: f64 },

    #[error("fitness weights must sum to 1 (got {0})")]
    WeightSum(f64),

    #[error("{name} must be finite and >= 0 (got {value})")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must lie in [0, 1] (got {value})")]
    OutsideUnit { name: &'static str, value: f64 },

    #[error("dispersive population size must be at least 1")]
    EmptyPopulation,
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
