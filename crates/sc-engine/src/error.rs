use sc_core::ConfigError;
use sc_population::PopulationError;
use thiserror::Error;

/// Reasons a run is refused.  All are detected before the first iteration;
/// stepping itself cannot fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("at least one drone is required")]
    NoAgents,

    #[error("at least one user is required")]
    NoTargets,

    #[error("{what} {index} is not a finite point inside the service area")]
    OutOfBounds {
        what:  &'static str,
        index: usize,
    },

    #[error("invalid population: {0}")]
    Population(#[from] PopulationError),
}

pub type EngineResult<T> = Result<T, EngineError>;
