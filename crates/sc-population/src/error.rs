use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PopulationError {
    #[error("population must contain at least one configuration")]
    Empty,

    #[error("generation has {got} configurations, expected {expected}")]
    SizeChanged { expected: usize, got: usize },

    #[error("configuration {index} has {got} positions, expected {expected}")]
    LengthMismatch {
        index:    usize,
        expected: usize,
        got:      usize,
    },
}

pub type PopulationResult<T> = Result<T, PopulationError>;
