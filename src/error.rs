use thiserror::Error;

/// Errors raised when an optimizer is constructed from an invalid configuration.
#[derive(Debug, Error, PartialEq)]
pub enum PsoError {
    #[error("swarm must contain at least one particle")]
    EmptySwarm,
    #[error("search bounds must satisfy min < max, got [{min}, {max}]")]
    InvalidBounds { min: f64, max: f64 },
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, PsoError>;
