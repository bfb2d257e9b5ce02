//! Error types for Vectra

use thiserror::Error;

/// The main error type for Vectra operations
#[derive(Debug, Error)]
pub enum VectraError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Dimension error: {0}")]
    DimensionError(String),

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Degenerate vector: cannot be normalized because length is 0")]
    DegenerateVector,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result type alias for Vectra operations
pub type Result<T> = std::result::Result<T, VectraError>;
