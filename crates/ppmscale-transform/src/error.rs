//! Error types for ppmscale-transform

use ppmscale_core::ErrorKind;
use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ppmscale_core::Error),

    /// Invalid extent, coordinate, or scale parameter
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl TransformError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::Core(e) => e.kind(),
            TransformError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
