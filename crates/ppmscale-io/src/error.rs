//! I/O error types
//!
//! Provides a unified error type for all image I/O operations so that
//! callers only need to handle one error type. Decoding problems are
//! reported as [`IoError::Format`]; bad caller input (empty path,
//! unwritable sink) as [`IoError::InvalidArgument`].

use ppmscale_core::ErrorKind;
use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed, truncated, or out-of-range image data
    #[error("format error: {0}")]
    Format(String),

    /// Invalid argument (empty path, sink that cannot be opened)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] ppmscale_core::Error),
}

impl IoError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IoError::Io(_) => ErrorKind::Io,
            IoError::Format(_) => ErrorKind::Format,
            IoError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            IoError::Core(e) => e.kind(),
        }
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
