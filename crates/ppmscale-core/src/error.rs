//! Error types for ppmscale-core
//!
//! Provides a unified error type for the pixel and image grid types.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! Every error in the workspace reports an [`ErrorKind`] so callers can tell
//! malformed input apart from bad arguments without matching on variants.

use thiserror::Error;

/// Broad classification shared by every error type in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed, truncated, or out-of-range input data
    Format,
    /// Invalid function parameters (empty image, bad dimensions,
    /// out-of-range coordinates, invalid sink)
    InvalidArgument,
    /// Failure reported by the underlying byte stream
    Io,
}

/// ppmscale-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinates outside the grid
    #[error("pixel ({col}, {row}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        col: u32,
        row: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
