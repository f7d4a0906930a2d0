//! ppmscale Core - Basic data structures for image resampling
//!
//! This crate provides the fundamental data structures used throughout
//! the ppmscale workspace:
//!
//! - [`Pixel`] - A three-channel 8-bit color sample
//! - [`Image`] / [`ImageMut`] - The rectangular pixel grid (immutable / mutable)
//! - [`Error`] / [`ErrorKind`] - Error type and the workspace-wide classification

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, ErrorKind, Result};
pub use image::{Image, ImageMut, MAX_HEIGHT, MAX_WIDTH, check_dimensions};
pub use pixel::Pixel;
