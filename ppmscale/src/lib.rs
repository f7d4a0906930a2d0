//! ppmscale - Plain-text PPM resampling for Rust
//!
//! Reads `P3` images, resamples them to an arbitrary size with bicubic
//! interpolation, and writes them back out.
//!
//! # Overview
//!
//! - Image grid and pixel types (re-exported at the crate root)
//! - P3 I/O ([`io`])
//! - Coordinate mapping, cubic interpolation, and scaling ([`transform`])
//!
//! # Example
//!
//! ```
//! use ppmscale::{io, transform};
//!
//! let src = io::read_image_mem(b"P3\n2 1\n255\n0 0 0 255 255 255\n").unwrap();
//! let dst = transform::scale_to_size(&src, 3, 2).unwrap();
//! let text = String::from_utf8(io::write_image_mem(&dst).unwrap()).unwrap();
//! assert_eq!(
//!     text,
//!     "P3\n3 2\n255\n0 0 0 128 128 128 255 255 255\n0 0 0 128 128 128 255 255 255\n"
//! );
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ppmscale_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ppmscale_io as io;
pub use ppmscale_transform as transform;
