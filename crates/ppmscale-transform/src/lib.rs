//! ppmscale-transform - Bicubic resampling for ppmscale
//!
//! This crate resamples an [`Image`](ppmscale_core::Image) to an arbitrary
//! target size:
//!
//! - Coordinate mapping from target index to source position
//! - One-dimensional cubic convolution (Catmull-Rom by default)
//! - Bicubic sampling with edge replication at the borders
//! - Scaling to a target size or by scale factors
//!
//! All operations are synchronous and read the source image only.

pub mod bicubic;
pub mod cubic;
mod error;
pub mod mapping;
pub mod scale;

pub use bicubic::{bicubic_sample, bicubic_sample_with};
pub use cubic::{CubicKernel, clamp_channel, cubic_interpolate};
pub use error::{TransformError, TransformResult};
pub use mapping::map_coordinate;
pub use scale::{ScaleOptions, scale, scale_to_size, scale_to_size_with, scale_with};
