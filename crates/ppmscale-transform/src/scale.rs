//! Image scaling
//!
//! Resamples an image to an arbitrary target size. For every target pixel
//! `(i, j)` the source location is
//! `(map_coordinate(w, tw, i), map_coordinate(h, th, j))` and the output is
//! the bicubic sample there. Output pixels depend only on the source image
//! and their own position.
//!
//! All arguments are validated before the target grid is allocated, so a
//! failing call never produces a partial image.

use crate::bicubic::sample_unchecked;
use crate::cubic::CubicKernel;
use crate::mapping::map_coordinate;
use crate::{TransformError, TransformResult};
use ppmscale_core::{Image, MAX_HEIGHT, MAX_WIDTH};
use tracing::{debug, trace};

/// Options for [`scale_to_size_with`] and [`scale_with`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaleOptions {
    /// Cubic kernel for both interpolation passes
    pub kernel: CubicKernel,
}

impl ScaleOptions {
    /// Create options with a specific kernel
    pub fn with_kernel(kernel: CubicKernel) -> Self {
        Self { kernel }
    }
}

/// Scale an image to a specific size with the Catmull-Rom kernel.
///
/// # Arguments
/// * `image` - Source image (not modified)
/// * `width` - Target width, in `2..=MAX_WIDTH`
/// * `height` - Target height, in `2..=MAX_HEIGHT`
///
/// # Errors
///
/// Returns [`TransformError::InvalidArgument`] if a target extent is zero,
/// exceeds the maximum, or is 1 (a single sample cannot be mapped).
///
/// # Examples
///
/// ```
/// use ppmscale_core::{Image, Pixel};
/// use ppmscale_transform::scale_to_size;
///
/// let src = Image::new_filled(4, 4, Pixel::new(1, 2, 3)).unwrap();
/// let dst = scale_to_size(&src, 9, 6).unwrap();
/// assert_eq!((dst.width(), dst.height()), (9, 6));
/// assert!(dst.pixels().iter().all(|&p| p == Pixel::new(1, 2, 3)));
/// ```
pub fn scale_to_size(image: &Image, width: u32, height: u32) -> TransformResult<Image> {
    scale_to_size_with(image, width, height, &ScaleOptions::default())
}

/// Scale an image to a specific size with explicit options.
pub fn scale_to_size_with(
    image: &Image,
    width: u32,
    height: u32,
    options: &ScaleOptions,
) -> TransformResult<Image> {
    if width == 0 || height == 0 || width > MAX_WIDTH || height > MAX_HEIGHT {
        return Err(TransformError::InvalidArgument(format!(
            "invalid dimension: {}x{}",
            width, height
        )));
    }
    if width < 2 || height < 2 {
        return Err(TransformError::InvalidArgument(format!(
            "target {}x{} too small to map coordinates",
            width, height
        )));
    }

    let (sw, sh) = (image.width(), image.height());
    debug!(
        src_width = sw,
        src_height = sh,
        width,
        height,
        "bicubic scale"
    );
    trace!(a = options.kernel.a, "cubic kernel");

    let xs = (0..width)
        .map(|i| map_coordinate(sw, width, i))
        .collect::<TransformResult<Vec<f64>>>()?;
    let ys = (0..height)
        .map(|j| map_coordinate(sh, height, j))
        .collect::<TransformResult<Vec<f64>>>()?;

    let kernel = &options.kernel;
    let out = Image::from_fn(width, height, |i, j| {
        sample_unchecked(image, xs[i as usize], ys[j as usize], kernel)
    })?;
    Ok(out)
}

/// Scale an image by the given factors with the Catmull-Rom kernel.
///
/// The target size is `round(width * scale_x) x round(height * scale_y)`
/// and is then validated as in [`scale_to_size`].
///
/// # Arguments
/// * `image` - Source image
/// * `scale_x` - Horizontal scale factor (e.g., 2.0 = double width)
/// * `scale_y` - Vertical scale factor
pub fn scale(image: &Image, scale_x: f32, scale_y: f32) -> TransformResult<Image> {
    scale_with(image, scale_x, scale_y, &ScaleOptions::default())
}

/// Scale an image by the given factors with explicit options.
pub fn scale_with(
    image: &Image,
    scale_x: f32,
    scale_y: f32,
    options: &ScaleOptions,
) -> TransformResult<Image> {
    let valid = |s: f32| s.is_finite() && s > 0.0;
    if !valid(scale_x) || !valid(scale_y) {
        return Err(TransformError::InvalidArgument(format!(
            "invalid scale factor: {} x {}",
            scale_x, scale_y
        )));
    }
    let target = |extent: u32, s: f32| -> u32 {
        let t = (f64::from(extent) * f64::from(s)).round();
        // Anything past u32 is rejected by the max check anyway
        t.min(f64::from(u32::MAX)) as u32
    };
    scale_to_size_with(
        image,
        target(image.width(), scale_x),
        target(image.height(), scale_y),
        options,
    )
}
