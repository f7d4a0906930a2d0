//! Bicubic sampling
//!
//! Produces one output pixel from a fractional `(x, y)` location in a
//! source image. With `i = floor(x)` and `j = floor(y)`, the 4x4
//! neighbourhood of columns `i-1..=i+2` and rows `j-1..=j+2` is gathered,
//! replicating edge pixels for indices outside the grid. Each of the four
//! rows is first interpolated horizontally at `x - i`, then the four
//! results are interpolated vertically at `y - j`.

use crate::cubic::CubicKernel;
use crate::{TransformError, TransformResult};
use ppmscale_core::{Image, Pixel};
use tracing::trace;

/// Look up `(col, row)` with both indices clamped into the grid.
#[inline]
fn clamped_pixel(image: &Image, col: i64, row: i64) -> Pixel {
    let c = col.clamp(0, i64::from(image.width()) - 1) as u32;
    let r = row.clamp(0, i64::from(image.height()) - 1) as u32;
    image.get_pixel_unchecked(c, r)
}

/// Sample `image` at `(x, y)` with the Catmull-Rom kernel.
///
/// # Errors
///
/// Returns [`TransformError::InvalidArgument`] if `x` or `y` is negative,
/// not finite, or not less than the image width / height.
pub fn bicubic_sample(image: &Image, x: f64, y: f64) -> TransformResult<Pixel> {
    bicubic_sample_with(image, x, y, &CubicKernel::CATMULL_ROM)
}

/// Sample `image` at `(x, y)` with an explicit kernel.
///
/// The same kernel is used for the horizontal and the vertical pass.
pub fn bicubic_sample_with(
    image: &Image,
    x: f64,
    y: f64,
    kernel: &CubicKernel,
) -> TransformResult<Pixel> {
    check_coordinates(image, x, y)?;
    trace!(x, y, a = kernel.a, "bicubic sample");
    Ok(sample_unchecked(image, x, y, kernel))
}

fn check_coordinates(image: &Image, x: f64, y: f64) -> TransformResult<()> {
    let in_range = |v: f64, extent: u32| v >= 0.0 && v < f64::from(extent);
    if !in_range(x, image.width()) || !in_range(y, image.height()) {
        return Err(TransformError::InvalidArgument(format!(
            "invalid coordinate ({}, {}) for {}x{} image",
            x,
            y,
            image.width(),
            image.height()
        )));
    }
    Ok(())
}

/// Core of the sampler; coordinates must already be validated.
pub(crate) fn sample_unchecked(image: &Image, x: f64, y: f64, kernel: &CubicKernel) -> Pixel {
    let xf = x.floor();
    let yf = y.floor();
    let (i, j) = (xf as i64, yf as i64);
    let (tx, ty) = (x - xf, y - yf);

    let rows: [Pixel; 4] = std::array::from_fn(|dj| {
        let row = j + dj as i64 - 1;
        let taps = std::array::from_fn(|di| clamped_pixel(image, i + di as i64 - 1, row));
        kernel.interpolate(tx, taps)
    });
    kernel.interpolate(ty, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> Pixel {
        Pixel::new(v, v, v)
    }

    fn two_by_two() -> Image {
        // (0,0)=10 (1,0)=20
        // (0,1)=30 (1,1)=40
        Image::from_fn(2, 2, |c, r| gray((10 + c * 10 + r * 20) as u8)).unwrap()
    }

    #[test]
    fn test_integer_positions_reproduce_source() {
        let img = two_by_two();
        for c in 0..2 {
            for r in 0..2 {
                let p = bicubic_sample(&img, f64::from(c), f64::from(r)).unwrap();
                assert_eq!(Some(p), img.get_pixel(c, r));
            }
        }
    }

    #[test]
    fn test_corner_uses_edge_replication() {
        let img = two_by_two();
        // (0,0) and (w-1,h-1) gather neighbours outside the grid
        assert_eq!(bicubic_sample(&img, 0.0, 0.0).unwrap(), gray(10));
        assert_eq!(bicubic_sample(&img, 1.0, 1.0).unwrap(), gray(40));
    }

    #[test]
    fn test_horizontal_midpoint() {
        // single row [0, 255]; columns clamp to 0,0,255,255
        let img = Image::from_fn(2, 1, |c, _| gray(if c == 0 { 0 } else { 255 })).unwrap();
        assert_eq!(bicubic_sample(&img, 0.5, 0.0).unwrap(), gray(128));
    }

    #[test]
    fn test_vertical_midpoint() {
        let img = Image::from_fn(1, 2, |_, r| gray(if r == 0 { 0 } else { 255 })).unwrap();
        assert_eq!(bicubic_sample(&img, 0.0, 0.5).unwrap(), gray(128));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let img = two_by_two();
        assert!(bicubic_sample(&img, -0.1, 0.0).is_err());
        assert!(bicubic_sample(&img, 0.0, -0.1).is_err());
        assert!(bicubic_sample(&img, 2.0, 0.0).is_err());
        assert!(bicubic_sample(&img, 0.0, 2.0).is_err());
        assert!(bicubic_sample(&img, f64::NAN, 0.0).is_err());
        assert!(bicubic_sample(&img, 1.999, 1.999).is_ok());
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let img = Image::from_fn(5, 4, |c, r| Pixel::new((c * 50) as u8, (r * 60) as u8, 99))
            .unwrap();
        let a = bicubic_sample(&img, 2.3, 1.7).unwrap();
        let b = bicubic_sample(&img, 2.3, 1.7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_kernel_used_in_both_passes() {
        let img = two_by_two();
        let k = CubicKernel::new(-0.75);
        // On a constant-step input both kernels agree at integer positions
        assert_eq!(bicubic_sample_with(&img, 1.0, 0.0, &k).unwrap(), gray(20));
    }
}
