//! Image - the rectangular pixel grid
//!
//! An `Image` is a `width x height` grid of [`Pixel`] addressed by
//! `(col, row)`.
//!
//! # Pixel layout
//!
//! - Pixels live in one flat buffer of `width * height` entries
//! - The column is the outer dimension: `index = col * height + row`
//! - Every column therefore has exactly `height` rows, so jagged grids
//!   cannot be represented
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning of read-only data.
//! To modify pixels, convert to [`ImageMut`] via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;

use crate::Pixel;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Largest accepted image width in pixels.
pub const MAX_WIDTH: u32 = 4096;

/// Largest accepted image height in pixels.
pub const MAX_HEIGHT: u32 = 4096;

/// Check `width` and `height` against `1..=MAX_WIDTH` and `1..=MAX_HEIGHT`.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if either extent is zero or too large.
pub fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_WIDTH || height > MAX_HEIGHT {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

/// Internal image data
#[derive(Debug, Clone, PartialEq, Eq)]
struct ImageData {
    width: u32,
    height: u32,
    /// Column-major pixels
    data: Vec<Pixel>,
}

impl ImageData {
    #[inline]
    fn index(&self, col: u32, row: u32) -> usize {
        col as usize * self.height as usize + row as usize
    }
}

/// Immutable image grid
///
/// # Examples
///
/// ```
/// use ppmscale_core::{Image, Pixel};
///
/// let img = Image::new_filled(3, 2, Pixel::WHITE).unwrap();
/// assert_eq!(img.width(), 3);
/// assert_eq!(img.height(), 2);
/// assert_eq!(img.get_pixel(2, 1), Some(Pixel::WHITE));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or
    /// exceeds [`MAX_WIDTH`] / [`MAX_HEIGHT`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, Pixel::BLACK)
    }

    /// Create an image with every pixel set to `fill`.
    pub fn new_filled(width: u32, height: u32, fill: Pixel) -> Result<Self> {
        check_dimensions(width, height)?;
        let data = vec![fill; width as usize * height as usize];
        Ok(Self::from_data(ImageData {
            width,
            height,
            data,
        }))
    }

    /// Create an image by evaluating `f(col, row)` for every pixel.
    ///
    /// Columns are visited outer, rows inner.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        check_dimensions(width, height)?;
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for col in 0..width {
            for row in 0..height {
                data.push(f(col, row));
            }
        }
        Ok(Self::from_data(ImageData {
            width,
            height,
            data,
        }))
    }

    /// Wrap a column-major pixel vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "expected {} pixels for {}x{} image, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self::from_data(ImageData {
            width,
            height,
            data: pixels,
        }))
    }

    #[inline]
    fn from_data(inner: ImageData) -> Self {
        Image {
            inner: Arc::new(inner),
        }
    }

    /// Get the image width (number of columns).
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height (number of rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Column-major view of all pixels.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.inner.data
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Try to get mutable access to the pixels.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable image grid
///
/// Convert back to an immutable [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Column-major view of all pixels.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.inner.data
    }

    /// Column-major mutable view of all pixels.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.inner.data
    }
}

impl From<ImageMut> for Image {
    fn from(img: ImageMut) -> Self {
        Image::from_data(img.inner)
    }
}
