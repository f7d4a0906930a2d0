//! Pixel access functions
//!
//! Getting and setting individual pixels by `(col, row)`.

use super::{Image, ImageMut};
use crate::Pixel;
use crate::error::{Error, Result};

impl Image {
    /// Get the pixel at (col, row).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, col: u32, row: u32) -> Option<Pixel> {
        if col >= self.inner.width || row >= self.inner.height {
            return None;
        }
        Some(self.get_pixel_unchecked(col, row))
    }

    /// Get a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index lies outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, col: u32, row: u32) -> Pixel {
        self.inner.data[self.inner.index(col, row)]
    }
}

impl ImageMut {
    /// Get the pixel at (col, row).
    pub fn get_pixel(&self, col: u32, row: u32) -> Option<Pixel> {
        if col >= self.inner.width || row >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(col, row)])
    }

    /// Set the pixel at (col, row).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, col: u32, row: u32, pixel: Pixel) -> Result<()> {
        if col >= self.inner.width || row >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                col,
                row,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_pixel_unchecked(col, row, pixel);
        Ok(())
    }

    /// Set a pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index lies outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, col: u32, row: u32, pixel: Pixel) {
        let idx = self.inner.index(col, row);
        self.inner.data[idx] = pixel;
    }
}
