//! ppmscale-io - Image I/O for ppmscale
//!
//! Reads and writes the plain-text `P3` PPM format.
//!
//! - Stream API: [`read_ppm`], [`write_ppm`]
//! - Memory API: [`read_image_mem`], [`write_image_mem`]
//! - File API: [`read_image`], [`write_image`]
//! - Header probing: [`read_image_header`], [`read_image_header_mem`]

mod error;
pub mod header;
pub mod ppm;

pub use error::{IoError, IoResult};
pub use header::{ImageHeader, read_image_header, read_image_header_mem};
pub use ppm::{MAX_COLOR_VALUE, read_ppm, write_ppm};

use ppmscale_core::Image;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// # Errors
///
/// - [`IoError::InvalidArgument`] if `path` is empty
/// - [`IoError::Io`] if the file cannot be opened or read
/// - [`IoError::Format`] if the contents are not a valid P3 image
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(IoError::InvalidArgument("invalid filename".to_string()));
    }
    let file = File::open(path).map_err(IoError::Io)?;
    read_ppm(BufReader::new(file))
}

/// Read an image from memory.
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    ppm::decode_ppm(data)
}

/// Write an image to a file path.
///
/// The image is encoded in memory first; the file is only created once
/// encoding has succeeded.
///
/// # Errors
///
/// Returns [`IoError::InvalidArgument`] if `path` is empty or the file
/// cannot be created.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P) -> IoResult<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(IoError::InvalidArgument("invalid filename".to_string()));
    }
    let data = write_image_mem(image)?;
    let mut file = File::create(path).map_err(|e| {
        IoError::InvalidArgument(format!("failed to open {}: {}", path.display(), e))
    })?;
    file.write_all(&data).map_err(IoError::Io)?;
    Ok(())
}

/// Write an image to memory.
pub fn write_image_mem(image: &Image) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_ppm(image, &mut buf)?;
    Ok(buf)
}
