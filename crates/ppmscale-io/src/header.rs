//! Image header reading
//!
//! Extracts the dimensions and maximum color value of a P3 image
//! without decoding pixel data.

use crate::{IoError, IoResult, ppm};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Image metadata read without decoding pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Declared maximum channel value, in `[1, 255]`
    pub max_value: u32,
}

/// Read image metadata from a file path without decoding pixel data
pub fn read_image_header<P: AsRef<Path>>(path: P) -> IoResult<ImageHeader> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(IoError::InvalidArgument("invalid filename".to_string()));
    }
    let file = File::open(path).map_err(IoError::Io)?;
    let mut reader = BufReader::new(file);
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(IoError::Io)?;
    read_image_header_mem(&data)
}

/// Read image metadata from bytes without decoding pixel data
///
/// The tag, dimensions, and max value are validated exactly as a full
/// decode would validate them. Sample data is not inspected.
pub fn read_image_header_mem(data: &[u8]) -> IoResult<ImageHeader> {
    ppm::read_header(&mut ppm::Tokens::new(data))
}
