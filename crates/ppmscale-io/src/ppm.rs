//! PPM (Portable Pixmap) plain-text format support
//!
//! Reads and writes the ASCII `P3` variant:
//!
//! ```text
//! P3
//! <width> <height>
//! <max color value>
//! <r> <g> <b> <r> <g> <b> ...
//! ```
//!
//! Samples are whitespace-separated and appear row by row, left to right
//! within each row. Decoding is strict: exactly `width * height * 3`
//! samples must be present. Samples are stored as read; they are not
//! rescaled when the declared max value is below 255.

use crate::header::ImageHeader;
use crate::{IoError, IoResult};
use ppmscale_core::{Image, MAX_HEIGHT, MAX_WIDTH, Pixel};
use std::fmt::Write as _;
use std::io::{Read, Write};
use tracing::debug;

/// Maximum channel value accepted on decode and always written on encode.
pub const MAX_COLOR_VALUE: u32 = 255;

/// Format tag, matched case-insensitively.
const TAG: &[u8] = b"P3";

/// Whitespace-delimited token cursor over raw bytes.
pub(crate) struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let data = self.data;
        while self.pos < data.len() && data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos == data.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < data.len() && !data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Some(&data[start..self.pos])
    }
}

fn parse_int(token: &[u8]) -> Option<i64> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

/// True if the token begins like an integer (optional sign, then a digit).
fn starts_numeric(token: &[u8]) -> bool {
    match token {
        [b'+' | b'-', d, ..] => d.is_ascii_digit(),
        [d, ..] => d.is_ascii_digit(),
        [] => false,
    }
}

/// Read and validate the tag, dimensions, and max color value.
pub(crate) fn read_header(tokens: &mut Tokens<'_>) -> IoResult<ImageHeader> {
    let tag = tokens
        .next()
        .ok_or_else(|| IoError::Format("failed to read type".to_string()))?;
    if !tag.eq_ignore_ascii_case(TAG) {
        return Err(IoError::Format(format!(
            "invalid type {}",
            String::from_utf8_lossy(tag)
        )));
    }

    let mut dimension = |max: u32| -> IoResult<u32> {
        tokens
            .next()
            .and_then(parse_int)
            .filter(|&v| v >= 1 && v <= i64::from(max))
            .map(|v| v as u32)
            .ok_or_else(|| IoError::Format("invalid dimensions".to_string()))
    };
    let width = dimension(MAX_WIDTH)?;
    let height = dimension(MAX_HEIGHT)?;

    let max_value = tokens
        .next()
        .and_then(parse_int)
        .filter(|&v| v >= 1 && v <= i64::from(MAX_COLOR_VALUE))
        .ok_or_else(|| IoError::Format("invalid max color".to_string()))?;

    Ok(ImageHeader {
        width,
        height,
        max_value: max_value as u32,
    })
}

fn read_sample(tokens: &mut Tokens<'_>, max_value: u32) -> IoResult<u8> {
    let token = tokens
        .next()
        .ok_or_else(|| IoError::Format("not enough values".to_string()))?;
    let value = parse_int(token).ok_or_else(|| {
        IoError::Format(format!(
            "invalid color value {}",
            String::from_utf8_lossy(token)
        ))
    })?;
    if value < 0 || value > i64::from(max_value) {
        return Err(IoError::Format(format!(
            "invalid color value {} (max {})",
            value, max_value
        )));
    }
    Ok(value as u8)
}

/// Decode a P3 image held in memory.
pub(crate) fn decode_ppm(data: &[u8]) -> IoResult<Image> {
    let mut tokens = Tokens::new(data);
    let ImageHeader {
        width,
        height,
        max_value,
    } = read_header(&mut tokens)?;
    debug!(width, height, max_value, "decoding P3 image");

    let h = height as usize;
    let mut pixels = vec![Pixel::BLACK; width as usize * h];
    for row in 0..h {
        for col in 0..width as usize {
            let mut ch = [0u8; 3];
            for c in ch.iter_mut() {
                *c = read_sample(&mut tokens, max_value)?;
            }
            pixels[col * h + row] = Pixel::from_channels(ch);
        }
    }

    if tokens.next().is_some_and(starts_numeric) {
        return Err(IoError::Format("too many values".to_string()));
    }

    Ok(Image::from_pixels(width, height, pixels)?)
}

/// Read a P3 image from a reader.
///
/// # Arguments
/// * `reader` - Source positioned at the `P3` tag
///
/// # Errors
///
/// Returns [`IoError::Format`] for a wrong tag, missing/zero/oversize
/// dimensions, a max value outside `[1, 255]`, a missing or out-of-range
/// sample, or numeric data after the last expected sample.
pub fn read_ppm<R: Read>(mut reader: R) -> IoResult<Image> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(IoError::Io)?;
    decode_ppm(&data)
}

/// Write an image as P3 to a writer.
///
/// The max value is always 255 and each image row goes on its own line,
/// pixels and channels separated by single spaces.
///
/// # Arguments
/// * `image`  - The image to encode
/// * `writer` - Destination writer
pub fn write_ppm<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    let (w, h) = (image.width(), image.height());
    debug!(width = w, height = h, "encoding P3 image");

    write!(writer, "P3\n{} {}\n{}\n", w, h, MAX_COLOR_VALUE)?;

    let mut line = String::with_capacity(w as usize * 12);
    for row in 0..h {
        line.clear();
        for col in 0..w {
            let p = image.get_pixel_unchecked(col, row);
            if col > 0 {
                line.push(' ');
            }
            // Writing into a String cannot fail
            let _ = write!(line, "{} {} {}", p.red, p.green, p.blue);
        }
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
