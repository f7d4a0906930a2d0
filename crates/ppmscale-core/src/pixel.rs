//! Pixel - a three-channel 8-bit color sample
//!
//! Pixels carry no identity beyond their channel values and are copied
//! by value everywhere.

/// Channel index of red within [`Pixel::channels`]
pub const RED: usize = 0;
/// Channel index of green within [`Pixel::channels`]
pub const GREEN: usize = 1;
/// Channel index of blue within [`Pixel::channels`]
pub const BLUE: usize = 2;

/// An RGB color sample with channels in `[0, 255]`.
///
/// # Examples
///
/// ```
/// use ppmscale_core::Pixel;
///
/// let p = Pixel::new(10, 20, 30);
/// assert_eq!(p.channels(), [10, 20, 30]);
/// assert_eq!(Pixel::from_channels([10, 20, 30]), p);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Pixel {
    /// Black (0, 0, 0)
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    /// Create a pixel from its red, green and blue channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Channels in R, G, B order.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Build a pixel from channels in R, G, B order.
    #[inline]
    pub const fn from_channels(ch: [u8; 3]) -> Self {
        Self::new(ch[RED], ch[GREEN], ch[BLUE])
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Pixel::new(r, g, b)
    }
}

impl From<Pixel> for (u8, u8, u8) {
    fn from(p: Pixel) -> Self {
        (p.red, p.green, p.blue)
    }
}
