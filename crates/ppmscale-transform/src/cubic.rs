//! One-dimensional cubic convolution
//!
//! Blends four consecutive samples `p0..p3` at a fractional offset `t`
//! measured from `p1` towards `p2`, using the Keys cubic convolution
//! kernel
//!
//! ```text
//! W(d) = (a+2)|d|^3 - (a+3)|d|^2 + 1          for |d| <= 1
//! W(d) = a|d|^3 - 5a|d|^2 + 8a|d| - 4a        for 1 < |d| < 2
//! W(d) = 0                                    otherwise
//! ```
//!
//! evaluated at the distances `1+t, t, 1-t, 2-t`. With `a = -0.5` this is
//! the Catmull-Rom spline. At `t = 0` the weights are exactly
//! `[0, 1, 0, 0]`, so integer positions reproduce the source sample.
//!
//! Every channel is rounded half away from zero and clamped to `[0, 255]`.

use ppmscale_core::Pixel;

/// Keys cubic convolution kernel parameterised by `a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicKernel {
    /// Kernel sharpness; usually in `[-1.0, -0.5]`
    pub a: f64,
}

impl Default for CubicKernel {
    fn default() -> Self {
        Self::CATMULL_ROM
    }
}

impl CubicKernel {
    /// Catmull-Rom spline (`a = -0.5`)
    pub const CATMULL_ROM: CubicKernel = CubicKernel { a: -0.5 };

    /// Create a kernel with the given `a`.
    pub const fn new(a: f64) -> Self {
        Self { a }
    }

    /// Kernel value at distance `d`.
    #[inline]
    pub fn weight(&self, d: f64) -> f64 {
        let a = self.a;
        let d = d.abs();
        if d <= 1.0 {
            ((a + 2.0) * d - (a + 3.0)) * d * d + 1.0
        } else if d < 2.0 {
            ((a * d - 5.0 * a) * d + 8.0 * a) * d - 4.0 * a
        } else {
            0.0
        }
    }

    /// Weights for `p0..p3` at offset `t` from `p1`.
    #[inline]
    pub fn weights(&self, t: f64) -> [f64; 4] {
        [
            self.weight(1.0 + t),
            self.weight(t),
            self.weight(1.0 - t),
            self.weight(2.0 - t),
        ]
    }

    /// Blend four pixels channel by channel at offset `t` in `[0, 1)`.
    pub fn interpolate(&self, t: f64, p: [Pixel; 4]) -> Pixel {
        let w = self.weights(t);
        let ch = p.map(Pixel::channels);
        let mut out = [0u8; 3];
        for (c, o) in out.iter_mut().enumerate() {
            let v = w[0] * f64::from(ch[0][c])
                + w[1] * f64::from(ch[1][c])
                + w[2] * f64::from(ch[2][c])
                + w[3] * f64::from(ch[3][c]);
            *o = clamp_channel(v);
        }
        Pixel::from_channels(out)
    }
}

/// Round half away from zero and clamp into `[0, 255]`.
#[inline]
pub fn clamp_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Catmull-Rom blend of `p0..p3` at offset `t` from `p1`.
///
/// # Examples
///
/// ```
/// use ppmscale_core::Pixel;
/// use ppmscale_transform::cubic_interpolate;
///
/// let (lo, hi) = (Pixel::BLACK, Pixel::WHITE);
/// assert_eq!(cubic_interpolate(0.0, lo, lo, hi, hi), lo);
/// assert_eq!(cubic_interpolate(0.5, lo, lo, hi, hi), Pixel::new(128, 128, 128));
/// ```
pub fn cubic_interpolate(t: f64, p0: Pixel, p1: Pixel, p2: Pixel, p3: Pixel) -> Pixel {
    CubicKernel::CATMULL_ROM.interpolate(t, [p0, p1, p2, p3])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> Pixel {
        Pixel::new(v, v, v)
    }

    #[test]
    fn test_weights_at_zero_select_p1() {
        for a in [-0.5, -0.75, -1.0] {
            assert_eq!(CubicKernel::new(a).weights(0.0), [0.0, 1.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let k = CubicKernel::default();
        for i in 0..16 {
            let t = f64::from(i) / 16.0;
            let sum: f64 = k.weights(t).iter().sum();
            assert!((sum - 1.0).abs() < 1e-12, "t={t} sum={sum}");
        }
    }

    #[test]
    fn test_catmull_rom_midpoint_weights() {
        let w = CubicKernel::CATMULL_ROM.weights(0.5);
        assert_eq!(w, [-0.0625, 0.5625, 0.5625, -0.0625]);
    }

    #[test]
    fn test_reproduces_linear_ramp() {
        let p = cubic_interpolate(0.5, gray(0), gray(10), gray(20), gray(30));
        assert_eq!(p, gray(15));
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 0.5 * 255 = 127.5
        let p = cubic_interpolate(0.5, gray(0), gray(0), gray(255), gray(255));
        assert_eq!(p, gray(128));
    }

    #[test]
    fn test_clamps_overshoot_and_undershoot() {
        // 0.5625 * 510 = 286.875
        let hi = cubic_interpolate(0.5, gray(0), gray(255), gray(255), gray(0));
        assert_eq!(hi, gray(255));
        // -0.0625 * 510 = -31.875
        let lo = cubic_interpolate(0.5, gray(255), gray(0), gray(0), gray(255));
        assert_eq!(lo, gray(0));
    }

    #[test]
    fn test_channels_are_independent() {
        let a = Pixel::new(0, 100, 255);
        let b = Pixel::new(255, 100, 0);
        let p = cubic_interpolate(0.5, a, a, b, b);
        assert_eq!(p, Pixel::new(128, 100, 128));
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-3.2), 0);
        assert_eq!(clamp_channel(254.5), 255);
        assert_eq!(clamp_channel(300.0), 255);
        assert_eq!(clamp_channel(12.49), 12);
    }
}
