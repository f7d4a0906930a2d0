//! Bicubic sampling regression test
//!
//! Samples the 2x2 swatch at its corners and centre, where every
//! neighbourhood reaches outside the grid and relies on edge replication.

use ppmscale_core::Pixel;
use ppmscale_test::{RegParams, load_test_image};
use ppmscale_transform::{CubicKernel, bicubic_sample, bicubic_sample_with, cubic_interpolate};

#[test]
fn bicubic_reg() {
    let mut rp = RegParams::new("bicubic");

    // red green
    // blue white
    let pixs = load_test_image("swatch2x2.ppm").expect("load swatch2x2.ppm");

    // --- Test 1: corners reproduce the source ---
    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
        let p = bicubic_sample(&pixs, x, y).expect("sample corner");
        let src = pixs.get_pixel(x as u32, y as u32).expect("source pixel");
        rp.compare_values(1.0, (p == src) as u8 as f64, 0.0);
    }

    // --- Test 2: centre blends all four ---
    // Every channel is 0,0,255,255 or similar along each axis, giving 127.5
    // rounded up in the first pass.
    let centre = bicubic_sample(&pixs, 0.5, 0.5).expect("sample centre");
    let top = cubic_interpolate(
        0.5,
        Pixel::new(255, 0, 0),
        Pixel::new(255, 0, 0),
        Pixel::new(0, 255, 0),
        Pixel::new(0, 255, 0),
    );
    let bottom = cubic_interpolate(
        0.5,
        Pixel::new(0, 0, 255),
        Pixel::new(0, 0, 255),
        Pixel::WHITE,
        Pixel::WHITE,
    );
    let expected = cubic_interpolate(0.5, top, top, bottom, bottom);
    rp.compare_values(1.0, (centre == expected) as u8 as f64, 0.0);
    rp.compare_values(128.0, top.red as f64, 0.0);
    rp.compare_values(128.0, top.green as f64, 0.0);
    rp.compare_values(0.0, top.blue as f64, 0.0);

    // --- Test 3: out-of-range coordinates are rejected ---
    for (x, y) in [(-0.5, 0.0), (0.0, -0.5), (2.0, 0.0), (0.0, 2.0)] {
        rp.compare_values(1.0, bicubic_sample(&pixs, x, y).is_err() as u8 as f64, 0.0);
    }

    // --- Test 4: a sharper kernel still reproduces integer positions ---
    let sharp = CubicKernel::new(-1.0);
    for (x, y) in [(0.0, 0.0), (1.0, 1.0)] {
        let p = bicubic_sample_with(&pixs, x, y, &sharp).expect("sample sharp");
        let src = pixs.get_pixel(x as u32, y as u32).expect("source pixel");
        rp.compare_values(1.0, (p == src) as u8 as f64, 0.0);
    }

    assert!(rp.cleanup(), "bicubic regression test failed");
}
