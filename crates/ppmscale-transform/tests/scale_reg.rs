//! Scale regression test
//!
//! Bicubic scaling of the sample images: identity at the same size,
//! corner preservation, interior values on a linear ramp, argument
//! validation, and determinism.

use ppmscale_core::{ErrorKind, Image, MAX_HEIGHT, MAX_WIDTH, Pixel};
use ppmscale_io::read_image;
use ppmscale_test::{RegParams, load_test_image};
use ppmscale_transform::{map_coordinate, scale, scale_to_size};

fn corners(img: &Image) -> [Option<Pixel>; 4] {
    let (w, h) = (img.width() - 1, img.height() - 1);
    [
        img.get_pixel(0, 0),
        img.get_pixel(w, 0),
        img.get_pixel(0, h),
        img.get_pixel(w, h),
    ]
}

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    let pixs = load_test_image("gradient4x3.ppm").expect("load gradient4x3.ppm");
    let (w, h) = (pixs.width(), pixs.height());
    eprintln!("Image size: {}x{}", w, h);

    // --- Test 1: same size is the identity ---
    let same = scale_to_size(&pixs, w, h).expect("scale 1x");
    rp.compare_images(&pixs, &same);

    // --- Test 2: upscale keeps corners and interpolates the ramp ---
    let up = scale_to_size(&pixs, 7, 5).expect("scale to 7x5");
    rp.compare_values(7.0, up.width() as f64, 0.0);
    rp.compare_values(5.0, up.height() as f64, 0.0);
    rp.compare_values(1.0, (corners(&up) == corners(&pixs)) as u8 as f64, 0.0);
    // Column 3 maps to x = 1.5, between R = 85 and R = 170
    let mid = up.get_pixel(3, 0).expect("pixel (3, 0)");
    rp.compare_values(128.0, mid.red as f64, 0.0);
    rp.compare_values(0.0, mid.green as f64, 0.0);
    rp.compare_values(128.0, mid.blue as f64, 0.0);
    // Even target columns land on source columns
    for (tc, sc) in [(0u32, 0u32), (2, 1), (4, 2), (6, 3)] {
        rp.compare_values(
            1.0,
            (up.get_pixel(tc, 2) == pixs.get_pixel(sc, 1)) as u8 as f64,
            0.0,
        );
    }

    // --- Test 3: downscale keeps corners ---
    let down = scale_to_size(&pixs, 2, 2).expect("scale to 2x2");
    rp.compare_values(1.0, (corners(&down) == corners(&pixs)) as u8 as f64, 0.0);

    // --- Test 4: scale factors ---
    let twice = scale(&pixs, 2.0, 2.0).expect("scale 2x");
    rp.compare_values((w * 2) as f64, twice.width() as f64, 0.0);
    rp.compare_values((h * 2) as f64, twice.height() as f64, 0.0);

    // --- Test 5: determinism ---
    let again = scale_to_size(&pixs, 7, 5).expect("scale to 7x5 again");
    rp.compare_images(&up, &again);

    // --- Test 6: write, read back, compare ---
    let path = rp.write_image(&up).expect("write upscaled");
    let back = read_image(&path).expect("read upscaled");
    rp.compare_images(&up, &back);

    assert!(rp.cleanup(), "scale regression test failed");
}

#[test]
fn scale_validation_reg() {
    let mut rp = RegParams::new("scale_validation");

    let pixs = load_test_image("swatch2x2.ppm").expect("load swatch2x2.ppm");
    for (tw, th) in [(0, 3), (3, 0), (MAX_WIDTH + 1, 3), (3, MAX_HEIGHT + 1), (1, 3)] {
        let kind = scale_to_size(&pixs, tw, th).map(|_| ()).unwrap_err().kind();
        rp.compare_values(1.0, (kind == ErrorKind::InvalidArgument) as u8 as f64, 0.0);
    }

    // Mapper endpoints are exact for any valid extents
    for s in [1u32, 2, 5, 333] {
        for t in [2u32, 3, 17, 1024] {
            rp.compare_values(0.0, map_coordinate(s, t, 0).expect("map 0"), 0.0);
            rp.compare_values(
                f64::from(s - 1),
                map_coordinate(s, t, t - 1).expect("map last"),
                0.0,
            );
        }
    }

    assert!(rp.cleanup(), "scale_validation regression test failed");
}
