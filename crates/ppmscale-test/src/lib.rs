//! ppmscale-test - Regression test framework for ppmscale
//!
//! Tracks numbered checks inside one regression test and reports every
//! failure at the end instead of stopping at the first one.
//!
//! # Usage
//!
//! ```ignore
//! use ppmscale_test::{RegParams, load_test_image};
//!
//! let mut rp = RegParams::new("scale");
//! let img = load_test_image("gradient4x3.ppm").unwrap();
//! rp.compare_values(4.0, img.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use ppmscale_core::Image;

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "gradient4x3.ppm")
pub fn load_test_image(name: &str) -> TestResult<Image> {
    let path = test_data_path(name);
    ppmscale_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // ppmscale-test is at crates/ppmscale-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
