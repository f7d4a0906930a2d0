//! Target-to-source coordinate mapping
//!
//! Maps an index on the target grid to a fractional coordinate on the
//! source grid along one axis. The map is linear and pins both ends:
//! index 0 lands on source 0 and index `target - 1` lands on `source - 1`,
//! so sampling never leaves the source extent.

use crate::{TransformError, TransformResult};

/// Map a target-grid index to a fractional source coordinate.
///
/// Computes `(source_extent - 1) * index / (target_extent - 1)`. The
/// product is formed before the division so that the last index maps to
/// exactly `source_extent - 1`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidArgument`] if `source_extent` is 0,
/// `target_extent <= 1`, or `index >= target_extent`.
///
/// # Examples
///
/// ```
/// use ppmscale_transform::map_coordinate;
///
/// assert_eq!(map_coordinate(3, 5, 0).unwrap(), 0.0);
/// assert_eq!(map_coordinate(3, 5, 1).unwrap(), 0.5);
/// assert_eq!(map_coordinate(3, 5, 4).unwrap(), 2.0);
/// ```
pub fn map_coordinate(source_extent: u32, target_extent: u32, index: u32) -> TransformResult<f64> {
    if source_extent == 0 || target_extent <= 1 {
        return Err(TransformError::InvalidArgument(format!(
            "invalid dimension: source {} target {}",
            source_extent, target_extent
        )));
    }
    if index >= target_extent {
        return Err(TransformError::InvalidArgument(format!(
            "invalid coordinate {} for extent {}",
            index, target_extent
        )));
    }
    let span = f64::from(source_extent - 1) * f64::from(index);
    Ok(span / f64::from(target_extent - 1))
}
