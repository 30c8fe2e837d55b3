//! Percentile threshold over non-zero voxels
//!
//! Zero voxels are background (outside the field of view or the body) and
//! are excluded. Of the remaining `n` values sorted in decreasing order,
//! the threshold is the value at index `floor((1 - threshold_percent) * n)`.
//! Small percents land near the dimmest non-zero voxel, percents close to
//! one land near the brightest.

use log::debug;

use crate::error::{Error, Result};
use crate::params::validate_threshold_percent;
use crate::volume::Volume;

/// Estimate the intensity threshold of a volume.
///
/// # Arguments
///
/// * `volume` - Source volume
/// * `threshold_percent` - Fraction of non-zero voxels expected above the
///   threshold, in `[0, 1)`
///
/// # Returns
///
/// The threshold intensity. With `threshold_percent == 0` the computed
/// index equals `n` and is clamped to `n - 1`, giving the smallest non-zero
/// value.
///
/// # Errors
///
/// - [`Error::Configuration`] if `threshold_percent` is out of range
/// - [`Error::EmptyData`] if the volume has no non-zero voxel
pub fn estimate_threshold(volume: &Volume, threshold_percent: f64) -> Result<u16> {
    threshold_from_samples(volume.samples(), threshold_percent)
}

/// Same as [`estimate_threshold`] over a raw sample slice.
pub fn threshold_from_samples(samples: &[u16], threshold_percent: f64) -> Result<u16> {
    validate_threshold_percent(threshold_percent)?;

    let mut nonzero: Vec<u16> = samples.iter().copied().filter(|&v| v > 0).collect();
    let n = nonzero.len();
    if n == 0 {
        return Err(Error::EmptyData(
            "no non-zero voxels for threshold estimation",
        ));
    }

    let index = (((1.0 - threshold_percent) * n as f64).floor() as usize).min(n - 1);

    // Only the element at `index` of the decreasing order is needed.
    let (_, &mut threshold, _) = nonzero.select_nth_unstable_by(index, |a, b| b.cmp(a));
    debug!(
        "threshold {threshold} at rank {index} of {n} non-zero voxels (percent {threshold_percent})"
    );
    Ok(threshold)
}
