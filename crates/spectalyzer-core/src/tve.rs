//! Threshold voxel exceedance (TVE)
//!
//! How many of the brightest voxels does it take to carry a given fraction
//! of a subset's total intensity? With `total = sum(samples)` and
//! `cutoff = floor(total * factor)`, the samples are taken in decreasing
//! order until their running sum strictly exceeds `cutoff`. The number of
//! samples taken is the TVE count.
//!
//! Two cases never reach the exceedance and report the full subset length:
//! an all-zero subset (`total == 0`), and `factor == 1.0`, where the cutoff
//! equals the total.

use crate::error::{Error, Result};
use crate::params::validate_tve_factor;

/// Result of a TVE computation over one voxel subset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TveResult {
    /// Number of voxels in the subset
    pub voxel_count: usize,
    /// Cutoff fraction used
    pub factor: f64,
    /// Sum of all voxels
    pub total: u64,
    /// `floor(total * factor)`
    pub cutoff: u64,
    /// Brightest voxels needed to exceed the cutoff
    pub count: usize,
    /// `count` as a percentage of `voxel_count`
    pub percentage: f64,
}

/// Compute the TVE of `samples` for `factor`.
///
/// # Errors
///
/// - [`Error::Configuration`] if `factor` is not in `(0, 1]`
/// - [`Error::EmptyData`] if `samples` is empty
///
/// # Examples
///
/// ```
/// use spectalyzer_core::compute_tve;
///
/// let tve = compute_tve(&[5, 4, 3, 2, 1], 0.3).unwrap();
/// assert_eq!((tve.total, tve.cutoff, tve.count), (15, 4, 1));
/// assert_eq!(tve.percentage, 20.0);
/// ```
pub fn compute_tve(samples: &[u16], factor: f64) -> Result<TveResult> {
    validate_tve_factor(factor)?;
    if samples.is_empty() {
        return Err(Error::EmptyData("TVE of an empty voxel subset"));
    }

    let voxel_count = samples.len();
    let total: u64 = samples.iter().map(|&v| u64::from(v)).sum();
    let cutoff = (total as f64 * factor).floor() as u64;

    let count = if total == 0 {
        voxel_count
    } else {
        let mut sorted = samples.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let mut running = 0u64;
        let mut steps = 0usize;
        for &v in &sorted {
            steps += 1;
            running += u64::from(v);
            if running > cutoff {
                break;
            }
        }
        steps
    };

    Ok(TveResult {
        voxel_count,
        factor,
        total,
        cutoff,
        count,
        percentage: count as f64 * 100.0 / voxel_count as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_scenario() {
        let tve = compute_tve(&[5, 4, 3, 2, 1], 0.3).unwrap();
        assert_eq!(tve.total, 15);
        assert_eq!(tve.cutoff, 4);
        assert_eq!(tve.count, 1);
        assert_eq!(tve.percentage, 20.0);
        assert_eq!(tve.voxel_count, 5);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = compute_tve(&[1, 2, 3, 4, 5], 0.5).unwrap();
        let b = compute_tve(&[3, 5, 1, 4, 2], 0.5).unwrap();
        assert_eq!(a, b);
        // cutoff 7: 5 -> 5, 5+4 -> 9 > 7
        assert_eq!(a.count, 2);
    }

    #[test]
    fn test_exact_cutoff_needs_one_more() {
        // total 20, cutoff 10; 5+5 = 10 is not > 10
        let tve = compute_tve(&[5, 5, 5, 5], 0.5).unwrap();
        assert_eq!(tve.cutoff, 10);
        assert_eq!(tve.count, 3);
    }

    #[test]
    fn test_all_zero_reports_full_length() {
        let tve = compute_tve(&[0, 0, 0, 0], 0.3).unwrap();
        assert_eq!(tve.total, 0);
        assert_eq!(tve.cutoff, 0);
        assert_eq!(tve.count, 4);
        assert_eq!(tve.percentage, 100.0);
    }

    #[test]
    fn test_single_positive_among_zeros() {
        // total 1, cutoff 0: the first step already exceeds
        let tve = compute_tve(&[0, 0, 1, 0], 0.3).unwrap();
        assert_eq!(tve.count, 1);
    }

    #[test]
    fn test_factor_one_takes_everything() {
        let tve = compute_tve(&[3, 2, 1], 1.0).unwrap();
        assert_eq!(tve.cutoff, 6);
        assert_eq!(tve.count, 3);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            compute_tve(&[1, 2], 0.0),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(compute_tve(&[], 0.3), Err(Error::EmptyData(_))));
    }
}
