//! Rolling (sliding-window) totals over a per-frame series
//!
//! For a window of `width` frames the series has `frame_count - width + 1`
//! windowed totals. The first is summed directly; each following one is
//! updated in O(1) by dropping the frame that leaves the window and adding
//! the frame that enters it.
//!
//! The "hot window" is the start index with the strictly greatest total.
//! Ties keep the earliest index.

use log::debug;

use crate::error::{Error, Result};
use crate::params::validate_rolling_width;
use crate::volume::Volume;

/// Windowed totals of one per-frame series plus its hot window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollingSeries {
    totals: Vec<u64>,
    width: usize,
    max_start: usize,
    window_min: u16,
    window_max: u16,
}

impl RollingSeries {
    /// Windowed totals, indexed by window start frame.
    pub fn totals(&self) -> &[u64] {
        &self.totals
    }

    /// Total of the window starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `start` is not a window start.
    pub fn total(&self, start: usize) -> Result<u64> {
        self.totals
            .get(start)
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                index: start,
                len: self.totals.len(),
            })
    }

    /// Number of window positions.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Always `false` for a series built by [`rolling_window`].
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Window width in frames.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Start frame of the hot window.
    pub fn max_start(&self) -> usize {
        self.max_start
    }

    /// Total of the hot window.
    pub fn max_total(&self) -> u64 {
        self.totals[self.max_start]
    }

    /// Smallest raw sample inside the hot window.
    pub fn window_min(&self) -> u16 {
        self.window_min
    }

    /// Largest raw sample inside the hot window.
    pub fn window_max(&self) -> u16 {
        self.window_max
    }
}

/// Compute windowed totals and the arg-max start index of a series.
///
/// # Arguments
///
/// * `series` - Per-frame values
/// * `width` - Window width, `1 <= width <= series.len()`
///
/// # Returns
///
/// `(totals, max_start)` where `totals.len() == series.len() - width + 1`.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if `width` is zero or exceeds the series
/// length.
pub fn rolling_totals(series: &[u64], width: usize) -> Result<(Vec<u64>, usize)> {
    validate_rolling_width(width, series.len())?;

    let mut totals = Vec::with_capacity(series.len() - width + 1);
    let mut total: u64 = series[..width].iter().sum();
    totals.push(total);

    let mut max_total = total;
    let mut max_start = 0;
    for i in width..series.len() {
        total = total - series[i - width] + series[i];
        let start = i - width + 1;
        totals.push(total);
        if total > max_total {
            max_total = total;
            max_start = start;
        }
    }

    Ok((totals, max_start))
}

/// Run the rolling analysis of one per-frame series of `volume`.
///
/// Besides the totals and the hot window, records the min and max raw
/// samples inside the hot window, used later to scale histograms.
///
/// # Errors
///
/// - [`Error::Configuration`] if `series.len() != volume.frame_count()` or
///   the width is invalid
pub fn rolling_window(volume: &Volume, series: &[u64], width: usize) -> Result<RollingSeries> {
    if series.len() != volume.frame_count() {
        return Err(Error::Configuration(format!(
            "series has {} entries for {} frames",
            series.len(),
            volume.frame_count()
        )));
    }
    let (totals, max_start) = rolling_totals(series, width)?;
    let (window_min, window_max) = volume.subset(max_start, width)?.min_max();
    debug!(
        "hot window starts at frame {max_start} (width {width}, total {}, samples {window_min}..={window_max})",
        totals[max_start]
    );

    Ok(RollingSeries {
        totals,
        width,
        max_start,
        window_min,
        window_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_one_is_identity() {
        let (totals, max_start) = rolling_totals(&[10, 20, 15], 1).unwrap();
        assert_eq!(totals, vec![10, 20, 15]);
        assert_eq!(max_start, 1);
    }

    #[test]
    fn test_full_width_single_window() {
        let (totals, max_start) = rolling_totals(&[1, 2, 3], 3).unwrap();
        assert_eq!(totals, vec![6]);
        assert_eq!(max_start, 0);
    }

    #[test]
    fn test_tie_keeps_earliest() {
        let (totals, max_start) = rolling_totals(&[5, 1, 5, 1, 5], 2).unwrap();
        assert_eq!(totals, vec![6, 6, 6, 6]);
        assert_eq!(max_start, 0);
    }

    #[test]
    fn test_later_strict_maximum_wins() {
        let (_, max_start) = rolling_totals(&[1, 1, 1, 9, 9, 1], 2).unwrap();
        assert_eq!(max_start, 3);
    }

    #[test]
    fn test_width_too_large() {
        assert!(matches!(
            rolling_totals(&[1, 2], 3),
            Err(Error::Configuration(_))
        ));
        assert!(rolling_totals(&[1, 2], 0).is_err());
    }

    #[test]
    fn test_rolling_window_min_max() {
        // frames: [1,1] [9,2] [8,3] [0,1]
        let vol = Volume::new(vec![1, 1, 9, 2, 8, 3, 0, 1], 4, 2).unwrap();
        let series = vec![2, 11, 11, 1];
        let rs = rolling_window(&vol, &series, 2).unwrap();
        assert_eq!(rs.totals(), &[13, 22, 12]);
        assert_eq!(rs.max_start(), 1);
        assert_eq!(rs.max_total(), 22);
        assert_eq!((rs.window_min(), rs.window_max()), (2, 9));
        assert_eq!(rs.len(), 3);
        assert!(rs.total(3).is_err());
    }

    #[test]
    fn test_rolling_window_series_length_mismatch() {
        let vol = Volume::new(vec![1, 2, 3, 4], 2, 2).unwrap();
        assert!(rolling_window(&vol, &[1, 2, 3], 1).is_err());
    }
}
