//! Per-frame aggregation
//!
//! One pass over each frame yields its minimum, maximum, sum, and the number
//! of samples strictly above the volume threshold. Min and max are tracked
//! by two independent comparisons, so monotonic frames are handled like any
//! other.

use crate::volume::Volume;

/// Statistics of a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Smallest sample
    pub min: u16,
    /// Largest sample
    pub max: u16,
    /// Sum of all samples
    pub sum: u64,
    /// Samples strictly greater than the threshold
    pub count_above_threshold: u64,
}

/// Aggregate one frame.
///
/// An empty frame yields all-zero statistics.
pub fn frame_stats(frame: &[u16], threshold: u16) -> FrameStats {
    if frame.is_empty() {
        return FrameStats::default();
    }

    let mut min = u16::MAX;
    let mut max = u16::MIN;
    let mut sum = 0u64;
    let mut count_above_threshold = 0u64;
    for &v in frame {
        if v > max {
            max = v;
        }
        if v < min {
            min = v;
        }
        sum += u64::from(v);
        if v > threshold {
            count_above_threshold += 1;
        }
    }

    FrameStats {
        min,
        max,
        sum,
        count_above_threshold,
    }
}

/// Aggregate every frame of a volume, in frame order.
pub fn aggregate_frames(volume: &Volume, threshold: u16) -> Vec<FrameStats> {
    volume
        .frames()
        .map(|frame| frame_stats(frame, threshold))
        .collect()
}

/// Extract the per-frame sum series.
pub fn sum_series(stats: &[FrameStats]) -> Vec<u64> {
    stats.iter().map(|s| s.sum).collect()
}

/// Extract the per-frame above-threshold count series.
pub fn count_series(stats: &[FrameStats]) -> Vec<u64> {
    stats.iter().map(|s| s.count_above_threshold).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increasing_frame() {
        let stats = frame_stats(&[1, 2, 3, 4], 2);
        assert_eq!(stats.min, 1);
        assert_eq!(stats.max, 4);
        assert_eq!(stats.sum, 10);
        assert_eq!(stats.count_above_threshold, 2);
    }

    #[test]
    fn test_decreasing_frame() {
        let stats = frame_stats(&[9, 7, 5, 3], 0);
        assert_eq!(stats.min, 3);
        assert_eq!(stats.max, 9);
        assert_eq!(stats.count_above_threshold, 4);
    }

    #[test]
    fn test_constant_frame() {
        let stats = frame_stats(&[5, 5, 5], 5);
        assert_eq!((stats.min, stats.max), (5, 5));
        assert_eq!(stats.sum, 15);
        assert_eq!(stats.count_above_threshold, 0);
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let frame = vec![u16::MAX; 1 << 17];
        let stats = frame_stats(&frame, 0);
        assert_eq!(stats.sum, u64::from(u16::MAX) << 17);
    }

    #[test]
    fn test_aggregate_frames() {
        let vol = Volume::new(vec![1, 2, 3, 4, 5, 6], 3, 2).unwrap();
        let stats = aggregate_frames(&vol, 1);
        assert_eq!(stats.len(), 3);
        assert_eq!(sum_series(&stats), vec![3, 7, 11]);
        assert_eq!(count_series(&stats), vec![1, 2, 2]);
    }

    #[test]
    fn test_empty_frame() {
        assert_eq!(frame_stats(&[], 0), FrameStats::default());
    }
}
