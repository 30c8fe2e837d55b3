//! Full analysis run over one volume
//!
//! [`VolumeAnalysis::run`] ties the stages together:
//!
//! 1. threshold estimation over the non-zero voxels
//! 2. per-frame aggregation against that threshold
//! 3. rolling windows over the sum series and the count series
//!
//! Histograms and TVE are derived on demand from the hot window of either
//! series, selected with [`Selection`].

use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::frame::{FrameStats, aggregate_frames, count_series, sum_series};
use crate::histogram::{Histogram, HistogramScale, make_histogram};
use crate::params::{AnalysisParams, validate_rolling_width};
use crate::rolling::{RollingSeries, rolling_window};
use crate::threshold::estimate_threshold;
use crate::tve::{TveResult, compute_tve};
use crate::volume::{Volume, VoxelSubset};

/// Which per-frame series picks the hot window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Frame sums
    BySum,
    /// Frame counts of above-threshold samples
    ByCount,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::BySum => write!(f, "BySum"),
            Selection::ByCount => write!(f, "ByCount"),
        }
    }
}

/// Results of one analysis run, borrowing the analysed volume
#[derive(Debug, Clone)]
pub struct VolumeAnalysis<'a> {
    volume: &'a Volume,
    params: AnalysisParams,
    threshold: u16,
    overall_min: u16,
    overall_max: u16,
    frames: Vec<FrameStats>,
    by_sum: RollingSeries,
    by_count: RollingSeries,
}

impl<'a> VolumeAnalysis<'a> {
    /// Analyse `volume` with `params`.
    ///
    /// All parameters, including the rolling width against the frame count,
    /// are validated before any computation starts.
    ///
    /// # Errors
    ///
    /// - [`Error::Configuration`] for an out-of-range parameter
    /// - [`Error::EmptyData`] if the volume has no non-zero voxel
    pub fn run(volume: &'a Volume, params: &AnalysisParams) -> Result<Self> {
        params.validate()?;
        validate_rolling_width(params.rolling_width, volume.frame_count())?;

        let threshold = estimate_threshold(volume, params.threshold_percent)?;
        let (overall_min, overall_max) = volume.min_max();
        let frames = aggregate_frames(volume, threshold);
        debug!(
            "aggregated {} frames, overall range {overall_min}..={overall_max}",
            frames.len()
        );

        let by_sum = rolling_window(volume, &sum_series(&frames), params.rolling_width)?;
        let by_count = rolling_window(volume, &count_series(&frames), params.rolling_width)?;
        debug!(
            "threshold {threshold}; hot window by sum at frame {}, by count at frame {}",
            by_sum.max_start(),
            by_count.max_start()
        );

        Ok(Self {
            volume,
            params: *params,
            threshold,
            overall_min,
            overall_max,
            frames,
            by_sum,
            by_count,
        })
    }

    /// The analysed volume.
    pub fn volume(&self) -> &'a Volume {
        self.volume
    }

    /// Parameters the run used.
    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Estimated intensity threshold.
    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Smallest sample in the volume.
    pub fn overall_min(&self) -> u16 {
        self.overall_min
    }

    /// Largest sample in the volume.
    pub fn overall_max(&self) -> u16 {
        self.overall_max
    }

    /// Per-frame statistics, in frame order.
    pub fn frames(&self) -> &[FrameStats] {
        &self.frames
    }

    /// Statistics of frame `index`.
    pub fn frame(&self, index: usize) -> Result<&FrameStats> {
        self.frames.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.frames.len(),
        })
    }

    /// Rolling series for `selection`.
    pub fn rolling(&self, selection: Selection) -> &RollingSeries {
        match selection {
            Selection::BySum => &self.by_sum,
            Selection::ByCount => &self.by_count,
        }
    }

    /// Voxels of the hot window for `selection`.
    pub fn subset(&self, selection: Selection) -> Result<VoxelSubset<'a>> {
        let rolling = self.rolling(selection);
        self.volume.subset(rolling.max_start(), rolling.width())
    }

    /// Histogram of the hot window for `selection`, scaled to the window's
    /// own min and max.
    pub fn histogram(&self, selection: Selection, scale: HistogramScale) -> Result<Histogram> {
        let rolling = self.rolling(selection);
        let subset = self.subset(selection)?;
        Ok(make_histogram(
            subset.samples(),
            rolling.window_min(),
            rolling.window_max(),
            scale,
        ))
    }

    /// TVE of the hot window for `selection`.
    pub fn tve(&self, selection: Selection, factor: f64) -> Result<TveResult> {
        let subset = self.subset(selection)?;
        compute_tve(subset.samples(), factor)
    }
}
