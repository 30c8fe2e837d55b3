//! SPECTalyzer Core - Volume data model and intensity analysis
//!
//! This crate holds the in-memory volume and every analysis stage run on it:
//!
//! - [`Volume`] / [`VoxelSubset`] - Frame-major 16-bit sample buffer and
//!   borrowed runs of whole frames
//! - [`estimate_threshold`] - Percentile threshold over non-zero voxels
//! - [`aggregate_frames`] / [`FrameStats`] - Per-frame min, max, sum and
//!   above-threshold count
//! - [`rolling_window`] / [`RollingSeries`] - Sliding-window totals and the
//!   hot window
//! - [`make_histogram`] / [`Histogram`] - 100-bin linear or log histograms
//! - [`compute_tve`] / [`TveResult`] - Brightest-voxel exceedance count
//! - [`VolumeAnalysis`] - All of the above in one run
//!
//! Parameters live in [`AnalysisParams`], which can be loaded from JSON.

pub mod analysis;
pub mod error;
pub mod frame;
pub mod histogram;
pub mod params;
pub mod rolling;
pub mod threshold;
pub mod tve;
pub mod volume;

pub use analysis::{Selection, VolumeAnalysis};
pub use error::{Error, Result};
pub use frame::{FrameStats, aggregate_frames, count_series, frame_stats, sum_series};
pub use histogram::{HISTOGRAM_BINS, Histogram, HistogramScale, bin_index, make_histogram};
pub use params::{
    AnalysisParams, DEFAULT_ROLLING_WIDTH, DEFAULT_THRESHOLD_PERCENT, DEFAULT_TVE_FACTOR,
    validate_rolling_width, validate_threshold_percent, validate_tve_factor,
};
pub use rolling::{RollingSeries, rolling_totals, rolling_window};
pub use threshold::{estimate_threshold, threshold_from_samples};
pub use tve::{TveResult, compute_tve};
pub use volume::{FrameGeometry, Volume, VoxelSubset};
