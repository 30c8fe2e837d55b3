//! SPECTalyzer - Intensity analysis of SPECT/DICOM volumes
//!
//! A volume is a stack of 2-D frames of 16-bit samples. The analysis
//! estimates a percentile threshold over the non-zero voxels, aggregates
//! every frame, finds the "hot window" of consecutive frames with the
//! greatest total (by frame sum or by above-threshold count), and
//! characterises that window with a 100-bin histogram and a threshold
//! voxel exceedance (TVE) figure.
//!
//! # Example
//!
//! ```
//! use spectalyzer::{AnalysisParams, HistogramScale, Selection, Volume, VolumeAnalysis};
//!
//! // 4 frames of 2 pixels
//! let volume = Volume::new(vec![1, 1, 9, 2, 8, 3, 0, 1], 4, 2).unwrap();
//! let params = AnalysisParams::default().with_rolling_width(2);
//! let analysis = VolumeAnalysis::run(&volume, &params).unwrap();
//!
//! assert_eq!(analysis.rolling(Selection::BySum).max_start(), 1);
//! let tve = analysis.tve(Selection::BySum, 0.3).unwrap();
//! assert_eq!(tve.count, 1);
//!
//! let histogram = analysis
//!     .histogram(Selection::BySum, HistogramScale::Linear)
//!     .unwrap();
//! assert_eq!(histogram.total(), 4);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use spectalyzer_core::*;

// Re-export the outer layers as modules to avoid name conflicts
pub use spectalyzer_io as io;
pub use spectalyzer_report as report;
