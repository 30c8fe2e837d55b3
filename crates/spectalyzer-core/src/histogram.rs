//! Fixed 100-bin intensity histograms
//!
//! Samples are placed relative to a `[min, max]` range, normally the range
//! observed inside a hot window:
//!
//! - Linear: `bin = floor((v - min) / max(1, max - min) * 100)`
//! - Logarithmic: `bin = floor(log10(max(1, v - min)) / log10(max(10, max - min)) * 100)`
//!
//! Both are clamped to `[0, 99]`. The `max(1, ..)` guard keeps `log10`
//! away from zero and the `max(10, ..)` guard keeps the divisor above one.

use std::fmt;

use crate::error::{Error, Result};

/// Number of bins in every histogram.
pub const HISTOGRAM_BINS: usize = 100;

/// Bin scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HistogramScale {
    /// Equal-width bins over `[min, max]`
    #[default]
    Linear,
    /// Bins equal-width in `log10(v - min)`
    Logarithmic,
}

impl fmt::Display for HistogramScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistogramScale::Linear => write!(f, "Normal"),
            HistogramScale::Logarithmic => write!(f, "Log10"),
        }
    }
}

/// Bin counts plus the parameters used to build them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; HISTOGRAM_BINS],
    scale: HistogramScale,
    min: u16,
    max: u16,
}

impl Histogram {
    /// Counts per bin, bin 0 first.
    pub fn bins(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.bins
    }

    /// Count of bin `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= HISTOGRAM_BINS`.
    pub fn count(&self, index: usize) -> Result<u64> {
        self.bins
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: HISTOGRAM_BINS,
            })
    }

    /// Scale used to build the histogram.
    pub fn scale(&self) -> HistogramScale {
        self.scale
    }

    /// Lower end of the scaling range.
    pub fn min(&self) -> u16 {
        self.min
    }

    /// Upper end of the scaling range.
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Sum of all bin counts (the number of binned samples).
    pub fn total(&self) -> u64 {
        self.bins.iter().sum()
    }
}

/// Bin index of one sample.
///
/// # Examples
///
/// ```
/// use spectalyzer_core::{HistogramScale, bin_index};
///
/// // divisor is raised to 10, so log10(3) / log10(10) * 100 = 47.7
/// assert_eq!(bin_index(3, 0, 5, HistogramScale::Logarithmic), 47);
/// assert_eq!(bin_index(5, 0, 10, HistogramScale::Linear), 50);
/// ```
pub fn bin_index(value: u16, min: u16, max: u16, scale: HistogramScale) -> usize {
    let offset = f64::from(value) - f64::from(min);
    let range = f64::from(max) - f64::from(min);
    let position = match scale {
        HistogramScale::Linear => {
            let divisor = range.max(1.0);
            (offset / divisor * 100.0).floor()
        }
        HistogramScale::Logarithmic => {
            let divisor = range.max(10.0);
            (offset.max(1.0).log10() / divisor.log10() * 100.0).floor()
        }
    };
    position.clamp(0.0, (HISTOGRAM_BINS - 1) as f64) as usize
}

/// Build a histogram of `samples` scaled to `[min, max]`.
///
/// Every sample lands in exactly one bin, so the bin counts sum to
/// `samples.len()`.
pub fn make_histogram(samples: &[u16], min: u16, max: u16, scale: HistogramScale) -> Histogram {
    let mut bins = [0u64; HISTOGRAM_BINS];
    for &v in samples {
        bins[bin_index(v, min, max, scale)] += 1;
    }
    Histogram {
        bins,
        scale,
        min,
        max,
    }
}
