//! Analysis parameters
//!
//! [`AnalysisParams`] gathers the three tunables of an analysis run. It can
//! be built in code, starting from [`Default`], or loaded from a JSON file
//! in which any field may be omitted:
//!
//! ```json
//! { "threshold_percent": 0.1, "rolling_width": 100, "tve_factor": 0.3 }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default fraction of non-zero voxels expected above the threshold.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 0.1;

/// Default rolling window width, in frames.
pub const DEFAULT_ROLLING_WIDTH: usize = 100;

/// Default fraction of the subset total used as the TVE cutoff.
pub const DEFAULT_TVE_FACTOR: f64 = 0.3;

/// Tunables for a single analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisParams {
    /// Percentile selector for the threshold, in `[0, 1)`.
    pub threshold_percent: f64,
    /// Rolling window width in frames, `>= 1`.
    pub rolling_width: usize,
    /// TVE cutoff fraction, in `(0, 1]`.
    pub tve_factor: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            rolling_width: DEFAULT_ROLLING_WIDTH,
            tve_factor: DEFAULT_TVE_FACTOR,
        }
    }
}

impl AnalysisParams {
    /// Set the threshold percentile.
    pub fn with_threshold_percent(mut self, threshold_percent: f64) -> Self {
        self.threshold_percent = threshold_percent;
        self
    }

    /// Set the rolling window width.
    pub fn with_rolling_width(mut self, rolling_width: usize) -> Self {
        self.rolling_width = rolling_width;
        self
    }

    /// Set the TVE cutoff fraction.
    pub fn with_tve_factor(mut self, tve_factor: f64) -> Self {
        self.tve_factor = tve_factor;
        self
    }

    /// Parse parameters from JSON text. Missing fields take their defaults.
    ///
    /// The parsed values are not validated; call [`AnalysisParams::validate`]
    /// once all overrides have been applied.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| Error::Configuration(format!("invalid parameter file: {e}")))
    }

    /// Serialize the parameters as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Configuration(format!("cannot serialize parameters: {e}")))
    }

    /// Check every field against its valid range.
    ///
    /// The frame-count bound on `rolling_width` depends on the volume and is
    /// checked separately by [`validate_rolling_width`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        validate_threshold_percent(self.threshold_percent)?;
        validate_tve_factor(self.tve_factor)?;
        if self.rolling_width == 0 {
            return Err(Error::Configuration(
                "rolling width must be at least 1 frame".to_string(),
            ));
        }
        Ok(())
    }
}

/// Require `threshold_percent` in `[0, 1)`.
pub fn validate_threshold_percent(threshold_percent: f64) -> Result<()> {
    if !(0.0..1.0).contains(&threshold_percent) {
        return Err(Error::Configuration(format!(
            "threshold percent {threshold_percent} not in [0.0, 1.0)"
        )));
    }
    Ok(())
}

/// Require `factor` in `(0, 1]`.
pub fn validate_tve_factor(factor: f64) -> Result<()> {
    if !(factor > 0.0 && factor <= 1.0) {
        return Err(Error::Configuration(format!(
            "TVE factor {factor} not in (0.0, 1.0]"
        )));
    }
    Ok(())
}

/// Require `1 <= width <= frame_count`.
///
/// A window wider than the volume is reported, never clamped.
pub fn validate_rolling_width(width: usize, frame_count: usize) -> Result<()> {
    if width == 0 {
        return Err(Error::Configuration(
            "rolling width must be at least 1 frame".to_string(),
        ));
    }
    if width > frame_count {
        return Err(Error::Configuration(format!(
            "rolling width {width} exceeds frame count {frame_count}"
        )));
    }
    Ok(())
}
