//! Per-frame and rolling-window tables

use crate::join_row;
use spectalyzer_core::{Result, Selection, VolumeAnalysis};

const FRAME_STATS_HEADER: [&str; 8] = [
    "Slice",
    "Min",
    "Max",
    "Sum",
    "PixelsAboveThreshold",
    "ThresholdFactor",
    "OverallMin",
    "OverallMax",
];

const ROLLING_HEADER: [&str; 6] = [
    "StartIndex",
    "Sum",
    "MaxSumIndex",
    "Count",
    "MaxCountIndex",
    "RollingWidth",
];

/// Header line of the frame statistics table.
pub fn render_frame_stats_header() -> String {
    join_row(FRAME_STATS_HEADER)
}

/// One frame statistics line.
///
/// `ThresholdFactor` echoes the threshold percent the run used; the
/// overall min and max repeat on every line.
///
/// # Errors
///
/// Returns [`spectalyzer_core::Error::IndexOutOfBounds`] if `row` is not a
/// frame index.
pub fn render_frame_stats_row(analysis: &VolumeAnalysis<'_>, row: usize) -> Result<String> {
    let stats = analysis.frame(row)?;
    Ok(join_row([
        row.to_string(),
        stats.min.to_string(),
        stats.max.to_string(),
        stats.sum.to_string(),
        stats.count_above_threshold.to_string(),
        analysis.params().threshold_percent.to_string(),
        analysis.overall_min().to_string(),
        analysis.overall_max().to_string(),
    ]))
}

/// Full frame statistics table, one line per frame.
pub fn render_frame_stats(analysis: &VolumeAnalysis<'_>) -> Result<String> {
    let mut lines = Vec::with_capacity(analysis.frames().len() + 1);
    lines.push(render_frame_stats_header());
    for row in 0..analysis.frames().len() {
        lines.push(render_frame_stats_row(analysis, row)?);
    }
    Ok(lines.join("\n"))
}

/// Header line of the rolling table.
pub fn render_rolling_header() -> String {
    join_row(ROLLING_HEADER)
}

/// One rolling line for the window starting at `start`.
///
/// # Errors
///
/// Returns [`spectalyzer_core::Error::IndexOutOfBounds`] if `start` is not
/// a window start.
pub fn render_rolling_row(analysis: &VolumeAnalysis<'_>, start: usize) -> Result<String> {
    let by_sum = analysis.rolling(Selection::BySum);
    let by_count = analysis.rolling(Selection::ByCount);
    Ok(join_row([
        start.to_string(),
        by_sum.total(start)?.to_string(),
        by_sum.max_start().to_string(),
        by_count.total(start)?.to_string(),
        by_count.max_start().to_string(),
        by_sum.width().to_string(),
    ]))
}

/// Full rolling table, one line per window start.
pub fn render_rolling(analysis: &VolumeAnalysis<'_>) -> Result<String> {
    let starts = analysis.rolling(Selection::BySum).len();
    let mut lines = Vec::with_capacity(starts + 1);
    lines.push(render_rolling_header());
    for start in 0..starts {
        lines.push(render_rolling_row(analysis, start)?);
    }
    Ok(lines.join("\n"))
}
