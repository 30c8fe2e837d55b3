//! TVE and histogram reports
//!
//! Both start with a header naming the source file and the hot-window
//! selection, so reports of several files can be concatenated.

use crate::join_row;
use spectalyzer_core::{Histogram, Selection, TveResult};

/// Two-line TVE report.
///
/// `Factor` and `Percentage` are printed with three decimals.
pub fn render_tve(file: &str, selection: Selection, tve: &TveResult) -> String {
    let header = join_row([
        "File",
        "NumVoxels",
        "Total",
        "Factor",
        "Mode",
        "Cutoff",
        "Count",
        "Percentage",
    ]);
    let row = join_row([
        file.to_string(),
        tve.voxel_count.to_string(),
        tve.total.to_string(),
        format!("{:.3}", tve.factor),
        selection.to_string(),
        tve.cutoff.to_string(),
        tve.count.to_string(),
        format!("{:.3}", tve.percentage),
    ]);
    [header, row].join("\n")
}

/// Histogram report: description header and line, `Signal Count` header,
/// then one line per bin.
///
/// `Min` and `Max` are the range the bins were scaled to.
pub fn render_histogram(file: &str, selection: Selection, histogram: &Histogram) -> String {
    let mut lines = Vec::with_capacity(histogram.bins().len() + 3);
    lines.push(join_row(["File", "CalcMode", "HistoMode", "Min", "Max"]));
    lines.push(join_row([
        file.to_string(),
        selection.to_string(),
        histogram.scale().to_string(),
        histogram.min().to_string(),
        histogram.max().to_string(),
    ]));
    lines.push(join_row(["Signal", "Count"]));
    for (i, count) in histogram.bins().iter().enumerate() {
        lines.push(join_row([i.to_string(), count.to_string()]));
    }
    lines.join("\n")
}
