//! SPECTalyzer Report - Tab-separated result tables
//!
//! Every renderer turns an analysis value into plain text: a fixed header
//! line followed by data lines, fields joined by [`SEPARATOR`], lines
//! joined by `\n` without a trailing newline. Numbers are formatted with
//! Rust's `Display`, so output does not depend on the host locale.
//!
//! | Table | Renderer |
//! |-------|----------|
//! | Raw samples | [`write_pixel_data`] |
//! | Per-frame statistics | [`render_frame_stats`] |
//! | Rolling windows | [`render_rolling`] |
//! | TVE | [`render_tve`] |
//! | Histogram | [`render_histogram`] |

pub mod frames;
pub mod pixel;
pub mod summary;

pub use frames::{
    render_frame_stats, render_frame_stats_header, render_frame_stats_row, render_rolling,
    render_rolling_header, render_rolling_row,
};
pub use pixel::write_pixel_data;
pub use summary::{render_histogram, render_tve};

/// Field separator used by every table.
pub const SEPARATOR: &str = "\t";

/// Join fields into one table line.
pub(crate) fn join_row<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            line.push_str(SEPARATOR);
        }
        line.push_str(field.as_ref());
    }
    line
}
