//! Report rendering regression test
//!
//! Renders every table for a synthetic pulse volume and checks shape and
//! key fields.
//!
//! Run with:
//! ```
//! cargo test -p spectalyzer-report --test report_reg -- --nocapture
//! ```

use spectalyzer_core::{AnalysisParams, HISTOGRAM_BINS, HistogramScale, Selection, VolumeAnalysis};
use spectalyzer_report::{
    SEPARATOR, render_frame_stats, render_histogram, render_rolling, render_tve,
    write_pixel_data,
};
use spectalyzer_test::{RegParams, volumes};

#[test]
fn report_reg() {
    let mut rp = RegParams::new("report");

    // 20 frames of 4x4, frames 8..13 raised to 500
    let vol = volumes::pulse_volume(20, 4, 4, 10, 500, 8, 5);
    let params = AnalysisParams::default().with_rolling_width(5);
    let analysis = VolumeAnalysis::run(&vol, &params).expect("analysis");

    // ================================================================
    // Test 0: Pixel dump has one line per sample
    // ================================================================
    {
        let mut out = Vec::new();
        write_pixel_data(&vol, &mut out).expect("pixel dump");
        let text = String::from_utf8(out).expect("utf8");
        rp.compare_values(vol.len() as f64, text.lines().count() as f64, 0.0);
        rp.write_data(text.as_bytes(), "txt").expect("keep pixel dump");
    }

    // ================================================================
    // Test 1: Frame stats table
    // ================================================================
    {
        let table = render_frame_stats(&analysis).expect("frame stats");
        let lines: Vec<&str> = table.lines().collect();
        rp.compare_values(21.0, lines.len() as f64, 0.0);
        let fields: Vec<&str> = lines[9].split(SEPARATOR).collect();
        // frame 8: 16 samples of 500
        rp.compare_strings(b"8", fields[0].as_bytes());
        rp.compare_strings(b"8000", fields[3].as_bytes());
        rp.compare_strings(b"500", fields[7].as_bytes());
        rp.write_data(table.as_bytes(), "tsv").expect("keep frame stats");
    }

    // ================================================================
    // Test 2: Rolling table lists all 16 windows and the pulse start
    // ================================================================
    {
        let table = render_rolling(&analysis).expect("rolling");
        let lines: Vec<&str> = table.lines().collect();
        rp.compare_values(17.0, lines.len() as f64, 0.0);
        let last: Vec<&str> = lines[16].split(SEPARATOR).collect();
        rp.compare_strings(b"15", last[0].as_bytes());
        rp.compare_strings(b"8", last[2].as_bytes());
        rp.compare_strings(b"5", last[5].as_bytes());
    }

    // ================================================================
    // Test 3: TVE and histogram of the hot window
    // ================================================================
    {
        let tve = analysis.tve(Selection::BySum, 0.3).expect("tve");
        let text = render_tve("pulse.tif", Selection::BySum, &tve);
        let row: Vec<&str> = text.lines().nth(1).unwrap_or("").split(SEPARATOR).collect();
        rp.compare_strings(b"80", row[1].as_bytes());
        rp.compare_strings(b"BySum", row[4].as_bytes());

        let hist = analysis
            .histogram(Selection::ByCount, HistogramScale::Linear)
            .expect("histogram");
        let text = render_histogram("pulse.tif", Selection::ByCount, &hist);
        let row: Vec<&str> = text.lines().nth(1).unwrap_or("").split(SEPARATOR).collect();
        rp.compare_strings(b"ByCount", row[1].as_bytes());
        rp.compare_strings(b"Normal", row[2].as_bytes());
        rp.compare_values(
            (HISTOGRAM_BINS + 3) as f64,
            text.lines().count() as f64,
            0.0,
        );
        rp.write_data(text.as_bytes(), "tsv").expect("keep histogram");
    }

    assert!(rp.cleanup(), "report regression test failed");
}
