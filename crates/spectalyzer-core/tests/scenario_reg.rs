//! Hand-checked scenarios for each analysis stage

use spectalyzer_core::{
    AnalysisParams, HistogramScale, Selection, Volume, VolumeAnalysis, aggregate_frames,
    bin_index, compute_tve, count_series, estimate_threshold, rolling_totals, sum_series,
};
use spectalyzer_test::{RegParams, volumes};

#[test]
fn scenario_reg() {
    let mut rp = RegParams::new("scenario");

    // --- Threshold and frame aggregation on a six-sample volume ---
    // frames [1,2] [3,4] [5,6]; threshold_percent 0 -> smallest non-zero
    let vol = Volume::new(vec![1, 2, 3, 4, 5, 6], 3, 2).expect("volume");
    let threshold = estimate_threshold(&vol, 0.0).expect("threshold");
    rp.compare_values(1.0, threshold as f64, 0.0);
    let stats = aggregate_frames(&vol, threshold);
    rp.compare_counts(&[3, 7, 11], &sum_series(&stats));
    // strictly above 1: frame 0 has only the 2, frames 1 and 2 both samples
    rp.compare_counts(&[1, 2, 2], &count_series(&stats));

    // --- Rolling width 1 reproduces the series ---
    let (totals, max_start) = rolling_totals(&[10, 20, 15], 1).expect("rolling");
    rp.compare_counts(&[10, 20, 15], &totals);
    rp.compare_values(1.0, max_start as f64, 0.0);

    // --- TVE of a descending run ---
    let tve = compute_tve(&[5, 4, 3, 2, 1], 0.3).expect("tve");
    rp.compare_values(15.0, tve.total as f64, 0.0);
    rp.compare_values(4.0, tve.cutoff as f64, 0.0);
    rp.compare_values(1.0, tve.count as f64, 0.0);
    rp.compare_values(20.0, tve.percentage, 1e-12);

    // --- Log histogram bin ---
    rp.compare_values(
        47.0,
        bin_index(3, 0, 5, HistogramScale::Logarithmic) as f64,
        0.0,
    );

    assert!(rp.cleanup(), "scenario regression test failed");
}

#[test]
fn ramp_volume_reg() {
    let mut rp = RegParams::new("ramp_volume");

    // 10 frames of 3x3, frame f holds f + 1: the last window is hottest
    let vol = volumes::ramp_volume(10, 3, 3);
    let params = AnalysisParams::default()
        .with_rolling_width(4)
        .with_threshold_percent(0.5);
    let analysis = VolumeAnalysis::run(&vol, &params).expect("analysis");

    // 90 non-zero values, index floor(0.5 * 90) = 45 in decreasing order
    rp.compare_values(5.0, analysis.threshold() as f64, 0.0);
    rp.compare_values(1.0, analysis.overall_min() as f64, 0.0);
    rp.compare_values(10.0, analysis.overall_max() as f64, 0.0);

    let by_sum = analysis.rolling(Selection::BySum);
    rp.compare_values(6.0, by_sum.max_start() as f64, 0.0);
    rp.compare_values(((7 + 8 + 9 + 10) * 9) as f64, by_sum.max_total() as f64, 0.0);
    rp.compare_values(7.0, by_sum.window_min() as f64, 0.0);
    rp.compare_values(10.0, by_sum.window_max() as f64, 0.0);

    // Linear histogram over [7, 10]: 7 -> 0, 8 -> 33, 9 -> 66, 10 -> 99
    let hist = analysis
        .histogram(Selection::BySum, HistogramScale::Linear)
        .expect("histogram");
    let bins = hist.bins();
    rp.compare_counts(&[9, 9, 9, 9], &[bins[0], bins[33], bins[66], bins[99]]);

    // Constant volume: every window ties, the first wins
    let vol = volumes::constant_volume(5, 2, 2, 8);
    let params = AnalysisParams::default().with_rolling_width(2);
    let analysis = VolumeAnalysis::run(&vol, &params).expect("analysis");
    rp.compare_values(0.0, analysis.rolling(Selection::BySum).max_start() as f64, 0.0);
    // nothing is strictly above the threshold of a constant volume
    rp.compare_values(0.0, analysis.rolling(Selection::ByCount).max_total() as f64, 0.0);

    assert!(rp.cleanup(), "ramp_volume regression test failed");
}
