//! Command-line definition

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Table to print
///
/// Declaration order is output order: several commands in one call are
/// printed in this order, each once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Command {
    /// Every raw sample, one per line
    #[value(alias = "pixeldata")]
    PixelData,
    /// Per-frame min, max, sum and above-threshold count
    #[value(alias = "slicedata")]
    SliceData,
    /// Rolling window totals of both series
    Rolling,
    /// TVE of the hot window by frame sum
    #[value(alias = "tvebysum")]
    TveBySum,
    /// TVE of the hot window by above-threshold count
    #[value(alias = "tvebycount")]
    TveByCount,
    /// Linear histogram of the hot window by frame sum
    #[value(alias = "histobysum")]
    HistoBySum,
    /// Linear histogram of the hot window by above-threshold count
    #[value(alias = "histobycount")]
    HistoByCount,
    /// Log10 histogram of the hot window by frame sum
    #[value(alias = "histologbysum")]
    HistoLogBySum,
    /// Log10 histogram of the hot window by above-threshold count
    #[value(alias = "histologbycount")]
    HistoLogByCount,
}

#[derive(Debug, Parser)]
#[command(name = "spectalyzer")]
#[command(
    version,
    about = "Intensity analysis of SPECT/DICOM volumes",
    long_about = None
)]
pub struct Cli {
    /// Tables to print (case-insensitive)
    #[arg(value_enum, ignore_case = true, required = true, num_args = 1.., value_name = "COMMAND")]
    pub commands: Vec<Command>,

    /// Volume file: DICOM or multipage TIFF
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Fraction of non-zero voxels expected above the threshold, in [0, 1)
    #[arg(long, value_name = "FRACTION")]
    pub threshold_percent: Option<f64>,

    /// Rolling window width in frames
    #[arg(long, value_name = "FRAMES")]
    pub rolling_width: Option<usize>,

    /// TVE cutoff as a fraction of the hot-window total, in (0, 1]
    #[arg(long, value_name = "FRACTION")]
    pub tve_factor: Option<f64>,

    /// JSON parameter file; explicit flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
