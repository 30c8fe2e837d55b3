//! Command execution

use crate::cli::{Cli, Command};
use crate::error::CliError;
use log::debug;
use spectalyzer_core::{AnalysisParams, HistogramScale, Selection, VolumeAnalysis};
use spectalyzer_report::{
    render_frame_stats, render_histogram, render_rolling, render_tve, write_pixel_data,
};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};

/// Merge the parameter file (if any) with explicit flags.
pub fn resolve_params(cli: &Cli) -> Result<AnalysisParams, CliError> {
    let mut params = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
                path: path.clone(),
                source,
            })?;
            AnalysisParams::from_json(&text)?
        }
        None => AnalysisParams::default(),
    };

    if let Some(threshold_percent) = cli.threshold_percent {
        params.threshold_percent = threshold_percent;
    }
    if let Some(rolling_width) = cli.rolling_width {
        params.rolling_width = rolling_width;
    }
    if let Some(tve_factor) = cli.tve_factor {
        params.tve_factor = tve_factor;
    }

    params.validate()?;
    Ok(params)
}

/// Execute every requested command against the volume file.
///
/// Tables go to stdout in command declaration order. The analysis runs
/// once and only when some command needs it.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let params = resolve_params(cli)?;
    debug!("analysis parameters: {:?}", params);

    if !cli.file.is_file() {
        return Err(CliError::FileNotFound(cli.file.clone()));
    }
    let volume = spectalyzer_io::read_volume(&cli.file)?;
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    let commands: BTreeSet<Command> = cli.commands.iter().copied().collect();
    let analysis = if commands.iter().any(|&c| c != Command::PixelData) {
        Some(VolumeAnalysis::run(&volume, &params)?)
    } else {
        None
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for command in commands {
        if command == Command::PixelData {
            write_pixel_data(&volume, &mut out)?;
            continue;
        }
        if let Some(analysis) = &analysis {
            let table = render_table(command, analysis, &file_name)?;
            writeln!(out, "{}", table)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Render the table of one analysis command.
fn render_table(
    command: Command,
    analysis: &VolumeAnalysis<'_>,
    file_name: &str,
) -> Result<String, CliError> {
    let tve_factor = analysis.params().tve_factor;
    let table = match command {
        Command::SliceData => render_frame_stats(analysis)?,
        Command::Rolling => render_rolling(analysis)?,
        Command::TveBySum => {
            render_tve(file_name, Selection::BySum, &analysis.tve(Selection::BySum, tve_factor)?)
        }
        Command::TveByCount => render_tve(
            file_name,
            Selection::ByCount,
            &analysis.tve(Selection::ByCount, tve_factor)?,
        ),
        Command::HistoBySum => {
            histogram_table(analysis, file_name, Selection::BySum, HistogramScale::Linear)?
        }
        Command::HistoByCount => {
            histogram_table(analysis, file_name, Selection::ByCount, HistogramScale::Linear)?
        }
        Command::HistoLogBySum => histogram_table(
            analysis,
            file_name,
            Selection::BySum,
            HistogramScale::Logarithmic,
        )?,
        Command::HistoLogByCount => histogram_table(
            analysis,
            file_name,
            Selection::ByCount,
            HistogramScale::Logarithmic,
        )?,
        // streamed by the caller
        Command::PixelData => String::new(),
    };
    Ok(table)
}

fn histogram_table(
    analysis: &VolumeAnalysis<'_>,
    file_name: &str,
    selection: Selection,
    scale: HistogramScale,
) -> Result<String, CliError> {
    let histogram = analysis.histogram(selection, scale)?;
    Ok(render_histogram(file_name, selection, &histogram))
}
