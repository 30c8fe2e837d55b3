//! spectalyzer - print intensity analysis tables for a SPECT/DICOM volume
//!
//! ```text
//! spectalyzer [OPTIONS] <COMMAND>... <FILE>
//! ```

mod cli;
mod error;
mod run;

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;
use std::process::ExitCode;

use crate::cli::Cli;

/// Install the logger: `RUST_LOG` applies unless `-v` is given.
fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    builder.init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("spectalyzer: {}", e);
            ExitCode::FAILURE
        }
    }
}
