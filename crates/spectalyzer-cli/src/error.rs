//! CLI error type

use std::path::PathBuf;
use thiserror::Error;

/// Every failure that ends a run with a non-zero exit code
#[derive(Error, Debug)]
pub enum CliError {
    /// The volume file does not exist
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The parameter file cannot be read
    #[error("cannot read parameter file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Decoding the volume failed
    #[error("failed to read volume: {0}")]
    Decode(#[from] spectalyzer_io::IoError),

    /// Invalid parameters or a volume without signal
    #[error(transparent)]
    Analysis(#[from] spectalyzer_core::Error),

    /// Writing to stdout failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
