//! Error types for spectalyzer-core
//!
//! Every failure in the analysis pipeline is a deterministic input
//! validation failure: a malformed volume, a volume without signal, an
//! out-of-range parameter, or a row request outside the computed tables.
//! Nothing here is transient, so nothing is retried.

use thiserror::Error;

/// Spectalyzer core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Zero frames or zero pixels per frame
    #[error("invalid volume dimensions: {frame_count} frames x {pixels_per_frame} pixels")]
    InvalidDimension {
        frame_count: usize,
        pixels_per_frame: usize,
    },

    /// Sample buffer does not match the declared geometry
    #[error("sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// No usable data (e.g. no non-zero voxels for threshold estimation)
    #[error("empty data: {0}")]
    EmptyData(&'static str),

    /// Out-of-range analysis parameter or unreadable parameter file
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Row, frame or bin index outside the valid range
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for spectalyzer operations
pub type Result<T> = std::result::Result<T, Error>;
