//! spectalyzer-test - Regression test framework for SPECTalyzer
//!
//! Every `tests/*_reg.rs` file drives one [`RegParams`] through a series of
//! numbered checks and asserts on [`RegParams::cleanup`]. Two modes are
//! supported:
//!
//! - **Compare**: Run every check, record failures (default)
//! - **Display**: Same checks, and also keep the rendered outputs in
//!   `tests/regout` for inspection
//!
//! The [`volumes`] module builds deterministic synthetic volumes, and
//! [`write_test_volume`] stores one as a multi-page TIFF for tests that
//! need a file on disk.
//!
//! # Usage
//!
//! ```ignore
//! use spectalyzer_test::{RegParams, volumes};
//!
//! let vol = volumes::ramp_volume(8, 4, 4);
//! let mut rp = RegParams::new("frame");
//! rp.compare_values(8.0, vol.frame_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;
pub mod volumes;

use std::path::Path;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use spectalyzer_core::Volume;

/// Write `volume` as a 16-bit multi-page TIFF at `path`.
///
/// The volume must carry a frame geometry; all builders in [`volumes`]
/// produce one.
pub fn write_test_volume(volume: &Volume, path: &Path) -> TestResult<()> {
    spectalyzer_io::write_tiff_volume_file(volume, path).map_err(|e| TestError::VolumeWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
pub fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // spectalyzer-test is at crates/spectalyzer-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
