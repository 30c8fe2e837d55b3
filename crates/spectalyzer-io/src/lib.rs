//! SPECTalyzer I/O - Volume decoding
//!
//! Reads a volume file into a [`spectalyzer_core::Volume`]. The container
//! format is detected from magic bytes, never from the file extension.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | DICOM Part 10, native 16-bit | Yes | Yes | `dicom-format` |
//! | Multipage TIFF, 8/16-bit gray | Yes | Yes (16-bit) | `tiff-format` |
//!
//! Both features are enabled by default.

mod error;
mod format;
mod header;

#[cfg(feature = "dicom-format")]
pub mod dicom;
#[cfg(feature = "tiff-format")]
pub mod tiff;

pub use error::{IoError, IoResult};
pub use format::{VolumeFormat, detect_format, detect_format_from_bytes};
pub use header::{VolumeHeader, read_volume_header};

#[cfg(feature = "dicom-format")]
pub use dicom::{read_dicom_volume, samples_from_le_bytes, write_dicom_volume_file};
#[cfg(feature = "tiff-format")]
pub use self::tiff::{
    read_tiff_volume, read_tiff_volume_file, write_tiff_volume, write_tiff_volume_file,
};

use log::info;
use spectalyzer_core::Volume;
use std::path::Path;

/// Read a volume from a file path
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be opened
/// - [`IoError::UnsupportedFormat`] for unknown or disabled formats
/// - [`IoError::DecodeError`] / [`IoError::InvalidData`] for malformed files
pub fn read_volume<P: AsRef<Path>>(path: P) -> IoResult<Volume> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let volume = read_volume_with_format(path, format)?;
    info!(
        "read {} volume {}: {} frames x {} pixels",
        format,
        path.display(),
        volume.frame_count(),
        volume.pixels_per_frame()
    );
    Ok(volume)
}

/// Read a volume with a specific format
fn read_volume_with_format(path: &Path, format: VolumeFormat) -> IoResult<Volume> {
    match format {
        #[cfg(feature = "dicom-format")]
        VolumeFormat::Dicom => dicom::read_dicom_volume(path),

        #[cfg(feature = "tiff-format")]
        VolumeFormat::Tiff => self::tiff::read_tiff_volume_file(path),

        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(format!(
            "{} support is not enabled",
            format
        ))),
    }
}
