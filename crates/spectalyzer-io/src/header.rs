//! Volume header reading
//!
//! Provides geometry extraction from volume files without decoding pixel
//! data.

use crate::{IoError, IoResult, VolumeFormat, detect_format};
use std::path::Path;

/// Volume geometry read without decoding samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeHeader {
    /// Detected container format
    pub format: VolumeFormat,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Number of frames
    pub frame_count: usize,
}

impl VolumeHeader {
    /// Pixels in one frame.
    pub fn pixels_per_frame(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Read volume geometry from a file path without decoding pixel data
pub fn read_volume_header<P: AsRef<Path>>(path: P) -> IoResult<VolumeHeader> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    read_header_for_format(path, format)
}

/// Read header for a specific format
fn read_header_for_format(path: &Path, format: VolumeFormat) -> IoResult<VolumeHeader> {
    match format {
        #[cfg(feature = "dicom-format")]
        VolumeFormat::Dicom => crate::dicom::read_header_dicom(path),

        #[cfg(feature = "tiff-format")]
        VolumeFormat::Tiff => {
            let file = std::fs::File::open(path).map_err(IoError::Io)?;
            crate::tiff::read_header_tiff(std::io::BufReader::new(file))
        }

        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(format!(
            "{} support is not enabled",
            format
        ))),
    }
}
