//! Volume format detection
//!
//! Detects volume formats by examining magic numbers in the file header.
//! File extensions are never consulted.

use crate::{IoError, IoResult};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for format detection
mod magic {
    /// DICOM Part 10: "DICM" after the 128-byte preamble
    pub const DICM: &[u8] = b"DICM";
    pub const DICM_OFFSET: usize = 128;

    /// TIFF little-endian: II 2A 00
    pub const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];

    /// TIFF big-endian: MM 00 2A
    pub const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];
}

/// Bytes needed to recognise every supported format.
const HEADER_LEN: usize = magic::DICM_OFFSET + 4;

/// Supported volume container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeFormat {
    /// DICOM Part 10 file with native pixel data
    Dicom,
    /// Multipage TIFF, one page per frame
    Tiff,
}

impl fmt::Display for VolumeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeFormat::Dicom => write!(f, "DICOM"),
            VolumeFormat::Tiff => write!(f, "TIFF"),
        }
    }
}

/// Detect volume format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<VolumeFormat> {
    let file = File::open(path).map_err(IoError::Io)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64)
        .read_to_end(&mut header)
        .map_err(IoError::Io)?;
    detect_format_from_bytes(&header)
}

/// Detect volume format from the leading bytes of a file
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<VolumeFormat> {
    if data.len() < 4 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    // Check TIFF
    if data.starts_with(magic::TIFF_LE) || data.starts_with(magic::TIFF_BE) {
        return Ok(VolumeFormat::Tiff);
    }

    // Check DICOM (needs preamble + 4 bytes)
    if data.len() >= HEADER_LEN && &data[magic::DICM_OFFSET..HEADER_LEN] == magic::DICM {
        return Ok(VolumeFormat::Dicom);
    }

    Err(IoError::UnsupportedFormat(
        "unknown volume format".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dicom_preamble() -> Vec<u8> {
        let mut data = vec![0u8; 128];
        data.extend_from_slice(b"DICM");
        data
    }

    #[test]
    fn test_detect_dicom() {
        let data = dicom_preamble();
        assert_eq!(detect_format_from_bytes(&data).unwrap(), VolumeFormat::Dicom);
    }

    #[test]
    fn test_detect_tiff_both_byte_orders() {
        let le = [0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
        let be = [0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08];
        assert_eq!(detect_format_from_bytes(&le).unwrap(), VolumeFormat::Tiff);
        assert_eq!(detect_format_from_bytes(&be).unwrap(), VolumeFormat::Tiff);
    }

    #[test]
    fn test_dicm_at_wrong_offset() {
        let mut data = b"DICM".to_vec();
        data.resize(200, 0);
        assert!(matches!(
            detect_format_from_bytes(&data),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_truncated_preamble() {
        let data = vec![0u8; 100];
        assert!(matches!(
            detect_format_from_bytes(&data),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"II"),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(VolumeFormat::Dicom.to_string(), "DICOM");
        assert_eq!(VolumeFormat::Tiff.to_string(), "TIFF");
    }
}
