//! DICOM Part 10 volume support
//!
//! Reads single- and multi-frame DICOM files with native (uncompressed)
//! 16-bit pixel data. Frames are stored back to back in the `PixelData`
//! element; each sample is two little-endian bytes, `high * 256 + low`.
//! Encapsulated pixel data (JPEG, RLE, ...) is rejected.

use crate::header::VolumeHeader;
use crate::{IoError, IoResult, VolumeFormat};
use dicom_core::value::{PrimitiveValue, Value};
use dicom_core::{DataElement, Tag, VR};
use dicom_dictionary_std::{tags, uids};
use dicom_object::{
    DefaultDicomObject, FileMetaTableBuilder, InMemDicomObject, OpenFileOptions, open_file,
};
use log::{debug, warn};
use spectalyzer_core::Volume;
use std::path::Path;

/// Read DICOM header metadata without loading pixel data
pub fn read_header_dicom<P: AsRef<Path>>(path: P) -> IoResult<VolumeHeader> {
    let obj = OpenFileOptions::new()
        .read_until(tags::PIXEL_DATA)
        .open_file(path.as_ref())
        .map_err(|e| IoError::DecodeError(format!("DICOM open error: {}", e)))?;
    read_image_layout(&obj)
}

/// Read a DICOM file as a volume
pub fn read_dicom_volume<P: AsRef<Path>>(path: P) -> IoResult<Volume> {
    let obj = open_file(path.as_ref())
        .map_err(|e| IoError::DecodeError(format!("DICOM open error: {}", e)))?;
    let header = read_image_layout(&obj)?;

    let pixel_data = obj
        .element(tags::PIXEL_DATA)
        .map_err(|e| IoError::DecodeError(format!("DICOM pixel data: {}", e)))?;

    let expected = header.width as usize * header.height as usize * header.frame_count;
    let samples = match pixel_data.value() {
        Value::Primitive(PrimitiveValue::U16(words)) => {
            if words.len() < expected {
                return Err(IoError::InvalidData(format!(
                    "pixel data has {} samples, expected {}",
                    words.len(),
                    expected
                )));
            }
            words[..expected].to_vec()
        }
        Value::Primitive(PrimitiveValue::U8(bytes)) => samples_from_le_bytes(bytes, expected)?,
        Value::PixelSequence(_) => {
            return Err(IoError::UnsupportedFormat(
                "encapsulated DICOM pixel data is not supported".to_string(),
            ));
        }
        _ => {
            return Err(IoError::DecodeError(
                "DICOM pixel data is not a native 16-bit value".to_string(),
            ));
        }
    };
    debug!(
        "decoded {} DICOM frames of {}x{}",
        header.frame_count, header.width, header.height
    );

    Ok(Volume::with_geometry(
        samples,
        header.width,
        header.height,
        header.frame_count,
    )?)
}

/// SOP class written by [`write_dicom_volume_file`]: Nuclear Medicine Image Storage
const NM_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.20";

/// Write a volume as a multi-frame DICOM file with native 16-bit pixel data
///
/// Only the attributes needed to read the volume back are written, under
/// the Explicit VR Little Endian transfer syntax.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if the volume carries no frame
/// geometry.
pub fn write_dicom_volume_file<P: AsRef<Path>>(volume: &Volume, path: P) -> IoResult<()> {
    let geometry = volume.geometry().ok_or_else(|| {
        IoError::InvalidData("volume has no frame geometry to write as DICOM".to_string())
    })?;
    let rows = u16::try_from(geometry.height)
        .map_err(|_| IoError::InvalidData(format!("{} rows exceed DICOM limits", geometry.height)))?;
    let columns = u16::try_from(geometry.width).map_err(|_| {
        IoError::InvalidData(format!("{} columns exceed DICOM limits", geometry.width))
    })?;

    let obj = InMemDicomObject::from_element_iter([
        DataElement::new(tags::SOP_CLASS_UID, VR::UI, PrimitiveValue::from(NM_IMAGE_STORAGE)),
        DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, PrimitiveValue::from("2.25.1")),
        DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, PrimitiveValue::from(1_u16)),
        DataElement::new(
            tags::PHOTOMETRIC_INTERPRETATION,
            VR::CS,
            PrimitiveValue::from("MONOCHROME2"),
        ),
        DataElement::new(
            tags::NUMBER_OF_FRAMES,
            VR::IS,
            PrimitiveValue::from(volume.frame_count().to_string()),
        ),
        DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(rows)),
        DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from(columns)),
        DataElement::new(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from(16_u16)),
        DataElement::new(tags::BITS_STORED, VR::US, PrimitiveValue::from(16_u16)),
        DataElement::new(tags::HIGH_BIT, VR::US, PrimitiveValue::from(15_u16)),
        DataElement::new(tags::PIXEL_REPRESENTATION, VR::US, PrimitiveValue::from(0_u16)),
        DataElement::new(
            tags::PIXEL_DATA,
            VR::OW,
            PrimitiveValue::U16(volume.samples().iter().copied().collect()),
        ),
    ]);

    let file_obj = obj
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid(NM_IMAGE_STORAGE)
                .media_storage_sop_instance_uid("2.25.1"),
        )
        .map_err(|e| IoError::EncodeError(format!("DICOM meta error: {}", e)))?;
    file_obj
        .write_to_file(path.as_ref())
        .map_err(|e| IoError::EncodeError(format!("DICOM write error: {}", e)))?;
    Ok(())
}

/// Extract and check the image layout attributes
fn read_image_layout(obj: &DefaultDicomObject) -> IoResult<VolumeHeader> {
    let height = required_u32(obj, tags::ROWS, "Rows")?;
    let width = required_u32(obj, tags::COLUMNS, "Columns")?;
    let bits_allocated = required_u32(obj, tags::BITS_ALLOCATED, "BitsAllocated")?;
    if bits_allocated != 16 {
        return Err(IoError::UnsupportedFormat(format!(
            "DICOM BitsAllocated is {}, only 16 is supported",
            bits_allocated
        )));
    }

    let samples_per_pixel = optional_u32(obj, tags::SAMPLES_PER_PIXEL)?.unwrap_or(1);
    if samples_per_pixel != 1 {
        return Err(IoError::UnsupportedFormat(format!(
            "DICOM SamplesPerPixel is {}, only grayscale is supported",
            samples_per_pixel
        )));
    }

    if optional_u32(obj, tags::PIXEL_REPRESENTATION)?.unwrap_or(0) != 0 {
        warn!("DICOM pixel data is signed; samples are read as unsigned");
    }

    let frame_count = optional_u32(obj, tags::NUMBER_OF_FRAMES)?.unwrap_or(1);

    Ok(VolumeHeader {
        format: VolumeFormat::Dicom,
        width,
        height,
        frame_count: frame_count as usize,
    })
}

fn required_u32(obj: &DefaultDicomObject, tag: Tag, name: &str) -> IoResult<u32> {
    optional_u32(obj, tag)?
        .ok_or_else(|| IoError::DecodeError(format!("DICOM attribute {} is missing", name)))
}

fn optional_u32(obj: &DefaultDicomObject, tag: Tag) -> IoResult<Option<u32>> {
    // element() only fails when the attribute is absent
    let Ok(element) = obj.element(tag) else {
        return Ok(None);
    };
    element
        .to_int::<u32>()
        .map(Some)
        .map_err(|e| IoError::DecodeError(format!("DICOM attribute {}: {}", tag, e)))
}

/// Decode little-endian 16-bit samples
///
/// Exactly `count` samples are taken; trailing bytes (such as a pad byte)
/// are ignored.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if fewer than `2 * count` bytes are
/// available.
pub fn samples_from_le_bytes(bytes: &[u8], count: usize) -> IoResult<Vec<u16>> {
    let needed = count
        .checked_mul(2)
        .ok_or_else(|| IoError::InvalidData("pixel count overflows".to_string()))?;
    if bytes.len() < needed {
        return Err(IoError::InvalidData(format!(
            "pixel data has {} bytes, expected at least {}",
            bytes.len(),
            needed
        )));
    }
    Ok(bytes[..needed]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_from_le_bytes() {
        let bytes = [0x01, 0x00, 0x00, 0x01, 0xFF, 0xFF];
        assert_eq!(samples_from_le_bytes(&bytes, 3).unwrap(), vec![1, 256, 65535]);
    }

    #[test]
    fn test_samples_ignore_trailing_bytes() {
        let bytes = [0x02, 0x01, 0x03, 0x00, 0x00];
        assert_eq!(samples_from_le_bytes(&bytes, 2).unwrap(), vec![258, 3]);
    }

    #[test]
    fn test_samples_too_short() {
        assert!(matches!(
            samples_from_le_bytes(&[0x01, 0x02, 0x03], 2),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_dicom_roundtrip() {
        let samples: Vec<u16> = (0..24).map(|i| i * 2000 + 1).collect();
        let vol = Volume::with_geometry(samples, 3, 2, 4).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.dcm");
        write_dicom_volume_file(&vol, &path).unwrap();

        let header = read_header_dicom(&path).unwrap();
        assert_eq!(header.format, VolumeFormat::Dicom);
        assert_eq!((header.width, header.height, header.frame_count), (3, 2, 4));

        let decoded = read_dicom_volume(&path).unwrap();
        assert_eq!(decoded, vol);
    }

    #[test]
    fn test_not_a_dicom_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"plain text, no preamble").unwrap();
        assert!(matches!(
            read_dicom_volume(file.path()),
            Err(IoError::DecodeError(_))
        ));
    }
}
