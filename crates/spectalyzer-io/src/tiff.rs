//! Multipage TIFF volume support
//!
//! Every page of the file is one frame. All pages must share the same
//! dimensions. 16-bit grayscale pages are taken as is; 8-bit grayscale
//! pages are widened to 16 bits.

use crate::header::VolumeHeader;
use crate::{IoError, IoResult, VolumeFormat};
use log::{debug, warn};
use spectalyzer_core::Volume;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::TiffEncoder;
use tiff::encoder::colortype::Gray16;

/// Read TIFF header metadata without decoding pixel data
///
/// Walks every page directory to count frames.
pub fn read_header_tiff<R: Read + Seek>(reader: R) -> IoResult<VolumeHeader> {
    let mut decoder = Decoder::new(reader)
        .map_err(|e| IoError::DecodeError(format!("TIFF decode error: {}", e)))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| IoError::DecodeError(format!("TIFF dimensions: {}", e)))?;

    let mut frame_count = 1;
    while decoder.more_images() {
        decoder
            .next_image()
            .map_err(|e| IoError::DecodeError(format!("TIFF page navigation error: {}", e)))?;
        frame_count += 1;
    }

    Ok(VolumeHeader {
        format: VolumeFormat::Tiff,
        width,
        height,
        frame_count,
    })
}

/// Read every page of a TIFF file as one frame of a volume
pub fn read_tiff_volume<R: Read + Seek>(reader: R) -> IoResult<Volume> {
    let mut decoder = Decoder::new(reader)
        .map_err(|e| IoError::DecodeError(format!("TIFF decode error: {}", e)))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| IoError::DecodeError(format!("TIFF dimensions: {}", e)))?;

    let mut samples = Vec::new();
    let mut frame_count = 0usize;
    loop {
        let page_dims = decoder
            .dimensions()
            .map_err(|e| IoError::DecodeError(format!("TIFF dimensions: {}", e)))?;
        if page_dims != (width, height) {
            return Err(IoError::InvalidData(format!(
                "TIFF page {} is {}x{}, expected {}x{}",
                frame_count, page_dims.0, page_dims.1, width, height
            )));
        }

        decode_tiff_page(&mut decoder, frame_count, &mut samples)?;
        frame_count += 1;

        if !decoder.more_images() {
            break;
        }
        decoder
            .next_image()
            .map_err(|e| IoError::DecodeError(format!("TIFF page navigation error: {}", e)))?;
    }

    debug!("decoded {frame_count} TIFF pages of {width}x{height}");
    Ok(Volume::with_geometry(samples, width, height, frame_count)?)
}

/// Read a multipage TIFF volume from a file path
pub fn read_tiff_volume_file<P: AsRef<Path>>(path: P) -> IoResult<Volume> {
    let file = File::open(path).map_err(IoError::Io)?;
    read_tiff_volume(BufReader::new(file))
}

/// Decode the current page and append its samples
fn decode_tiff_page<R: Read + Seek>(
    decoder: &mut Decoder<R>,
    page: usize,
    samples: &mut Vec<u16>,
) -> IoResult<()> {
    let color_type = decoder
        .colortype()
        .map_err(|e| IoError::DecodeError(format!("Failed to get TIFF color type: {}", e)))?;
    if !matches!(color_type, ColorType::Gray(8) | ColorType::Gray(16)) {
        return Err(IoError::UnsupportedFormat(format!(
            "TIFF page {} has color type {:?}; only 8- and 16-bit grayscale is supported",
            page, color_type
        )));
    }

    let image_data = decoder
        .read_image()
        .map_err(|e| IoError::DecodeError(format!("Failed to read TIFF image data: {}", e)))?;

    match image_data {
        DecodingResult::U16(data) => samples.extend_from_slice(&data),
        DecodingResult::U8(data) => {
            warn!("TIFF page {page} is 8-bit; widening samples to 16 bits");
            samples.extend(data.iter().map(|&v| u16::from(v)));
        }
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "TIFF page {} has an unsupported sample type",
                page
            )));
        }
    }
    Ok(())
}

/// Write a volume as a 16-bit grayscale multipage TIFF, one page per frame
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if the volume carries no frame
/// geometry.
pub fn write_tiff_volume<W: Write + Seek>(volume: &Volume, writer: W) -> IoResult<()> {
    let geometry = volume.geometry().ok_or_else(|| {
        IoError::InvalidData("volume has no frame geometry to write as TIFF".to_string())
    })?;

    let mut encoder = TiffEncoder::new(writer)
        .map_err(|e| IoError::EncodeError(format!("TIFF encoder error: {}", e)))?;

    for frame in volume.frames() {
        encoder
            .write_image::<Gray16>(geometry.width, geometry.height, frame)
            .map_err(|e| IoError::EncodeError(format!("TIFF write error: {}", e)))?;
    }

    Ok(())
}

/// Write a volume as a multipage TIFF file at `path`
pub fn write_tiff_volume_file<P: AsRef<Path>>(volume: &Volume, path: P) -> IoResult<()> {
    let file = File::create(path).map_err(IoError::Io)?;
    let mut writer = BufWriter::new(file);
    write_tiff_volume(volume, &mut writer)?;
    writer.flush().map_err(IoError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tiff::encoder::colortype::Gray8;

    fn encode(volume: &Volume) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        write_tiff_volume(volume, &mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_tiff_roundtrip() {
        let samples: Vec<u16> = (0..24).map(|i| i * 1000).collect();
        let vol = Volume::with_geometry(samples, 3, 2, 4).unwrap();
        let data = encode(&vol);

        let decoded = read_tiff_volume(Cursor::new(&data)).unwrap();
        assert_eq!(decoded, vol);
    }

    #[test]
    fn test_tiff_header() {
        let vol = Volume::with_geometry(vec![7; 30], 5, 2, 3).unwrap();
        let data = encode(&vol);

        let header = read_header_tiff(Cursor::new(&data)).unwrap();
        assert_eq!(header.format, VolumeFormat::Tiff);
        assert_eq!((header.width, header.height), (5, 2));
        assert_eq!(header.frame_count, 3);
    }

    #[test]
    fn test_write_requires_geometry() {
        let vol = Volume::new(vec![1, 2, 3, 4], 2, 2).unwrap();
        let mut buf = Cursor::new(Vec::new());
        assert!(matches!(
            write_tiff_volume(&vol, &mut buf),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_gray8_pages_are_widened() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = TiffEncoder::new(&mut buf).unwrap();
            encoder.write_image::<Gray8>(2, 2, &[0, 1, 128, 255]).unwrap();
            encoder.write_image::<Gray8>(2, 2, &[10, 20, 30, 40]).unwrap();
        }

        let decoded = read_tiff_volume(Cursor::new(buf.into_inner())).unwrap();
        assert_eq!(decoded.frame_count(), 2);
        assert_eq!(decoded.samples(), &[0, 1, 128, 255, 10, 20, 30, 40]);
    }

    #[test]
    fn test_pages_must_share_dimensions() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = TiffEncoder::new(&mut buf).unwrap();
            encoder.write_image::<Gray16>(2, 2, &[1, 2, 3, 4]).unwrap();
            encoder.write_image::<Gray16>(3, 1, &[5, 6, 7]).unwrap();
        }
        let data = buf.into_inner();

        assert!(matches!(
            read_tiff_volume(Cursor::new(&data)),
            Err(IoError::InvalidData(_))
        ));
        // header dimensions come from the first page
        let header = read_header_tiff(Cursor::new(&data)).unwrap();
        assert_eq!((header.width, header.height, header.frame_count), (2, 2, 2));
    }

    #[test]
    fn test_read_garbage() {
        let data = [0x49, 0x49, 0x2A, 0x00, 0xFF, 0xFF, 0xFF, 0xFF];
        assert!(read_tiff_volume(Cursor::new(&data[..])).is_err());
    }
}
