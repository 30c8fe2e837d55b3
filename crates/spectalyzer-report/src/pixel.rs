//! Raw sample dump

use spectalyzer_core::Volume;
use std::io::{self, Write};

/// Write every sample of `volume`, one per line, in storage order.
///
/// The volume can hold millions of samples, so lines are streamed to
/// `writer` instead of being collected into a string.
pub fn write_pixel_data<W: Write>(volume: &Volume, mut writer: W) -> io::Result<()> {
    for &v in volume.samples() {
        writeln!(writer, "{}", v)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_pixel_data() {
        let vol = Volume::new(vec![0, 65535, 12], 3, 1).unwrap();
        let mut out = Vec::new();
        write_pixel_data(&vol, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\n65535\n12\n");
    }
}
