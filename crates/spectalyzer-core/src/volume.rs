//! Volume - the decoded intensity stack
//!
//! A [`Volume`] holds `frame_count` consecutive frames of `pixels_per_frame`
//! unsigned 16-bit samples in one flat buffer. Frame `f` occupies
//! `samples[f * pixels_per_frame..(f + 1) * pixels_per_frame]`.
//!
//! # Ownership model
//!
//! A `Volume` is immutable once built. Everything derived from it borrows:
//! a [`VoxelSubset`] is a view into the sample buffer, never a copy.

use crate::error::{Error, Result};

/// Frame geometry in pixels, when the decoder knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameGeometry {
    /// Columns per frame
    pub width: u32,
    /// Rows per frame
    pub height: u32,
}

impl FrameGeometry {
    /// Number of pixels in one frame.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Stack of 2-D intensity frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    samples: Vec<u16>,
    frame_count: usize,
    pixels_per_frame: usize,
    geometry: Option<FrameGeometry>,
}

impl Volume {
    /// Create a volume from a flat sample buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if either count is zero
    /// - [`Error::SampleCountMismatch`] if
    ///   `samples.len() != frame_count * pixels_per_frame`
    pub fn new(samples: Vec<u16>, frame_count: usize, pixels_per_frame: usize) -> Result<Self> {
        if frame_count == 0 || pixels_per_frame == 0 {
            return Err(Error::InvalidDimension {
                frame_count,
                pixels_per_frame,
            });
        }
        let expected = frame_count
            .checked_mul(pixels_per_frame)
            .ok_or(Error::InvalidDimension {
                frame_count,
                pixels_per_frame,
            })?;
        if samples.len() != expected {
            return Err(Error::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            samples,
            frame_count,
            pixels_per_frame,
            geometry: None,
        })
    }

    /// Create a volume of `frame_count` frames, each `width x height`.
    pub fn with_geometry(
        samples: Vec<u16>,
        width: u32,
        height: u32,
        frame_count: usize,
    ) -> Result<Self> {
        let geometry = FrameGeometry { width, height };
        let mut volume = Self::new(samples, frame_count, geometry.pixel_count())?;
        volume.geometry = Some(geometry);
        Ok(volume)
    }

    /// All samples, frame after frame.
    #[inline]
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// Number of frames.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Number of samples in one frame.
    #[inline]
    pub fn pixels_per_frame(&self) -> usize {
        self.pixels_per_frame
    }

    /// Frame geometry, if known.
    #[inline]
    pub fn geometry(&self) -> Option<FrameGeometry> {
        self.geometry
    }

    /// Total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`: a valid volume has at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples of frame `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= frame_count`.
    pub fn frame(&self, index: usize) -> Result<&[u16]> {
        if index >= self.frame_count {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.frame_count,
            });
        }
        let start = index * self.pixels_per_frame;
        Ok(&self.samples[start..start + self.pixels_per_frame])
    }

    /// Iterate over frames in order.
    pub fn frames(&self) -> std::slice::ChunksExact<'_, u16> {
        self.samples.chunks_exact(self.pixels_per_frame)
    }

    /// Smallest and largest sample in the whole volume.
    pub fn min_max(&self) -> (u16, u16) {
        min_max(&self.samples)
    }

    /// View `frame_count` consecutive frames starting at `start_frame`.
    ///
    /// # Errors
    ///
    /// - [`Error::Configuration`] if `frame_count` is zero
    /// - [`Error::IndexOutOfBounds`] if the range runs past the last frame
    pub fn subset(&self, start_frame: usize, frame_count: usize) -> Result<VoxelSubset<'_>> {
        if frame_count == 0 {
            return Err(Error::Configuration(
                "subset must span at least one frame".to_string(),
            ));
        }
        let end_frame = start_frame.saturating_add(frame_count);
        if end_frame > self.frame_count {
            return Err(Error::IndexOutOfBounds {
                index: end_frame - 1,
                len: self.frame_count,
            });
        }
        let start = start_frame * self.pixels_per_frame;
        let end = end_frame * self.pixels_per_frame;
        Ok(VoxelSubset {
            start_frame,
            frame_count,
            samples: &self.samples[start..end],
        })
    }

    /// Consume the volume and return its sample buffer.
    pub fn into_samples(self) -> Vec<u16> {
        self.samples
    }
}

/// Borrowed run of whole frames inside a [`Volume`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoxelSubset<'a> {
    start_frame: usize,
    frame_count: usize,
    samples: &'a [u16],
}

impl<'a> VoxelSubset<'a> {
    /// First frame covered by the subset.
    #[inline]
    pub fn start_frame(&self) -> usize {
        self.start_frame
    }

    /// Number of frames covered by the subset.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// The samples, borrowed from the volume.
    #[inline]
    pub fn samples(&self) -> &'a [u16] {
        self.samples
    }

    /// Number of voxels in the subset.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false` for subsets produced by [`Volume::subset`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sum of all samples.
    pub fn sum(&self) -> u64 {
        self.samples.iter().map(|&v| u64::from(v)).sum()
    }

    /// Smallest and largest sample.
    pub fn min_max(&self) -> (u16, u16) {
        min_max(self.samples)
    }
}

/// Independent min and max over a slice; `(0, 0)` when empty.
pub(crate) fn min_max(samples: &[u16]) -> (u16, u16) {
    if samples.is_empty() {
        return (0, 0);
    }
    let mut min = u16::MAX;
    let mut max = u16::MIN;
    for &v in samples {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}
