//! Synthetic volumes for tests
//!
//! All builders are deterministic and return volumes with a frame geometry,
//! so they can be written to TIFF unchanged. They panic on zero dimensions.

use spectalyzer_core::Volume;

fn build(samples: Vec<u16>, width: u32, height: u32, frame_count: usize) -> Volume {
    match Volume::with_geometry(samples, width, height, frame_count) {
        Ok(vol) => vol,
        Err(e) => panic!("invalid synthetic volume {width}x{height}x{frame_count}: {e}"),
    }
}

/// Every sample of frame `f` equals `f + 1`.
pub fn ramp_volume(frame_count: usize, width: u32, height: u32) -> Volume {
    let ppf = width as usize * height as usize;
    let samples = (0..frame_count)
        .flat_map(|f| std::iter::repeat_n((f + 1) as u16, ppf))
        .collect();
    build(samples, width, height, frame_count)
}

/// Every sample equals `value`.
pub fn constant_volume(frame_count: usize, width: u32, height: u32, value: u16) -> Volume {
    let ppf = width as usize * height as usize;
    build(vec![value; frame_count * ppf], width, height, frame_count)
}

/// Background of `base` with frames `start..start + len` raised to `peak`.
///
/// The hot window of any rolling width `<= len` lies inside the pulse.
pub fn pulse_volume(
    frame_count: usize,
    width: u32,
    height: u32,
    base: u16,
    peak: u16,
    start: usize,
    len: usize,
) -> Volume {
    let ppf = width as usize * height as usize;
    let samples = (0..frame_count)
        .flat_map(|f| {
            let v = if (start..start + len).contains(&f) {
                peak
            } else {
                base
            };
            std::iter::repeat_n(v, ppf)
        })
        .collect();
    build(samples, width, height, frame_count)
}

/// Uniform random samples in `0..=max`, reproducible from `seed`.
pub fn random_volume(frame_count: usize, width: u32, height: u32, max: u16, seed: u64) -> Volume {
    let mut rng = SimpleRng::new(seed);
    let n = frame_count * width as usize * height as usize;
    let span = u64::from(max) + 1;
    let samples = (0..n).map(|_| ((rng.next() >> 33) % span) as u16).collect();
    build(samples, width, height, frame_count)
}

/// Simple linear congruential generator for reproducible randomness
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_volume() {
        let vol = ramp_volume(3, 2, 2);
        assert_eq!(vol.frame_count(), 3);
        assert_eq!(vol.frame(2).unwrap(), &[3, 3, 3, 3]);
    }

    #[test]
    fn test_pulse_volume() {
        let vol = pulse_volume(6, 2, 1, 1, 50, 2, 3);
        assert_eq!(vol.frame(1).unwrap(), &[1, 1]);
        assert_eq!(vol.frame(2).unwrap(), &[50, 50]);
        assert_eq!(vol.frame(4).unwrap(), &[50, 50]);
        assert_eq!(vol.frame(5).unwrap(), &[1, 1]);
    }

    #[test]
    fn test_random_volume_is_reproducible() {
        let a = random_volume(4, 8, 8, 1000, 42);
        let b = random_volume(4, 8, 8, 1000, 42);
        let c = random_volume(4, 8, 8, 1000, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.samples().iter().all(|&v| v <= 1000));
    }
}
