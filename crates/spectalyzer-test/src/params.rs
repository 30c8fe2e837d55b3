//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use spectalyzer_core::Volume;
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Run every check and record failures (default)
    #[default]
    Compare,
    /// Also keep rendered outputs in the regout directory
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "rolling")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "rolling")
    ///
    /// # Returns
    ///
    /// A new `RegParams` instance configured based on the `REGTEST_MODE`
    /// environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two integer series element by element
    ///
    /// Reports the first differing position, or the length mismatch.
    pub fn compare_counts(&mut self, expected: &[u64], actual: &[u64]) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            let msg = format!(
                "Failure in {}_reg: count comparison for index {} - length {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            );
            return self.fail(msg);
        }

        match expected.iter().zip(actual).position(|(e, a)| e != a) {
            Some(pos) => {
                let msg = format!(
                    "Failure in {}_reg: count comparison for index {} - \
                     position {}: expected {}, actual {}",
                    self.test_name, self.index, pos, expected[pos], actual[pos]
                );
                self.fail(msg)
            }
            None => true,
        }
    }

    /// Compare two volumes for identical layout and samples
    pub fn compare_volumes(&mut self, vol1: &Volume, vol2: &Volume) -> bool {
        self.index += 1;

        if vol1.frame_count() != vol2.frame_count()
            || vol1.pixels_per_frame() != vol2.pixels_per_frame()
            || vol1.geometry() != vol2.geometry()
        {
            let msg = format!(
                "Failure in {}_reg: volume comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            return self.fail(msg);
        }

        match vol1
            .samples()
            .iter()
            .zip(vol2.samples())
            .position(|(a, b)| a != b)
        {
            Some(pos) => {
                let msg = format!(
                    "Failure in {}_reg: volume comparison for index {} - sample mismatch at {}",
                    self.test_name, self.index, pos
                );
                self.fail(msg)
            }
            None => true,
        }
    }

    /// Compare two binary data arrays
    ///
    /// # Arguments
    ///
    /// * `data1` - First byte array
    /// * `data2` - Second byte array
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Keep rendered output for inspection
    ///
    /// In display mode, writes `data` to `tests/regout/<name>.<index>.<ext>`.
    /// In compare mode, only advances the index.
    pub fn write_data(&mut self, data: &[u8], ext: &str) -> TestResult<()> {
        self.index += 1;
        if !self.display() {
            return Ok(());
        }

        let dir = regout_dir();
        fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.clone(),
            message: e.to_string(),
        })?;
        let local_path = format!("{}/{}.{:02}.{}", dir, self.test_name, self.index, ext);
        fs::write(&local_path, data)?;
        eprintln!("Wrote: {}", local_path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_counts() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_counts(&[1, 2, 3], &[1, 2, 3]));
        assert!(rp.is_success());
        assert!(!rp.compare_counts(&[1, 2, 3], &[1, 5, 3]));
        assert!(rp.failures()[0].contains("position 1"));
        assert!(!rp.compare_counts(&[1, 2], &[1, 2, 3]));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_volumes() {
        let a = Volume::new(vec![1, 2, 3, 4], 2, 2).unwrap();
        let b = Volume::new(vec![1, 2, 3, 5], 2, 2).unwrap();
        let c = Volume::new(vec![1, 2, 3, 4], 1, 4).unwrap();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_volumes(&a, &a.clone()));
        assert!(!rp.compare_volumes(&a, &b));
        assert!(!rp.compare_volumes(&a, &c));
    }
}
