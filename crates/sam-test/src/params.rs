//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use sam_core::Series;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare computed values with expected ones (default)
    #[default]
    Compare,
    /// Display mode - run and print values without failing
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything but "display" is compare mode
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
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
    /// Name of the test (e.g., "topk")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode (compare or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create regression test parameters with an explicit mode
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
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

    /// Record a failure; in display mode it is printed but not counted
    fn fail(&mut self, err: TestError) -> bool {
        let msg = format!("Failure in {}_reg: {}", self.test_name, err);
        eprintln!("{}", msg);
        if self.display() {
            return true;
        }
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
        if self.display() {
            eprintln!("[{:02}] expected = {}, actual = {}", self.index, expected, actual);
        }

        let diff = (expected - actual).abs();
        // NaN == NaN counts as a match
        if diff > delta || (diff.is_nan() && !(expected.is_nan() && actual.is_nan())) {
            self.fail(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            })
        } else {
            true
        }
    }

    /// Compare a series element-wise against expected values
    ///
    /// Lengths must match exactly; each element must be within `delta`.
    pub fn compare_series(&mut self, expected: &[f64], actual: &Series, delta: f64) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!(
                "[{:02}] expected = {:?}, actual = {:?}",
                self.index,
                expected,
                actual.as_slice()
            );
        }

        if expected.len() != actual.len() {
            return self.fail(TestError::LengthMismatch {
                index: self.index,
                expected: expected.len(),
                actual: actual.len(),
            });
        }

        for (position, (&e, a)) in expected.iter().zip(actual.iter()).enumerate() {
            if (e - a).abs() > delta {
                return self.fail(TestError::ElementMismatch {
                    index: self.index,
                    position,
                    expected: e,
                    actual: a,
                });
            }
        }
        true
    }

    /// Compare two binary data arrays
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            self.fail(TestError::StringMismatch {
                index: self.index,
                expected: data1.len(),
                actual: data2.len(),
            })
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
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

    /// Finish the test, converting any failures into an error
    pub fn finish(self) -> TestResult<()> {
        let test_name = self.test_name.clone();
        let count = self.failures.len();
        if self.cleanup() {
            Ok(())
        } else {
            Err(TestError::Failed { test_name, count })
        }
    }

    /// Check if all tests have passed so far
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
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse("display"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("DISPLAY"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("generate"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::with_mode("test", RegTestMode::Compare);
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::with_mode("test", RegTestMode::Compare);
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
        assert!(matches!(
            rp.finish(),
            Err(TestError::Failed { count: 1, .. })
        ));
    }

    #[test]
    fn test_compare_series() {
        let mut rp = RegParams::with_mode("test", RegTestMode::Compare);
        let s = Series::from_slice(&[1.0, 2.0]);
        assert!(rp.compare_series(&[1.0, 2.0], &s, 0.0));
        assert!(!rp.compare_series(&[1.0], &s, 0.0));
        assert!(!rp.compare_series(&[1.0, 2.5], &s, 0.1));
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_display_mode_never_fails() {
        let mut rp = RegParams::with_mode("test", RegTestMode::Display);
        assert!(rp.compare_values(1.0, 2.0, 0.0));
        assert!(rp.compare_strings(b"a", b"b"));
        assert!(rp.finish().is_ok());
    }
}
