//! Regression test parameters and comparison operations

use rasterpix_core::PixelBuffer;

/// Regression test state
///
/// Tracks an incrementing comparison index and the overall success status of
/// a test. Comparisons never abort the test; failures accumulate and are
/// reported together by [`RegParams::cleanup`], so one run shows every
/// mismatch instead of the first.
pub struct RegParams {
    /// Name of the test (e.g. "crop")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////   {}_reg   ////////////////", test_name);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values.
    ///
    /// Returns `true` if `actual` is within `delta` of `expected`.
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
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }
        true
    }

    /// Compare two pixel buffers for byte-exact equality.
    ///
    /// Shape is compared first so a size mismatch is reported as such
    /// rather than as a content difference.
    pub fn compare_buffers(&mut self, expected: &PixelBuffer, actual: &PixelBuffer) -> bool {
        self.index += 1;

        if !expected.same_size(actual) {
            let msg = format!(
                "Failure in {}_reg: buffer size mismatch for index {}\n\
                 expected = {}x{}, actual = {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        if expected != actual {
            let first_diff = expected
                .bytes()
                .iter()
                .zip(actual.bytes())
                .position(|(a, b)| a != b);
            let msg = format!(
                "Failure in {}_reg: buffer content mismatch for index {}\n\
                 first differing byte offset = {:?}",
                self.test_name, self.index, first_diff
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }
        true
    }

    /// Finish the test and report the result.
    ///
    /// Returns `true` if every comparison passed.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg ({} comparisons)", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} of {} comparisons failed)",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success
    }
}
