//! When an alternative's failure history counts as degraded.

use serde::{Deserialize, Serialize};

use super::OutcomeTally;

/// Failures an alternative may accumulate before it is flagged.
pub const DEFAULT_FAILURE_THRESHOLD: usize = 2;

/// Flags an alternative once its failures strictly exceed the threshold.
///
/// The signal fires a single time per alternative: on the append that takes
/// the failure count from `threshold` to `threshold + 1`. Later failures and
/// any success leave it silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradationPolicy {
    failure_threshold: usize,
}

impl DegradationPolicy {
    pub fn new(failure_threshold: usize) -> Self {
        Self { failure_threshold }
    }

    pub fn failure_threshold(&self) -> usize {
        self.failure_threshold
    }

    /// True when the tally is past the threshold.
    pub fn is_degraded(&self, tally: &OutcomeTally) -> bool {
        tally.failures > self.failure_threshold
    }

    /// True only for the append that crossed the threshold.
    ///
    /// `tally` must be the count observed immediately after a failure was
    /// appended, under the same lock as the append.
    pub fn crossed(&self, tally: &OutcomeTally) -> bool {
        tally.failures == self.failure_threshold + 1
    }
}

impl Default for DegradationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FAILURE_THRESHOLD)
    }
}
