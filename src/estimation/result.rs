use std::fmt::{Display, Formatter, Result};
use std::time::Duration;

/// Outcome of a single estimator call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationResult {
    /// The pi approximation produced by the call.
    pub estimate: f64,
    /// Wall time of this call only.
    pub elapsed: Duration,
    /// Closeness to pi in percent, see [`crate::evaluation::accuracy`].
    pub accuracy: f64,
}

impl EstimationResult {
    #[inline]
    pub fn new(estimate: f64, elapsed: Duration, accuracy: f64) -> Self {
        Self {
            estimate,
            elapsed,
            accuracy,
        }
    }

    #[inline]
    pub fn elapsed_nanos(&self) -> f64 {
        self.elapsed.as_nanos() as f64
    }
}

impl Display for EstimationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "pi~{:.12}, acc={:.6}%, t={}ns",
            self.estimate,
            self.accuracy,
            self.elapsed.as_nanos()
        )
    }
}
