use std::time::Instant;

use crate::estimation::{EstimationError, EstimationResult, Method};
use crate::evaluation::score;

/// A numerical method that approximates pi from a single count parameter
/// (polygon sides, series terms or sampled points).
///
/// Implementors only provide [`approximate`]; [`estimate`] wraps it with
/// input validation, per-call timing and accuracy scoring.
///
/// [`approximate`]: PiEstimator::approximate
/// [`estimate`]: PiEstimator::estimate
pub trait PiEstimator {
    /// Which method this estimator implements.
    fn method(&self) -> Method;

    /// Raw pi approximation for `count`. Never called with `count == 0`
    /// through [`PiEstimator::estimate`].
    fn approximate(&mut self, count: u64) -> f64;

    /// Runs one timed estimation and scores it against pi.
    fn estimate(&mut self, count: u64) -> Result<EstimationResult, EstimationError> {
        if count == 0 {
            return Err(EstimationError::InvalidCount {
                method: self.method(),
                count,
            });
        }

        let start = Instant::now();
        let estimate = self.approximate(count);
        let elapsed = start.elapsed();

        Ok(EstimationResult::new(estimate, elapsed, score(estimate)))
    }
}
