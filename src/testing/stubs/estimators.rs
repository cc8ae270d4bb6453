use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crate::estimation::{EstimationError, EstimationResult, Method, PiEstimator};

#[derive(Clone, Default)]
pub struct CallCount(Arc<AtomicUsize>);

impl CallCount {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Always returns the same value and counts how often it was asked.
pub struct FixedEstimator {
    method: Method,
    value: f64,
    calls: CallCount,
}

impl FixedEstimator {
    pub fn new(method: Method, value: f64) -> Self {
        Self {
            method,
            value,
            calls: CallCount::default(),
        }
    }

    pub fn calls(&self) -> CallCount {
        self.calls.clone()
    }
}

impl PiEstimator for FixedEstimator {
    fn method(&self) -> Method {
        self.method
    }

    fn approximate(&mut self, _count: u64) -> f64 {
        self.calls.bump();
        self.value
    }
}

/// Succeeds below `fail_at` and errors from then on.
pub struct FailingEstimator {
    method: Method,
    fail_at: u64,
}

impl FailingEstimator {
    pub fn new(method: Method, fail_at: u64) -> Self {
        Self { method, fail_at }
    }
}

impl PiEstimator for FailingEstimator {
    fn method(&self) -> Method {
        self.method
    }

    fn approximate(&mut self, _count: u64) -> f64 {
        3.0
    }

    fn estimate(&mut self, count: u64) -> Result<EstimationResult, EstimationError> {
        if count >= self.fail_at {
            return Err(EstimationError::InvalidCount {
                method: self.method,
                count,
            });
        }
        let estimate = self.approximate(count);
        Ok(EstimationResult::new(
            estimate,
            Default::default(),
            crate::evaluation::score(estimate),
        ))
    }
}

/// Sleeps `per_count * count` on every call, so each call has a known cost.
pub struct SleepingEstimator {
    method: Method,
    per_count: Duration,
}

impl SleepingEstimator {
    pub fn new(method: Method, per_count: Duration) -> Self {
        Self { method, per_count }
    }
}

impl PiEstimator for SleepingEstimator {
    fn method(&self) -> Method {
        self.method
    }

    fn approximate(&mut self, count: u64) -> f64 {
        let factor = u32::try_from(count).unwrap_or(u32::MAX);
        thread::sleep(self.per_count.saturating_mul(factor));
        3.0
    }
}
