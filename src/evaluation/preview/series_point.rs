use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

use crate::estimation::EstimationResult;

/// One estimator call within a series, keyed by its iteration count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub iteration: u64,
    pub result: EstimationResult,
}

impl SeriesPoint {
    pub fn new(iteration: u64, result: EstimationResult) -> Self {
        Self { iteration, result }
    }

    pub(crate) fn record(&self) -> PointRecord {
        PointRecord {
            iteration: self.iteration,
            estimate: self.result.estimate,
            accuracy: self.result.accuracy,
            elapsed_ns: self.result.elapsed.as_nanos() as u64,
        }
    }
}

impl Display for SeriesPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "n={}, {}", self.iteration, self.result)
    }
}

/// Flat, serializable view used by the JSON export.
#[derive(Debug, Serialize)]
pub(crate) struct PointRecord {
    pub iteration: u64,
    pub estimate: f64,
    pub accuracy: f64,
    pub elapsed_ns: u64,
}
