use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use crate::estimation::Method;
use crate::evaluation::ExperimentSeries;

/// Every series produced by one run, keyed by method.
///
/// Iteration follows [`Method`] order: Archimedes, Leibniz, Wallis,
/// Monte Carlo.
#[derive(Debug, Clone)]
pub struct ExperimentResults {
    iterations: u64,
    started_at: DateTime<Local>,
    series: BTreeMap<Method, ExperimentSeries>,
}

impl ExperimentResults {
    pub(crate) fn new(
        iterations: u64,
        started_at: DateTime<Local>,
        series: BTreeMap<Method, ExperimentSeries>,
    ) -> Self {
        Self {
            iterations,
            started_at,
            series,
        }
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn series(&self, method: Method) -> Option<&ExperimentSeries> {
        self.series.get(&method)
    }

    pub fn methods(&self) -> impl Iterator<Item = Method> + '_ {
        self.series.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Method, &ExperimentSeries)> {
        self.series.iter().map(|(m, s)| (*m, s))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn into_series(self) -> BTreeMap<Method, ExperimentSeries> {
        self.series
    }
}
