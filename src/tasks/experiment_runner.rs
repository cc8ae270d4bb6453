use std::collections::{BTreeMap, BTreeSet};
use std::sync::mpsc::Sender;

use chrono::Local;
use tracing::{debug, info};

use crate::estimation::{
    ArchimedesEstimator, EstimationError, LeibnizEstimator, Method, MonteCarloEstimator,
    PiEstimator, WallisEstimator,
};
use crate::evaluation::{ExperimentSeries, SeriesPoint};
use crate::tasks::ExperimentResults;

pub const DEFAULT_ITERATIONS: u64 = 50;

const MAX_PREALLOCATED_POINTS: usize = 1 << 16;

/// Emitted after every estimator has run for one iteration count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEvent {
    pub iteration: u64,
    pub total: u64,
}

/// Calls each registered estimator with counts `1..=iterations` and collects
/// one series per method.
pub struct ExperimentRunner {
    estimators: Vec<Box<dyn PiEstimator>>,
    iterations: u64,
    progress_tx: Option<Sender<ProgressEvent>>,
}

impl ExperimentRunner {
    /// Every estimator must report a distinct method, one series each.
    pub fn new(
        estimators: Vec<Box<dyn PiEstimator>>,
        iterations: u64,
    ) -> Result<Self, EstimationError> {
        if iterations == 0 {
            return Err(EstimationError::InvalidIterations(iterations));
        }
        let mut seen = BTreeSet::new();
        for e in &estimators {
            if !seen.insert(e.method()) {
                return Err(EstimationError::DuplicateMethod(e.method()));
            }
        }
        Ok(Self {
            estimators,
            iterations,
            progress_tx: None,
        })
    }

    /// The four methods. Monte Carlo is seeded when `seed` is given and
    /// draws from OS entropy otherwise.
    pub fn standard(iterations: u64, seed: Option<u64>) -> Result<Self, EstimationError> {
        let monte_carlo = match seed {
            Some(s) => MonteCarloEstimator::seeded(s),
            None => MonteCarloEstimator::from_os_rng(),
        };
        let estimators: Vec<Box<dyn PiEstimator>> = vec![
            Box::new(ArchimedesEstimator::new()),
            Box::new(LeibnizEstimator::new()),
            Box::new(WallisEstimator::new()),
            Box::new(monte_carlo),
        ];
        Self::new(estimators, iterations)
    }

    pub fn with_progress(mut self, tx: Sender<ProgressEvent>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn methods(&self) -> Vec<Method> {
        self.estimators.iter().map(|e| e.method()).collect()
    }

    /// Runs the whole sweep. The first estimator error aborts the run.
    pub fn run(&mut self) -> Result<ExperimentResults, EstimationError> {
        let started_at = Local::now();
        info!(
            iterations = self.iterations,
            estimators = self.estimators.len(),
            "starting pi estimation sweep"
        );

        let capacity = usize::try_from(self.iterations)
            .unwrap_or(usize::MAX)
            .min(MAX_PREALLOCATED_POINTS);
        let mut series: BTreeMap<Method, ExperimentSeries> = self
            .estimators
            .iter()
            .map(|e| (e.method(), ExperimentSeries::with_capacity(e.method(), capacity)))
            .collect();

        for i in 1..=self.iterations {
            for estimator in self.estimators.iter_mut() {
                let method = estimator.method();
                let result = estimator.estimate(i)?;
                debug!(%method, iteration = i, accuracy = result.accuracy, "estimated");
                series
                    .entry(method)
                    .or_insert_with(|| ExperimentSeries::new(method))
                    .push(SeriesPoint::new(i, result));
            }

            if let Some(tx) = &self.progress_tx {
                let event = ProgressEvent {
                    iteration: i,
                    total: self.iterations,
                };
                if tx.send(event).is_err() {
                    debug!(iteration = i, "progress receiver dropped");
                }
            }
        }

        for (method, s) in &series {
            if let Some(last) = s.latest() {
                info!(%method, accuracy = last.result.accuracy, "final accuracy");
            }
        }

        Ok(ExperimentResults::new(self.iterations, started_at, series))
    }
}
