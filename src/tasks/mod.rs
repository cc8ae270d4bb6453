mod experiment_results;
mod experiment_runner;

pub use experiment_results::ExperimentResults;
pub use experiment_runner::{DEFAULT_ITERATIONS, ExperimentRunner, ProgressEvent};
