mod error;
mod estimator;
mod estimators;
mod method;
mod result;

pub use error::EstimationError;
pub use estimator::PiEstimator;
pub use estimators::{ArchimedesEstimator, LeibnizEstimator, MonteCarloEstimator, WallisEstimator};
pub use method::Method;
pub use result::EstimationResult;
