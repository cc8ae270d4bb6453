pub mod estimators;
pub mod scripted_driver;

pub use estimators::{CallCount, FailingEstimator, FixedEstimator, SleepingEstimator};
pub use scripted_driver::{Answer, ScriptedDriver};
