use thiserror::Error;

use crate::estimation::Method;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimationError {
    #[error("{method} needs a positive count, got {count}")]
    InvalidCount { method: Method, count: u64 },

    #[error("iteration count must be > 0, got {0}")]
    InvalidIterations(u64),

    #[error("{0} is registered more than once")]
    DuplicateMethod(Method),
}
