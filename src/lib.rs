pub mod config;
pub mod estimation;
pub mod evaluation;
pub mod reporting;
pub mod tasks;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
