mod accuracy;
mod preview;

pub use accuracy::{PERFECT_ACCURACY, accuracy, score};
pub use preview::{ExperimentSeries, SeriesFormat, SeriesPoint};
