mod series;
mod series_point;

pub use series::{ExperimentSeries, SeriesFormat};
pub use series_point::SeriesPoint;
