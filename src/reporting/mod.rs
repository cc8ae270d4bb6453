mod chart;
mod error;
mod export;
mod summary;

pub use chart::{
    ACCURACY_AXIS_LABEL, CHART_TITLE, ChartKind, ELAPSED_AXIS_LABEL, ITERATIONS_AXIS_LABEL,
    render_svg, write_svg,
};
pub use error::ReportError;
pub use export::export_all;
pub use summary::render_summary;
