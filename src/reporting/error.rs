use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("nothing to report: no series were collected")]
    EmptyResults,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to render chart: {0}")]
    Render(#[from] std::fmt::Error),
}
