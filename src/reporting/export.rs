use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::evaluation::SeriesFormat;
use crate::reporting::ReportError;
use crate::tasks::ExperimentResults;

/// Writes every series to `<dir>/<method-slug>.<ext>` and returns the paths
/// in method order.
pub fn export_all(
    results: &ExperimentResults,
    dir: &Path,
    format: SeriesFormat,
) -> Result<Vec<PathBuf>, ReportError> {
    if results.is_empty() {
        return Err(ReportError::EmptyResults);
    }
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(results.len());
    for (method, series) in results.iter() {
        let path = dir.join(format!("{}.{}", method.slug(), format.extension()));
        series.export(&path, format)?;
        info!(%method, path = %path.display(), "exported series");
        written.push(path);
    }
    Ok(written)
}
