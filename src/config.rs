use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::evaluation::SeriesFormat;
use crate::reporting::ChartKind;
use crate::tasks::DEFAULT_ITERATIONS;
use crate::ui::types::choices::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_PATH, DEFAULT_CHART_WIDTH, TaskChoice,
};

/// Everything one run needs. Missing keys in a config file fall back to
/// [`RunConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub iterations: u64,
    pub chart: ChartKind,
    pub seed: Option<u64>,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub export_dir: Option<PathBuf>,
    pub format: SeriesFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            chart: ChartKind::default(),
            seed: None,
            output: PathBuf::from(DEFAULT_CHART_PATH),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            export_dir: None,
            format: SeriesFormat::default(),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.iterations > 0, "iterations must be > 0");
        ensure!(
            (320..=4096).contains(&self.width),
            "chart width must be in [320, 4096], got {}",
            self.width
        );
        ensure!(
            (240..=4096).contains(&self.height),
            "chart height must be in [240, 4096], got {}",
            self.height
        );
        Ok(())
    }
}

impl From<TaskChoice> for RunConfig {
    fn from(task: TaskChoice) -> Self {
        match task {
            TaskChoice::CompareEstimators(p) => {
                let chart = p.chart.params();
                Self {
                    iterations: p.iterations,
                    chart: p.chart.kind(),
                    seed: p.seed,
                    output: PathBuf::from(&chart.output),
                    width: chart.width,
                    height: chart.height,
                    export_dir: p.export_dir.map(PathBuf::from),
                    format: p.format,
                }
            }
        }
    }
}

/// Reads a JSON run configuration.
pub fn load_config(path: &Path) -> Result<RunConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    let config: RunConfig = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse config from {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
}
