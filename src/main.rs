//! pi-estimates CLI
//!
//! Runs the four estimators over `1..=N` iterations, prints a summary table
//! and writes the accuracy chart as SVG.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pi_estimates::config::{RunConfig, load_config};
use pi_estimates::evaluation::SeriesFormat;
use pi_estimates::reporting::{ChartKind, export_all, render_summary, write_svg};
use pi_estimates::tasks::ExperimentRunner;
use pi_estimates::ui::cli::drivers::InquireDriver;
use pi_estimates::ui::cli::wizard::prompt_run_config;

#[derive(Parser)]
#[command(name = "pi-estimates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare Archimedes, Leibniz, Wallis and Monte Carlo estimates of pi", long_about = None)]
struct Cli {
    /// Largest iteration count; every method runs with 1..=N
    #[arg(short = 'n', long)]
    iterations: Option<u64>,

    /// X-axis of the chart: `iterations` or `elapsed`
    #[arg(short, long)]
    chart: Option<ChartKind>,

    /// Seed for the Monte Carlo random source (default: OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write the SVG chart
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also export one data file per method into this directory
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Format of exported series: csv, tsv or json
    #[arg(long)]
    format: Option<SeriesFormat>,

    /// JSON file with run settings; flags override it
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pick every setting through interactive prompts
    #[arg(short, long, conflicts_with = "config")]
    interactive: bool,
}

impl Cli {
    fn resolve(self) -> Result<RunConfig> {
        let mut cfg = if self.interactive {
            prompt_run_config(&InquireDriver)?
        } else if let Some(path) = &self.config {
            load_config(path)?
        } else {
            RunConfig::default()
        };

        if let Some(n) = self.iterations {
            cfg.iterations = n;
        }
        if let Some(c) = self.chart {
            cfg.chart = c;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if let Some(o) = self.output {
            cfg.output = o;
        }
        if self.export_dir.is_some() {
            cfg.export_dir = self.export_dir;
        }
        if let Some(f) = self.format {
            cfg.format = f;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn run(cfg: &RunConfig) -> Result<()> {
    let mut runner = ExperimentRunner::standard(cfg.iterations, cfg.seed)?;
    let results = runner.run().context("estimation run failed")?;

    print!("{}", render_summary(&results)?);

    write_svg(&cfg.output, &results, cfg.chart, cfg.width, cfg.height)
        .with_context(|| format!("failed to write chart to {}", cfg.output.display()))?;
    println!("chart written to {}", cfg.output.display());

    if let Some(dir) = &cfg.export_dir {
        let paths = export_all(&results, dir, cfg.format)
            .with_context(|| format!("failed to export series to {}", dir.display()))?;
        info!(files = paths.len(), "series exported");
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pi_estimates=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = Cli::parse().resolve().and_then(|cfg| run(&cfg));
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
