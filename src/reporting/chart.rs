use std::fmt::Write;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

use crate::evaluation::SeriesPoint;
use crate::reporting::ReportError;
use crate::tasks::ExperimentResults;

pub const CHART_TITLE: &str = "Different Pi Estimations";
pub const ITERATIONS_AXIS_LABEL: &str = "Number of Iterations";
pub const ELAPSED_AXIS_LABEL: &str = "Execution Time (nanoseconds)";
pub const ACCURACY_AXIS_LABEL: &str = "Percent Accuracy to Pi (%)";

// matplotlib's default color cycle
const PALETTE: [&str; 4] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 60.0;
const TICKS: f64 = 6.0;

/// What goes on the x-axis. Accuracy is always on the y-axis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum ChartKind {
    #[default]
    #[serde(rename = "iterations", alias = "iterations-vs-accuracy")]
    #[strum(to_string = "iterations", serialize = "iterations-vs-accuracy")]
    IterationsVsAccuracy,

    #[serde(rename = "elapsed", alias = "elapsed-vs-accuracy")]
    #[strum(to_string = "elapsed", serialize = "elapsed-vs-accuracy")]
    ElapsedVsAccuracy,
}

impl ChartKind {
    pub fn x_label(self) -> &'static str {
        match self {
            ChartKind::IterationsVsAccuracy => ITERATIONS_AXIS_LABEL,
            ChartKind::ElapsedVsAccuracy => ELAPSED_AXIS_LABEL,
        }
    }

    fn x_of(self, p: &SeriesPoint) -> f64 {
        match self {
            ChartKind::IterationsVsAccuracy => p.iteration as f64,
            ChartKind::ElapsedVsAccuracy => p.result.elapsed_nanos(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Axis {
    lo: f64,
    hi: f64,
    step: f64,
}

impl Axis {
    fn fit(min: f64, max: f64) -> Self {
        let (min, max) = if (max - min).abs() < f64::EPSILON {
            (min - 1.0, max + 1.0)
        } else {
            (min, max)
        };
        let step = nice_step((max - min) / TICKS);
        Self {
            lo: (min / step).floor() * step,
            hi: (max / step).ceil() * step,
            step,
        }
    }

    fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        let n = ((self.hi - self.lo) / self.step).round() as usize;
        (0..=n).map(move |i| self.lo + i as f64 * self.step)
    }

    fn project(&self, v: f64, from: f64, to: f64) -> f64 {
        from + (v - self.lo) / (self.hi - self.lo) * (to - from)
    }

    fn label(&self, v: f64) -> String {
        if self.step >= 1.0 {
            format!("{v:.0}")
        } else {
            let decimals = (-self.step.log10()).ceil() as usize;
            format!("{v:.decimals$}")
        }
    }
}

fn nice_step(raw: f64) -> f64 {
    let exp = 10f64.powf(raw.log10().floor());
    let f = raw / exp;
    let nice = if f <= 1.0 {
        1.0
    } else if f <= 2.0 {
        2.0
    } else if f <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * exp
}

/// Renders one line per method as a standalone SVG document.
pub fn render_svg(
    results: &ExperimentResults,
    kind: ChartKind,
    width: u32,
    height: u32,
) -> Result<String, ReportError> {
    if results.is_empty() {
        return Err(ReportError::EmptyResults);
    }

    let lines: Vec<(&'static str, &'static str, Vec<(f64, f64)>)> = results
        .iter()
        .map(|(method, series)| {
            let pts = series
                .points()
                .iter()
                .map(|p| (kind.x_of(p), p.result.accuracy))
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect();
            (method.label(), method.slug(), pts)
        })
        .collect();

    let all = lines.iter().flat_map(|(_, _, pts)| pts.iter());
    let (x_min, x_max, y_min, y_max) = all.fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(a, b, c, d), &(x, y)| (a.min(x), b.max(x), c.min(y), d.max(y)),
    );
    if !x_min.is_finite() {
        return Err(ReportError::EmptyResults);
    }
    let x_axis = Axis::fit(x_min, x_max);
    let y_axis = Axis::fit(y_min, y_max);

    let (w, h) = (width as f64, height as f64);
    let (left, right) = (MARGIN_LEFT, w - MARGIN_RIGHT);
    let (top, bottom) = (MARGIN_TOP, h - MARGIN_BOTTOM);

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
    )?;
    writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(
        svg,
        r#"<text x="{:.1}" y="28" text-anchor="middle" font-size="18">{CHART_TITLE}</text>"#,
        w / 2.0
    )?;
    writeln!(
        svg,
        r##"<text x="{:.1}" y="46" text-anchor="middle" font-size="11" fill="#666">{} iterations, run {}</text>"##,
        w / 2.0,
        results.iterations(),
        results.started_at().format("%Y-%m-%d %H:%M:%S")
    )?;

    writeln!(svg, r##"<g stroke="#ddd" stroke-width="1" font-size="11">"##)?;
    for t in x_axis.ticks() {
        let x = x_axis.project(t, left, right);
        writeln!(
            svg,
            r#"<line x1="{x:.2}" y1="{top:.2}" x2="{x:.2}" y2="{bottom:.2}"/><text x="{x:.2}" y="{:.2}" text-anchor="middle" stroke="none" fill="black">{}</text>"#,
            bottom + 16.0,
            x_axis.label(t)
        )?;
    }
    for t in y_axis.ticks() {
        let y = y_axis.project(t, bottom, top);
        writeln!(
            svg,
            r#"<line x1="{left:.2}" y1="{y:.2}" x2="{right:.2}" y2="{y:.2}"/><text x="{:.2}" y="{:.2}" text-anchor="end" stroke="none" fill="black">{}</text>"#,
            left - 6.0,
            y + 4.0,
            y_axis.label(t)
        )?;
    }
    writeln!(svg, "</g>")?;
    writeln!(
        svg,
        r#"<rect x="{left:.2}" y="{top:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
        right - left,
        bottom - top
    )?;
    writeln!(
        svg,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="13">{}</text>"#,
        (left + right) / 2.0,
        h - 16.0,
        kind.x_label()
    )?;
    writeln!(
        svg,
        r#"<text x="20" y="{0:.2}" text-anchor="middle" font-size="13" transform="rotate(-90 20 {0:.2})">{ACCURACY_AXIS_LABEL}</text>"#,
        (top + bottom) / 2.0
    )?;

    for (i, (_, slug, pts)) in lines.iter().enumerate() {
        let coords: Vec<String> = pts
            .iter()
            .map(|&(x, y)| {
                format!(
                    "{:.2},{:.2}",
                    x_axis.project(x, left, right),
                    y_axis.project(y, bottom, top)
                )
            })
            .collect();
        writeln!(
            svg,
            r#"<polyline data-method="{slug}" fill="none" stroke="{}" stroke-width="1.5" points="{}"/>"#,
            PALETTE[i % PALETTE.len()],
            coords.join(" ")
        )?;
    }

    let legend_w = 130.0;
    let legend_h = 10.0 + 18.0 * lines.len() as f64;
    let (lx, ly) = (right - legend_w - 10.0, bottom - legend_h - 10.0);
    writeln!(
        svg,
        r##"<rect x="{lx:.2}" y="{ly:.2}" width="{legend_w:.2}" height="{legend_h:.2}" fill="white" fill-opacity="0.8" stroke="#ccc"/>"##
    )?;
    for (i, (label, _, _)) in lines.iter().enumerate() {
        let y = ly + 18.0 * (i as f64 + 1.0);
        writeln!(
            svg,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="2"/><text x="{:.2}" y="{:.2}" font-size="12">{label}</text>"#,
            lx + 8.0,
            y - 4.0,
            lx + 30.0,
            y - 4.0,
            PALETTE[i % PALETTE.len()],
            lx + 36.0,
            y
        )?;
    }

    writeln!(svg, "</svg>")?;
    Ok(svg)
}

/// [`render_svg`] straight to a file, creating parent directories.
pub fn write_svg(
    path: &Path,
    results: &ExperimentResults,
    kind: ChartKind,
    width: u32,
    height: u32,
) -> Result<(), ReportError> {
    let svg = render_svg(results, kind, width, height)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, svg)?;
    info!(path = %path.display(), chart = %kind, "wrote chart");
    Ok(())
}
