use std::fmt::Write;

use crate::reporting::ReportError;
use crate::tasks::ExperimentResults;

/// Plain-text table with the final and best accuracy of every method.
pub fn render_summary(results: &ExperimentResults) -> Result<String, ReportError> {
    if results.is_empty() {
        return Err(ReportError::EmptyResults);
    }

    let mut out = String::new();
    writeln!(
        out,
        "Pi estimations: {} iterations, started {}",
        results.iterations(),
        results.started_at().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(
        out,
        "{:<12} {:>16} {:>12} {:>20} {:>14}",
        "Method", "Final estimate", "Final acc %", "Best acc % (n)", "Mean time ns"
    )?;
    writeln!(out, "{}", "-".repeat(78))?;

    for (method, series) in results.iter() {
        let Some(last) = series.latest() else {
            writeln!(out, "{:<12} {:>16}", method.label(), "-")?;
            continue;
        };
        let best = series
            .best()
            .map(|b| format!("{:.6} ({})", b.result.accuracy, b.iteration))
            .unwrap_or_default();
        let mean = series.mean_elapsed_nanos().unwrap_or(f64::NAN);
        writeln!(
            out,
            "{:<12} {:>16.12} {:>12.6} {:>20} {:>14.0}",
            method.label(),
            last.result.estimate,
            last.result.accuracy,
            best,
            mean
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::ExperimentRunner;
    use std::collections::BTreeMap;

    #[test]
    fn one_row_per_method_in_order() {
        let results = ExperimentRunner::standard(10, Some(8)).unwrap().run().unwrap();
        let table = render_summary(&results).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].contains("10 iterations"));
        assert!(lines[1].starts_with("Method"));
        let rows: Vec<&str> = lines[3..].iter().map(|l| &l[..12]).collect();
        assert_eq!(
            rows,
            vec!["Archimedes  ", "Leibniz     ", "Wallis      ", "Monte Carlo "]
        );
    }

    #[test]
    fn empty_results_error() {
        let empty = ExperimentResults::new(0, chrono::Local::now(), BTreeMap::new());
        assert!(matches!(render_summary(&empty), Err(ReportError::EmptyResults)));
    }
}
