use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::estimation::Method;
use crate::evaluation::SeriesPoint;
use super::series_point::PointRecord;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SeriesFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl SeriesFormat {
    pub fn extension(self) -> &'static str {
        match self {
            SeriesFormat::Csv => "csv",
            SeriesFormat::Tsv => "tsv",
            SeriesFormat::Json => "json",
        }
    }
}

/// Results of one method across increasing iteration counts.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentSeries {
    method: Method,
    points: Vec<SeriesPoint>,
}

impl ExperimentSeries {
    pub fn new(method: Method) -> Self {
        Self::with_capacity(method, 0)
    }

    pub fn with_capacity(method: Method, capacity: usize) -> Self {
        Self {
            method,
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn push(&mut self, point: SeriesPoint) {
        self.points.push(point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<SeriesPoint> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn accuracies(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.result.accuracy)
    }

    /// Highest accuracy reached and the iteration where it happened.
    pub fn best(&self) -> Option<SeriesPoint> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.result.accuracy.total_cmp(&b.result.accuracy))
    }

    pub fn mean_elapsed_nanos(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        let total: f64 = self.points.iter().map(|p| p.result.elapsed_nanos()).sum();
        Some(total / self.points.len() as f64)
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: SeriesFormat) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);
        match fmt {
            SeriesFormat::Csv => self.write_delimited(&mut w, ',')?,
            SeriesFormat::Tsv => self.write_delimited(&mut w, '\t')?,
            SeriesFormat::Json => self.write_json(&mut w)?,
        }
        w.flush()
    }

    fn write_delimited<W: Write>(&self, w: &mut W, delimiter: char) -> Result<(), Error> {
        writeln!(
            w,
            "iteration{d}estimate{d}accuracy{d}elapsed_ns",
            d = delimiter
        )?;
        for p in &self.points {
            writeln!(
                w,
                "{}{d}{:.12}{d}{:.12}{d}{}",
                p.iteration,
                p.result.estimate,
                p.result.accuracy,
                p.result.elapsed.as_nanos(),
                d = delimiter
            )?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, w: &mut W) -> Result<(), Error> {
        let records: Vec<PointRecord> = self.points.iter().map(SeriesPoint::record).collect();
        serde_json::to_writer_pretty(&mut *w, &records)?;
        writeln!(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::EstimationResult;
    use std::fs;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn point(n: u64, est: f64, acc: f64, ns: u64) -> SeriesPoint {
        SeriesPoint::new(n, EstimationResult::new(est, Duration::from_nanos(ns), acc))
    }

    fn two_rows() -> ExperimentSeries {
        let mut s = ExperimentSeries::new(Method::Leibniz);
        s.push(point(1, 4.0, 72.5, 120));
        s.push(point(2, 2.5, 80.25, 80));
        s
    }

    #[test]
    fn new_is_empty_and_latest_none() {
        let s = ExperimentSeries::new(Method::Wallis);
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        assert!(s.latest().is_none());
        assert!(s.best().is_none());
        assert!(s.mean_elapsed_nanos().is_none());
        assert_eq!(s.method(), Method::Wallis);
    }

    #[test]
    fn push_increases_len_and_latest_returns_copy() {
        let s = two_rows();
        assert_eq!(s.len(), 2);
        let last = s.latest().unwrap();
        assert_eq!(last.iteration, 2);
        assert_eq!(last.result.estimate, 2.5);
        assert_eq!(last.result.accuracy, 80.25);
        assert_eq!(s.accuracies().collect::<Vec<_>>(), vec![72.5, 80.25]);
    }

    #[test]
    fn best_and_mean_elapsed() {
        let s = two_rows();
        assert_eq!(s.best().unwrap().iteration, 2);
        assert_eq!(s.mean_elapsed_nanos(), Some(100.0));
    }

    #[test]
    fn export_csv_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), SeriesFormat::Csv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
iteration,estimate,accuracy,elapsed_ns
1,4.000000000000,72.500000000000,120
2,2.500000000000,80.250000000000,80
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_tsv_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), SeriesFormat::Tsv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
iteration\testimate\taccuracy\telapsed_ns
1\t4.000000000000\t72.500000000000\t120
2\t2.500000000000\t80.250000000000\t80
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_json_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), SeriesFormat::Json).unwrap();

        let got: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(tf.path()).unwrap()).unwrap();
        assert_eq!(
            got,
            serde_json::json!([
                {"iteration": 1, "estimate": 4.0, "accuracy": 72.5, "elapsed_ns": 120},
                {"iteration": 2, "estimate": 2.5, "accuracy": 80.25, "elapsed_ns": 80}
            ])
        );
    }

    #[test]
    fn export_empty_series() {
        let s = ExperimentSeries::new(Method::Archimedes);

        let tf_csv = NamedTempFile::new().unwrap();
        s.export(tf_csv.path(), SeriesFormat::Csv).unwrap();
        assert_eq!(
            fs::read_to_string(tf_csv.path()).unwrap(),
            "iteration,estimate,accuracy,elapsed_ns\n"
        );

        let tf_json = NamedTempFile::new().unwrap();
        s.export(tf_json.path(), SeriesFormat::Json).unwrap();
        assert_eq!(fs::read_to_string(tf_json.path()).unwrap(), "[]\n");
    }

    #[test]
    fn format_parses_from_lowercase() {
        use std::str::FromStr;
        assert_eq!(SeriesFormat::from_str("tsv").unwrap(), SeriesFormat::Tsv);
        assert_eq!(SeriesFormat::Json.to_string(), "json");
        assert_eq!(SeriesFormat::Json.extension(), "json");
    }
}
