//! Export evaluations and sweeps to files.
//!
//! JSON is the "portable" representation (catalog metadata + the evaluated
//! strings, or the full sweep series); the CSV sweep export is meant to be
//! easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::catalog::CatalogEntry;
use crate::domain::{Evaluation, SweepSeries};
use crate::error::AppError;

/// On-disk schema for an exported evaluation.
#[derive(Debug, Serialize)]
pub struct EvaluationFile<'a> {
    pub tool: &'static str,
    #[serde(flatten)]
    pub entry: &'a CatalogEntry,
    #[serde(flatten)]
    pub evaluation: &'a Evaluation,
}

/// Write one evaluation (with its catalog metadata) to a JSON file.
pub fn write_evaluation_json(
    path: &Path,
    entry: &CatalogEntry,
    evaluation: &Evaluation,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create evaluation JSON '{}': {e}", path.display()),
        )
    })?;

    let record = EvaluationFile {
        tool: "cfa",
        entry,
        evaluation,
    };
    serde_json::to_writer_pretty(file, &record)
        .map_err(|e| AppError::new(2, format!("Failed to write evaluation JSON: {e}")))?;

    Ok(())
}

/// Write a sweep series to a JSON file.
pub fn write_sweep_json(path: &Path, series: &SweepSeries) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create sweep JSON '{}': {e}", path.display()),
        )
    })?;

    serde_json::to_writer_pretty(file, series)
        .map_err(|e| AppError::new(2, format!("Failed to write sweep JSON: {e}")))?;

    Ok(())
}

/// Write a sweep series to a CSV file (x column, one column per series).
pub fn write_sweep_csv(path: &Path, series: &SweepSeries) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create sweep CSV '{}': {e}", path.display()),
        )
    })?;

    let mut header = vec![series.x_label.to_string()];
    header.extend(series.y_labels.iter().map(|l| l.to_string()));
    writeln!(file, "{}", header.join(","))
        .map_err(|e| AppError::new(2, format!("Failed to write sweep CSV header: {e}")))?;

    for point in &series.points {
        let mut row = vec![format!("{}", point.x)];
        row.extend(point.y.iter().map(|y| format!("{y}")));
        writeln!(file, "{}", row.join(","))
            .map_err(|e| AppError::new(2, format!("Failed to write sweep CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SweepPoint;

    fn sample_series() -> SweepSeries {
        SweepSeries {
            x_label: "yield",
            y_labels: vec!["price", "parValue"],
            points: vec![
                SweepPoint { x: 1.0, y: vec![1380.62, 1000.0] },
                SweepPoint { x: 1.25, y: vec![1352.5, 1000.0] },
            ],
        }
    }

    #[test]
    fn sweep_csv_round_trips_as_text() {
        let dir = std::env::temp_dir();
        let path = dir.join("cfa_sweep_test.csv");
        write_sweep_csv(&path, &sample_series()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "yield,price,parValue");
        assert_eq!(lines[1], "1,1380.62,1000");
        assert_eq!(lines[2], "1.25,1352.5,1000");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn sweep_json_round_trips_through_serde() {
        let dir = std::env::temp_dir();
        let path = dir.join("cfa_sweep_test.json");
        let series = sample_series();
        write_sweep_json(&path, &series).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["xLabel"], "yield");
        assert_eq!(value["points"][0]["x"], 1.0);

        std::fs::remove_file(&path).ok();
    }
}
