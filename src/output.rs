//! Output formatting and persistence for summaries and filtered records.
//!
//! Supports debug/JSON logging and CSV export.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::{debug, info};

use crate::analyzers::types::{Summary, SummaryKind};
use crate::error::{Result, RollupError};
use crate::ingest::{CSV_EXTENSION, has_csv_extension};
use crate::record::Record;

/// Header of the value column in summary exports.
pub const VALUE_HEADER: &str = "Average Home Value Index";

/// Cell written for keys without any valid observation.
pub const MISSING_VALUE: &str = "N/A";

/// Logs a summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &Summary) {
    debug!("{:#?}", summary);
}

/// Logs a summary as pretty-printed JSON.
pub fn print_json(summary: &Summary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Returns `path` with `.csv` appended unless it already ends in it.
pub fn with_csv_extension(path: &Path) -> PathBuf {
    if has_csv_extension(path) {
        path.to_path_buf()
    } else {
        let mut raw = path.as_os_str().to_owned();
        raw.push(CSV_EXTENSION);
        PathBuf::from(raw)
    }
}

/// Formats an average with two decimals, or [`MISSING_VALUE`] when absent.
pub fn format_average(avg: Option<f64>) -> String {
    match avg {
        Some(v) => format!("{v:.2}"),
        None => MISSING_VALUE.to_string(),
    }
}

/// Writes a two-column summary table sorted by key and returns the path written.
///
/// County summaries must be non-empty; date summaries may be empty or all
/// missing.
pub fn write_summary(summary: &Summary, kind: SummaryKind, path: impl AsRef<Path>) -> Result<PathBuf> {
    if kind == SummaryKind::County && summary.is_empty() {
        return Err(RollupError::EmptyData {
            what: "county summary",
        });
    }

    let path = with_csv_extension(path.as_ref());
    let mut writer = create_writer(&path)?;
    let csv_err = |source: csv::Error| RollupError::Csv {
        path: path.clone(),
        source,
    };

    writer.write_record([kind.label(), VALUE_HEADER]).map_err(csv_err)?;
    for (key, avg) in summary {
        writer
            .write_record([key.as_str(), format_average(*avg).as_str()])
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|e| csv_err(e.into()))?;

    info!(path = %path.display(), rows = summary.len(), kind = kind.label(), "Wrote summary");
    Ok(path)
}

/// Writes records back out as CSV, using the first record's columns as header.
///
/// Values missing from later records are written empty; columns the first
/// record lacks are dropped.
pub fn write_records(records: &[Record], path: impl AsRef<Path>) -> Result<PathBuf> {
    let Some(first) = records.first() else {
        return Err(RollupError::EmptyData { what: "record list" });
    };

    let path = with_csv_extension(path.as_ref());
    let mut writer = create_writer(&path)?;
    let csv_err = |source: csv::Error| RollupError::Csv {
        path: path.clone(),
        source,
    };

    let header: Vec<&str> = first.columns().collect();
    writer.write_record(&header).map_err(csv_err)?;
    for record in records {
        writer
            .write_record(header.iter().map(|c| record.get(c).unwrap_or("")))
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|e| csv_err(e.into()))?;

    info!(path = %path.display(), rows = records.len(), "Wrote records");
    Ok(path)
}

fn create_writer(path: &Path) -> Result<csv::Writer<File>> {
    debug!(path = %path.display(), "Creating CSV output");
    let file = File::create(path).map_err(|source| RollupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(WriterBuilder::new().has_headers(false).from_writer(file))
}
