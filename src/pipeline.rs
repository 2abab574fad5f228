//! End-to-end pipelines: load a table, transform it, write the result.
//!
//! Each pipeline loads its own dataset and runs to completion before
//! returning the path it wrote.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::analyzers::county::{county_averages, to_summary};
use crate::analyzers::series::date_averages;
use crate::analyzers::types::{Summary, SummaryKind};
use crate::config::RollupConfig;
use crate::error::Result;
use crate::filter::filter_by;
use crate::ingest::load_table;
use crate::output::{print_json, print_pretty, write_records, write_summary};

/// Whether to log the computed summary before writing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Report {
    #[default]
    Quiet,
    Json,
}

/// Keeps the records of `config.region` and writes them to `output`.
#[tracing::instrument(skip_all, fields(input = %input.display(), region = %config.region))]
pub fn run_filter(input: &Path, output: &Path, config: &RollupConfig) -> Result<PathBuf> {
    let records = load_table(input)?;
    let kept = filter_by(&records, &config.region_field, &config.region);
    info!(total = records.len(), kept = kept.len(), "Region filter applied");
    write_records(&kept, output)
}

/// Computes per-county averages for `config.target_date` and writes them to `output`.
#[tracing::instrument(skip_all, fields(input = %input.display(), date = %config.target_date))]
pub fn run_counties(input: &Path, output: &Path, config: &RollupConfig, report: Report) -> Result<PathBuf> {
    let records = load_table(input)?;
    let summary = to_summary(county_averages(&records, config.target_date));
    emit(&summary, report)?;
    write_summary(&summary, SummaryKind::County, output)
}

/// Computes the per-date average series and writes it to `output`.
#[tracing::instrument(skip_all, fields(input = %input.display()))]
pub fn run_series(input: &Path, output: &Path, report: Report) -> Result<PathBuf> {
    let records = load_table(input)?;
    let summary = date_averages(&records);
    emit(&summary, report)?;
    write_summary(&summary, SummaryKind::Date, output)
}

fn emit(summary: &Summary, report: Report) -> Result<()> {
    print_pretty(summary);
    match report {
        Report::Quiet => Ok(()),
        Report::Json => print_json(summary),
    }
}
