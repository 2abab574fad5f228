//! CLI entry point for the home value rollup tool.
//!
//! Provides subcommands for filtering a Zillow home value export down to one
//! region, averaging a target date per county, building the per-date average
//! series, and running all three in sequence.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use home_value_rollup::config::{DATE_FORMAT, RollupConfig, default_target_date};
use home_value_rollup::pipeline::{Report, run_counties, run_filter, run_series};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const RAW_INPUT: &str = "zillow_home_values.csv";
const FILTERED_OUTPUT: &str = "oregon_zillow_homes.csv";
const COUNTY_OUTPUT: &str = "oregon_county_home_values.csv";
const SERIES_OUTPUT: &str = "average_oregon_home_value_timeseries.csv";

#[derive(Parser)]
#[command(name = "home_value_rollup")]
#[command(about = "Summarize Zillow home value index exports by county and date", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Keep only the records of one state
    Filter {
        /// CSV export to read
        #[arg(short, long, default_value = RAW_INPUT)]
        input: PathBuf,

        /// CSV file to write the kept records to
        #[arg(short, long, default_value = FILTERED_OUTPUT)]
        output: PathBuf,

        /// State code to keep
        #[arg(short, long, default_value = "OR")]
        region: String,
    },
    /// Average one date's index per county
    Counties {
        #[arg(short, long, default_value = FILTERED_OUTPUT)]
        input: PathBuf,

        #[arg(short, long, default_value = COUNTY_OUTPUT)]
        output: PathBuf,

        /// Date column to average (YYYY-MM-DD)
        #[arg(short, long, value_parser = parse_date_arg, default_value_t = default_target_date())]
        date: NaiveDate,

        /// Log the computed averages as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Average every date column across all records
    Series {
        #[arg(short, long, default_value = FILTERED_OUTPUT)]
        input: PathBuf,

        #[arg(short, long, default_value = SERIES_OUTPUT)]
        output: PathBuf,

        /// Log the computed series as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Filter, then build both county and date summaries
    Run {
        #[arg(short, long, default_value = RAW_INPUT)]
        input: PathBuf,

        /// Directory to write all three output files to
        #[arg(short = 'd', long, default_value = ".")]
        output_dir: PathBuf,

        #[arg(short, long, default_value = "OR")]
        region: String,

        #[arg(long, value_parser = parse_date_arg, default_value_t = default_target_date())]
        date: NaiveDate,
    },
}

fn main() {
    dotenvy::dotenv().ok(); // Load .env file

    let file_guard = init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!(error = %format!("{e:#}"), "Pipeline failed");
        eprintln!("An error occurred: {e:#}");
        // Flush the JSON log before exiting.
        drop(file_guard);
        std::process::exit(1);
    }
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_tracing() -> WorkerGuard {
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/home_value_rollup.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("home_value_rollup.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive(LevelFilter::INFO.into()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive(LevelFilter::DEBUG.into()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Filter {
            input,
            output,
            region,
        } => {
            let config = RollupConfig::default().with_region(region);
            let written = run_filter(&input, &output, &config)
                .with_context(|| format!("filtering {}", input.display()))?;
            info!(path = %written.display(), "Filtered data written");
        }
        Commands::Counties {
            input,
            output,
            date,
            json,
        } => {
            let config = RollupConfig::default().with_target_date(date);
            let written = run_counties(&input, &output, &config, report(json))
                .with_context(|| format!("averaging counties in {}", input.display()))?;
            info!(path = %written.display(), "Successfully wrote county indexes");
        }
        Commands::Series {
            input,
            output,
            json,
        } => {
            let written = run_series(&input, &output, report(json))
                .with_context(|| format!("averaging dates in {}", input.display()))?;
            info!(path = %written.display(), "Successfully wrote date indexes");
        }
        Commands::Run {
            input,
            output_dir,
            region,
            date,
        } => {
            std::fs::create_dir_all(&output_dir)
                .with_context(|| format!("creating {}", output_dir.display()))?;
            let config = RollupConfig::default()
                .with_region(region)
                .with_target_date(date);

            let filtered = run_filter(&input, &output_dir.join(FILTERED_OUTPUT), &config)?;
            let counties = run_counties(&filtered, &output_dir.join(COUNTY_OUTPUT), &config, Report::Quiet)?;
            let series = run_series(&filtered, &output_dir.join(SERIES_OUTPUT), Report::Quiet)?;

            info!(
                filtered = %filtered.display(),
                counties = %counties.display(),
                series = %series.display(),
                "All pipelines finished"
            );
        }
    }

    Ok(())
}

fn report(json: bool) -> Report {
    if json { Report::Json } else { Report::Quiet }
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
