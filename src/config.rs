//! Pipeline parameters.

use chrono::NaiveDate;

use crate::record::STATE_COLUMN;

/// Region code kept by the default filter.
pub const DEFAULT_REGION: &str = "OR";

/// Format of date-labelled column headers.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date whose values are averaged per county unless overridden.
pub fn default_target_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).expect("2025-01-31 is a valid date")
}

/// Knobs shared by the filter and county pipelines.
#[derive(Debug, Clone, PartialEq)]
pub struct RollupConfig {
    /// Column compared against `region`.
    pub region_field: String,
    pub region: String,
    pub target_date: NaiveDate,
}

impl Default for RollupConfig {
    fn default() -> Self {
        Self {
            region_field: STATE_COLUMN.to_string(),
            region: DEFAULT_REGION.to_string(),
            target_date: default_target_date(),
        }
    }
}

impl RollupConfig {
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = date;
        self
    }
}

/// Parses a `YYYY-MM-DD` string, returning `None` for anything else.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}
