use crate::analyzers::types::{Accumulator, CountyKey, Summary};
use crate::analyzers::utility::parse_value;
use crate::config::parse_date;
use crate::record::{COUNTY_COLUMN, Record, is_identity_column};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// County name used when a record has no `CountyName` column.
pub const UNKNOWN_COUNTY: &str = "Unknown";

/// Sums every value in `record` whose column is the `target` date.
///
/// Identity columns, empty cells and columns that are not dates are skipped,
/// as are values that do not parse as numbers.
pub fn target_date_total(record: &Record, target: NaiveDate) -> f64 {
    record
        .iter()
        .filter(|(column, value)| {
            !column.is_empty() && !is_identity_column(column) && !value.is_empty()
        })
        .filter(|(column, _)| parse_date(column) == Some(target))
        .filter_map(|(_, value)| parse_value(value))
        .sum()
}

/// Averages the `target` date's value per normalized county.
///
/// Each record contributes its [`target_date_total`] to its county, and the
/// county's count grows by one per record, so a record with no value for the
/// target date pulls the average towards zero.
pub fn county_averages(records: &[Record], target: NaiveDate) -> BTreeMap<CountyKey, f64> {
    let mut counties: HashMap<CountyKey, Accumulator> = HashMap::new();

    for record in records {
        let name = record.get(COUNTY_COLUMN).unwrap_or(UNKNOWN_COUNTY);
        let key = CountyKey::from_name(name);

        counties
            .entry(key)
            .or_default()
            .add(target_date_total(record, target));
    }

    debug!(records = records.len(), counties = counties.len(), %target, "Aggregated counties");

    counties
        .into_iter()
        .filter_map(|(key, acc)| acc.mean().map(|avg| (key, avg)))
        .collect()
}

/// Converts county averages into an exportable [`Summary`].
pub fn to_summary(averages: BTreeMap<CountyKey, f64>) -> Summary {
    averages
        .into_iter()
        .map(|(key, avg)| (String::from(key), Some(avg)))
        .collect()
}
