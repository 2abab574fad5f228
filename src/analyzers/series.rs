use crate::analyzers::types::{Accumulator, Summary};
use crate::analyzers::utility::parse_value;
use crate::record::{Record, is_identity_column};
use tracing::debug;

/// Returns the non-identity columns of the first record, in column order.
///
/// Only the first record is inspected. Columns that first appear in later
/// records are never part of the series.
pub fn discover_date_columns(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|first| {
            first
                .columns()
                .filter(|c| !is_identity_column(c))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Averages every date column across all records.
///
/// Empty and unparseable cells are left out of both the sum and the count. A
/// column with no valid value maps to `None`.
pub fn date_averages(records: &[Record]) -> Summary {
    let columns = discover_date_columns(records);
    let mut totals: Vec<Accumulator> = vec![Accumulator::default(); columns.len()];

    for record in records {
        for (column, acc) in columns.iter().zip(totals.iter_mut()) {
            if let Some(value) = record.get(column).and_then(parse_value) {
                acc.add(value);
            }
        }
    }

    let empty = totals.iter().filter(|acc| acc.count() == 0).count();
    debug!(records = records.len(), columns = columns.len(), empty, "Aggregated date series");

    columns
        .into_iter()
        .zip(totals)
        .map(|(column, acc)| (column, acc.mean()))
        .collect()
}
