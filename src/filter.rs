//! Region filtering.

use tracing::debug;

use crate::config::DEFAULT_REGION;
use crate::record::{Record, STATE_COLUMN};

/// Returns the records whose `StateName` equals `region` exactly, in input order.
///
/// Records without a `StateName` column never match.
pub fn filter_region(records: &[Record], region: &str) -> Vec<Record> {
    filter_by(records, STATE_COLUMN, region)
}

/// [`filter_region`] with the default region code `"OR"`.
pub fn filter_oregon(records: &[Record]) -> Vec<Record> {
    filter_region(records, DEFAULT_REGION)
}

/// Returns the records whose `column` equals `value` exactly, in input order.
pub fn filter_by(records: &[Record], column: &str, value: &str) -> Vec<Record> {
    let kept: Vec<Record> = records
        .iter()
        .filter(|r| r.get(column) == Some(value))
        .cloned()
        .collect();

    debug!(column, value, total = records.len(), kept = kept.len(), "Filtered records");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, state: &str) -> Record {
        Record::from_pairs([("RegionID", id), ("StateName", state)])
    }

    #[test]
    fn test_filter_region_keeps_order() {
        let rows = vec![row("1", "OR"), row("2", "WA"), row("3", "OR"), row("4", "CA")];
        let kept = filter_oregon(&rows);

        let ids: Vec<_> = kept.iter().filter_map(|r| r.get("RegionID")).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_filter_region_is_case_sensitive() {
        let rows = vec![row("1", "or"), row("2", "OR "), row("3", "OR")];
        let kept = filter_region(&rows, "OR");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("RegionID"), Some("3"));
    }

    #[test]
    fn test_filter_region_missing_column_does_not_match() {
        let rows = vec![
            Record::from_pairs([("RegionID", "1")]),
            row("2", "OR"),
        ];
        let kept = filter_oregon(&rows);
        assert_eq!(kept, vec![row("2", "OR")]);
    }

    #[test]
    fn test_filter_region_empty() {
        assert!(filter_oregon(&[]).is_empty());
    }

    #[test]
    fn test_filter_region_is_subsequence() {
        let rows: Vec<_> = (0..20)
            .map(|i| row(&i.to_string(), if i % 3 == 0 { "OR" } else { "NV" }))
            .collect();
        let kept = filter_oregon(&rows);

        let mut pos = 0;
        for r in &kept {
            let found = rows[pos..].iter().position(|x| x == r).unwrap();
            pos += found + 1;
        }
        assert_eq!(kept.len(), 7);
    }
}
