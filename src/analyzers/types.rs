//! Data types used by the aggregation pipelines.

use std::collections::BTreeMap;
use std::fmt;

/// Final key to average mapping, iterated in lexicographic key order.
///
/// `None` marks a key that had no valid observations.
pub type Summary = BTreeMap<String, Option<f64>>;

/// Running `(sum, count)` pair finalized into a mean.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Accumulator {
    pub(crate) sum: f64,
    pub(crate) count: u64,
}

impl Accumulator {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns `sum / count`, or `None` when nothing was added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Grouping key derived from a county name: its first whitespace-delimited
/// token, upper-cased.
///
/// `"Marion County"` becomes `"MARION"`. The mapping is lossy: `"Santa Cruz"`
/// and `"Santa Clara"` share the key `"SANTA"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountyKey(String);

impl CountyKey {
    pub fn from_name(name: &str) -> Self {
        let first = name.split_whitespace().next().unwrap_or("");
        CountyKey(first.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CountyKey> for String {
    fn from(key: CountyKey) -> Self {
        key.0
    }
}

/// Which kind of key a [`Summary`] is indexed by; decides the export header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    County,
    Date,
}

impl SummaryKind {
    pub fn label(self) -> &'static str {
        match self {
            SummaryKind::County => "County",
            SummaryKind::Date => "Date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulator_mean() {
        let mut acc = Accumulator::default();
        assert_eq!(acc.mean(), None);

        acc.add(100.0);
        acc.add(200.0);
        assert_eq!(acc.count(), 2);
        assert_eq!(acc.sum(), 300.0);
        assert_eq!(acc.mean(), Some(150.0));
    }

    #[test]
    fn test_accumulator_all_zero_is_not_missing() {
        let mut acc = Accumulator::default();
        acc.add(0.0);
        assert_eq!(acc.mean(), Some(0.0));
    }

    #[test]
    fn test_county_key_normalization() {
        assert_eq!(CountyKey::from_name("Marion County").as_str(), "MARION");
        assert_eq!(CountyKey::from_name("Washington County").as_str(), "WASHINGTON");
        assert_eq!(CountyKey::from_name("Unknown").as_str(), "UNKNOWN");
    }

    #[test]
    fn test_county_key_case_insensitive_and_idempotent() {
        let a = CountyKey::from_name("MARION COUNTY");
        let b = CountyKey::from_name("Marion County");
        let c = CountyKey::from_name("marion");
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(CountyKey::from_name(a.as_str()), a);
    }

    #[test]
    fn test_county_key_is_lossy() {
        assert_eq!(
            CountyKey::from_name("Santa Cruz"),
            CountyKey::from_name("Santa Clara")
        );
    }

    #[test]
    fn test_county_key_blank_name() {
        assert_eq!(CountyKey::from_name("").as_str(), "");
        assert_eq!(CountyKey::from_name("   ").as_str(), "");
        assert_eq!(CountyKey::from_name("  Lane County").as_str(), "LANE");
    }

    #[test]
    fn test_summary_kind_label() {
        assert_eq!(SummaryKind::County.label(), "County");
        assert_eq!(SummaryKind::Date.label(), "Date");
    }
}
