//! Row representation for home value index tables.

/// Column holding the county name.
pub const COUNTY_COLUMN: &str = "CountyName";

/// Column holding the two-letter state code used for region filtering.
pub const STATE_COLUMN: &str = "StateName";

/// Non-date columns excluded from every aggregation.
pub const IDENTITY_COLUMNS: &[&str] = &[
    "RegionID",
    "SizeRank",
    "RegionName",
    "RegionType",
    "StateName",
    "State",
    "City",
    "Metro",
    "CountyName",
];

/// Returns `true` if `column` is one of the [`IDENTITY_COLUMNS`].
pub fn is_identity_column(column: &str) -> bool {
    IDENTITY_COLUMNS.contains(&column)
}

/// A single table row: column name to raw cell value, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(column, value)` pairs, keeping their order.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Appends a field. Lookups return the first field with a given name.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.push((column.into(), value.into()));
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An ordered sequence of records loaded from one table.
pub type Dataset = Vec<Record>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_keeps_column_order() {
        let record = Record::from_pairs([("RegionID", "1"), ("2025-01-31", "10"), ("City", "Salem")]);
        let columns: Vec<_> = record.columns().collect();
        assert_eq!(columns, vec!["RegionID", "2025-01-31", "City"]);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_get_missing_column() {
        let record = Record::from_pairs([("StateName", "OR")]);
        assert_eq!(record.get("StateName"), Some("OR"));
        assert_eq!(record.get("CountyName"), None);
    }

    #[test]
    fn test_identity_columns() {
        assert!(is_identity_column("CountyName"));
        assert!(is_identity_column("SizeRank"));
        assert!(!is_identity_column("2025-01-31"));
        assert!(!is_identity_column("countyname"));
    }
}
