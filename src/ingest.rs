//! CSV loader shared by every pipeline.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Result, RollupError};
use crate::record::{Dataset, Record};

pub(crate) const CSV_EXTENSION: &str = ".csv";

/// Loads a CSV file into a [`Dataset`], one [`Record`] per data row.
///
/// The header row names the columns. Values are kept as raw strings; short
/// rows are padded with empty values and cells beyond the header are dropped.
///
/// # Errors
///
/// - [`RollupError::Format`] if `path` does not end in `.csv`
/// - [`RollupError::NotFound`] if the file does not exist
/// - [`RollupError::Io`] / [`RollupError::Csv`] for any other read failure
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_table(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    if !has_csv_extension(path) {
        return Err(RollupError::Format {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => RollupError::NotFound {
            path: path.to_path_buf(),
        },
        _ => RollupError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let csv_err = |source: csv::Error| RollupError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = rdr.headers().map_err(csv_err)?.clone();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(csv_err)?;
        let record = Record::from_pairs(
            headers
                .iter()
                .enumerate()
                .map(|(i, column)| (column, row.get(i).unwrap_or(""))),
        );
        rows.push(record);
    }

    debug!(rows = rows.len(), columns = headers.len(), "Loaded table");
    Ok(rows)
}

pub(crate) fn has_csv_extension(path: &Path) -> bool {
    path.to_str().is_some_and(|p| p.ends_with(CSV_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(name), content).unwrap();
        dir
    }

    #[test]
    fn test_load_table_preserves_order() {
        let dir = write_temp(
            "homes.csv",
            "RegionID,CountyName,2025-01-31\n1,Marion County,100\n2,Lane County,\n",
        );
        let rows = load_table(dir.path().join("homes.csv")).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("RegionID"), Some("1"));
        assert_eq!(rows[1].get("CountyName"), Some("Lane County"));
        assert_eq!(rows[1].get("2025-01-31"), Some(""));
        let columns: Vec<_> = rows[0].columns().collect();
        assert_eq!(columns, vec!["RegionID", "CountyName", "2025-01-31"]);
    }

    #[test]
    fn test_load_table_pads_short_rows() {
        let dir = write_temp("short.csv", "a,b,c\n1,2\n");
        let rows = load_table(dir.path().join("short.csv")).unwrap();
        assert_eq!(rows[0].get("c"), Some(""));
        assert_eq!(rows[0].len(), 3);
    }

    #[test]
    fn test_load_table_rejects_extension() {
        let err = load_table("homes.txt").unwrap_err();
        assert!(matches!(err, RollupError::Format { .. }));
    }

    #[test]
    fn test_load_table_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, RollupError::NotFound { .. }));
    }

    #[test]
    fn test_load_table_header_only() {
        let dir = write_temp("empty.csv", "RegionID,2025-01-31\n");
        let rows = load_table(dir.path().join("empty.csv")).unwrap();
        assert!(rows.is_empty());
    }
}
