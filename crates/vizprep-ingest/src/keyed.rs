//! Region-keyed values for choropleth tables.

use std::path::Path;

use tracing::debug;

use vizprep_core::parse_magnitude;
use vizprep_model::{KeyedValues, RawTable};

use crate::csv_table::read_raw_table;
use crate::error::{IngestError, Result};

/// Finds `name` among the headers, falling back to a case-insensitive match.
fn resolve_column(table: &RawTable, name: &str) -> Option<usize> {
    table.column_index(name).or_else(|| {
        let wanted = name.trim().to_lowercase();
        table
            .headers()
            .iter()
            .position(|h| h.trim().to_lowercase() == wanted)
    })
}

/// Builds a key → value mapping from two columns of a loaded table.
///
/// Rows with a blank key are skipped. Values that do not parse are kept as
/// `None` so renderers can draw them as missing.
pub fn keyed_values(
    table: &RawTable,
    key_column: &str,
    value_column: &str,
    origin: &Path,
) -> Result<KeyedValues> {
    let missing = |column: &str| IngestError::MissingColumn {
        column: column.to_string(),
        path: origin.to_path_buf(),
    };
    let key_idx = resolve_column(table, key_column).ok_or_else(|| missing(key_column))?;
    let value_idx = resolve_column(table, value_column).ok_or_else(|| missing(value_column))?;

    let mut values = KeyedValues::new();
    let mut skipped = 0usize;
    for row in table.rows() {
        let key = row.cell(key_idx);
        if key.trim().is_empty() {
            skipped += 1;
            continue;
        }
        values.insert(key, parse_magnitude(row.cell(value_idx)));
    }
    debug!(
        path = %origin.display(),
        keys = values.len(),
        skipped,
        "extracted keyed values"
    );
    Ok(values)
}

/// Loads a CSV file and extracts `key_column` → `value_column`.
pub fn read_keyed_values(path: &Path, key_column: &str, value_column: &str) -> Result<KeyedValues> {
    let table = read_raw_table(path)?;
    keyed_values(&table, key_column, value_column, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RawTable {
        RawTable::from_strs(
            &["County", "Difference 15-24"],
            &[
                &["Travis", "-12.5"],
                &["", "4"],
                &["Harris", "n/a"],
                &["TRAVIS", "3"],
            ],
        )
    }

    #[test]
    fn extracts_values_by_normalized_key() {
        let values = keyed_values(&table(), "County", "Difference 15-24", Path::new("t.csv"))
            .expect("keyed values");
        assert_eq!(values.len(), 2);
        assert_eq!(values.get("travis"), Some(3.0));
        assert_eq!(values.get("Harris"), None);
        assert_eq!(values.finite_values().collect::<Vec<_>>(), vec![3.0]);
    }

    #[test]
    fn column_names_match_case_insensitively() {
        let values = keyed_values(&table(), "county", "difference 15-24", Path::new("t.csv"))
            .expect("keyed values");
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn missing_value_column_is_reported() {
        let err = keyed_values(&table(), "County", "Change", Path::new("t.csv")).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "Change"));
    }
}
