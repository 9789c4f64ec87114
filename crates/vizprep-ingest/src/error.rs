//! Error types for table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a table from disk.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected a record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No header row, or nothing but blank lines.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A column requested by name is not in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::EmptyCsv {
            path: PathBuf::from("/data/empty.csv"),
        };
        assert_eq!(err.to_string(), "CSV file is empty: /data/empty.csv");

        let err = IngestError::MissingColumn {
            column: "County".to_string(),
            path: PathBuf::from("map.csv"),
        };
        assert_eq!(err.to_string(), "required column 'County' not found in map.csv");
    }
}
