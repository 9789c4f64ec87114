use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use vizprep_model::RawTable;

use crate::error::{IngestError, Result};

/// Origin reported in errors for tables parsed from an arbitrary reader.
pub const READER_ORIGIN: &str = "<reader>";

/// Strips surrounding whitespace and byte-order marks. Inner spacing is kept,
/// so `County  A` and `County A` stay distinct headers.
fn clean_field(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Loads a CSV file into a [`RawTable`].
///
/// The first non-blank line is the header row. Blank lines are skipped, and
/// ragged rows are padded or truncated to the header width.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_from(file, path)
}

/// Same as [`read_raw_table`] for an already-open reader.
pub fn parse_raw_table<R: Read>(reader: R) -> Result<RawTable> {
    parse_from(reader, Path::new(READER_ORIGIN))
}

fn parse_from<R: Read>(reader: R, origin: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut blank_rows = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: origin.to_path_buf(),
            source,
        })?;
        if record.iter().all(|value| clean_field(value).is_empty()) {
            blank_rows += 1;
            continue;
        }
        match headers {
            None => headers = Some(record.iter().map(clean_field).collect()),
            Some(_) => rows.push(record.iter().map(clean_field).collect()),
        }
    }
    let Some(headers) = headers else {
        return Err(IngestError::EmptyCsv {
            path: origin.to_path_buf(),
        });
    };
    let table = RawTable::new(headers, rows);
    debug!(
        path = %origin.display(),
        rows = table.row_count(),
        columns = table.headers().len(),
        blank_rows,
        "loaded csv table"
    );
    Ok(table)
}
