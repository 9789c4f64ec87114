#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// A loaded table snapshot: ordered headers plus rows of raw cell text.
///
/// Rows are stored positionally and always have exactly one cell per header;
/// short rows are padded with empty cells and long rows are truncated when the
/// table is built. Lookups by header name resolve to the first header with that
/// exact name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Convenience constructor from borrowed text, mostly for fixtures.
    pub fn from_strs(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter().map(|cells| RowView { cells })
    }
}

/// Borrowed view of one row, addressed by column position.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    cells: &'a [String],
}

impl<'a> RowView<'a> {
    /// Cell text at `idx`; out-of-range positions read as empty text.
    pub fn cell(&self, idx: usize) -> &'a str {
        self.cells.get(idx).map_or("", String::as_str)
    }

    pub fn cells(&self) -> &'a [String] {
        self.cells
    }
}
