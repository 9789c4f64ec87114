use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical layout of a source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One row per (period, category) pair with explicit category and value columns.
    Long,
    /// One row per period, one column per category.
    Wide,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Long => "long",
            Layout::Wide => "wide",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized `(period, category, value)` observation.
///
/// Several records may share a `(period, category)` pair; they must be
/// aggregated before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub period: i32,
    pub category: String,
    pub value: f64,
}

impl CanonicalRecord {
    pub fn new(period: i32, category: impl Into<String>, value: f64) -> Self {
        Self {
            period,
            category: category.into(),
            value,
        }
    }
}
