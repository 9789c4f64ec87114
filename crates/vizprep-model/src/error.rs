use std::fmt;

use thiserror::Error;

use crate::record::Layout;
use crate::roles::ColumnRole;

/// Why a table produced nothing to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDataReason {
    /// Wide layout found no column with a single numeric cell.
    NoValueColumns,
    /// Every row was dropped during parsing.
    NoRecords,
}

impl fmt::Display for NoDataReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoValueColumns => f.write_str("no numeric value columns"),
            Self::NoRecords => f.write_str("no rows with a usable period and value"),
        }
    }
}

/// Schema-level failures. Cell-level parse failures never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A column named by the roles is absent from the header set.
    #[error("no {} column found: expected '{column}', available: [{}]", .role.noun(), .available.join(", "))]
    MissingRequiredColumn {
        role: ColumnRole,
        column: String,
        available: Vec<String>,
    },

    /// Schema is usable but nothing survived normalization.
    #[error("empty result ({layout} layout): {reason}")]
    NoQualifyingData { layout: Layout, reason: NoDataReason },
}

pub type Result<T> = std::result::Result<T, ShapeError>;
