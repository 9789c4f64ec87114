//! Column roles inferred from a table's headers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Layout;

/// Role a column plays in the chart pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    Period,
    Category,
    Measure,
}

impl ColumnRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnRole::Period => "period",
            ColumnRole::Category => "category",
            ColumnRole::Measure => "measure",
        }
    }

    /// Human wording used in error messages.
    pub fn noun(self) -> &'static str {
        match self {
            ColumnRole::Period => "time-period",
            ColumnRole::Category => "category",
            ColumnRole::Measure => "measure",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule assigned a column to a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub role: ColumnRole,
    /// Stable rule label, e.g. `period.exact`.
    pub rule: String,
    pub column: String,
}

/// Result of header sniffing for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoles {
    /// Period column name. May be the literal fallback `Year`, which is not
    /// guaranteed to exist in the table.
    pub period_column: String,
    pub category_column: Option<String>,
    pub measure_column: Option<String>,
    /// Rules that matched, in role order. A role without a hit was not matched
    /// by any rule.
    pub hits: Vec<RuleHit>,
}

impl ColumnRoles {
    /// Long layout needs both an explicit category and an explicit measure.
    pub fn layout(&self) -> Layout {
        if self.category_column.is_some() && self.measure_column.is_some() {
            Layout::Long
        } else {
            Layout::Wide
        }
    }

    pub fn hit_for(&self, role: ColumnRole) -> Option<&RuleHit> {
        self.hits.iter().find(|hit| hit.role == role)
    }

    /// True when no rule matched and the literal fallback name is in use.
    pub fn period_is_fallback(&self) -> bool {
        self.hit_for(ColumnRole::Period).is_none()
    }
}
