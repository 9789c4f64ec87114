//! Column role inference from header names.
//!
//! Headers are sniffed with an ordered rule table. For each role the rules
//! are tried in table order; the first rule matching any header wins, and
//! among headers matching that rule the first in column order wins. Keeping
//! the priorities in one declarative table makes them auditable and testable
//! without running the rest of the pipeline.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use vizprep_model::{ColumnRole, ColumnRoles, RawTable, RuleHit};

/// Period column name used when no header matches a period rule.
pub const FALLBACK_PERIOD_COLUMN: &str = "Year";

/// One `(role, pattern)` entry of the sniffing table.
#[derive(Debug)]
pub struct RoleRule {
    pub role: ColumnRole,
    pub label: &'static str,
    pattern: Regex,
}

impl RoleRule {
    fn new(role: ColumnRole, label: &'static str, pattern: &str) -> Self {
        Self {
            role,
            label,
            pattern: Regex::new(pattern).expect("Invalid role rule regex"),
        }
    }

    /// Tests an already-normalized header.
    pub fn matches(&self, normalized_header: &str) -> bool {
        self.pattern.is_match(normalized_header)
    }
}

/// The sniffing table, grouped by role and ordered by priority.
pub static ROLE_RULES: LazyLock<Vec<RoleRule>> = LazyLock::new(|| {
    vec![
        RoleRule::new(ColumnRole::Period, "period.exact", r"^year$"),
        RoleRule::new(
            ColumnRole::Period,
            "period.qualified",
            r"\b(?:fiscal|academic|calendar)\b.*\byear\b",
        ),
        RoleRule::new(ColumnRole::Period, "period.contains", r"year"),
        RoleRule::new(
            ColumnRole::Category,
            "category.removal",
            r"removal.*(?:description|type|category)",
        ),
        RoleRule::new(
            ColumnRole::Category,
            "category.label",
            r"description|category|reason",
        ),
        RoleRule::new(ColumnRole::Measure, "measure.exact", r"^count$"),
        RoleRule::new(
            ColumnRole::Measure,
            "measure.vocabulary",
            r"\b(?:confirmed\s*cps\s*victims?|victims?|cases?|value|total|num(?:ber)?)\b",
        ),
    ]
});

/// Trims, collapses internal whitespace runs and lowercases a header.
pub fn normalize_header(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// First header matched for `role`, with the rule that matched it.
pub fn find_column(headers: &[String], role: ColumnRole) -> Option<RuleHit> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    ROLE_RULES
        .iter()
        .filter(|rule| rule.role == role)
        .find_map(|rule| {
            normalized
                .iter()
                .position(|h| rule.matches(h))
                .map(|idx| RuleHit {
                    role,
                    rule: rule.label.to_string(),
                    column: headers[idx].clone(),
                })
        })
}

/// Infers column roles from a header list.
pub fn infer_roles_from_headers(headers: &[String]) -> ColumnRoles {
    let mut hits = Vec::new();
    let mut column_for = |role: ColumnRole| {
        let hit = find_column(headers, role);
        match &hit {
            Some(hit) => debug!(
                role = %role,
                column = %hit.column,
                rule = %hit.rule,
                "column role matched"
            ),
            None => debug!(role = %role, "no column matched role"),
        }
        hit.map(|hit| {
            let column = hit.column.clone();
            hits.push(hit);
            column
        })
    };

    let period_column = column_for(ColumnRole::Period)
        .unwrap_or_else(|| FALLBACK_PERIOD_COLUMN.to_string());
    let category_column = column_for(ColumnRole::Category);
    let measure_column = column_for(ColumnRole::Measure);

    ColumnRoles {
        period_column,
        category_column,
        measure_column,
        hits,
    }
}

/// Infers column roles for a table.
pub fn infer_roles(table: &RawTable) -> ColumnRoles {
    infer_roles_from_headers(table.headers())
}
