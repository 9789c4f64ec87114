//! Entry points tying inference, normalization, aggregation and domains together.
//!
//! Every call works on its own inputs and returns freshly built outputs; no
//! scale or table state is kept between calls.

use tracing::{info, info_span, warn};

use vizprep_model::{AggregateResult, ColumnRoles, DomainOptions, RawTable, Result, ScaleDomains};

use crate::aggregate::aggregate;
use crate::domains::derive_domains;
use crate::layout::normalize;
use crate::roles::infer_roles;

/// Normalizes a table under the given roles and aggregates it into series.
///
/// # Errors
///
/// Schema-level failures only; malformed cells are dropped or zero-filled.
pub fn normalize_and_aggregate(table: &RawTable, roles: &ColumnRoles) -> Result<AggregateResult> {
    let normalized = normalize(table, roles)?;
    Ok(aggregate(normalized.layout, &normalized.records))
}

/// Everything produced for one chart render.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedChart {
    pub roles: ColumnRoles,
    pub aggregate: AggregateResult,
    pub domains: ScaleDomains,
    pub dropped_rows: usize,
}

/// Runs the full pipeline for one table snapshot.
///
/// # Errors
///
/// Returns the table's [`ShapeError`](vizprep_model::ShapeError) when the
/// schema is unusable or no rows qualify.
pub fn prepare_chart(table: &RawTable, options: &DomainOptions) -> Result<PreparedChart> {
    let span = info_span!(
        "prepare_chart",
        rows = table.row_count(),
        columns = table.headers().len()
    );
    let _guard = span.enter();

    let roles = infer_roles(table);
    let normalized = normalize(table, &roles).inspect_err(|error| {
        warn!(%error, period_column = %roles.period_column, "table has nothing to draw");
    })?;
    let aggregate = aggregate(normalized.layout, &normalized.records);
    let domains = derive_domains(&aggregate, options);
    info!(
        layout = %aggregate.layout,
        periods = aggregate.periods.len(),
        categories = aggregate.categories.len(),
        dropped_rows = normalized.dropped_rows,
        "chart data prepared"
    );

    Ok(PreparedChart {
        roles,
        aggregate,
        domains,
        dropped_rows: normalized.dropped_rows,
    })
}
