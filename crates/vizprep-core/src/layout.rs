//! Long/wide layout resolution into canonical records.
//!
//! Long tables carry explicit category and measure columns; rows with an
//! unparseable period, an unparseable measure or a blank category are dropped.
//! Wide tables carry one numeric column per category; a blank or malformed
//! cell in a column that is numeric elsewhere counts as zero, and only rows
//! with an unparseable period are dropped.

use tracing::{debug, trace};

use vizprep_model::{
    CanonicalRecord, ColumnRole, ColumnRoles, Layout, NoDataReason, RawTable, Result, ShapeError,
};

use crate::parse::{parse_magnitude, parse_period};

/// Canonical records for one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub layout: Layout,
    pub records: Vec<CanonicalRecord>,
    /// Source columns that supplied values (the measure column in long
    /// layout, every implicit category column in wide layout).
    pub value_columns: Vec<String>,
    /// Rows that contributed no record.
    pub dropped_rows: usize,
}

/// Resolves the table layout and emits canonical records.
///
/// # Errors
///
/// [`ShapeError::MissingRequiredColumn`] when the period column, or a
/// category or measure column named by `roles`, is absent.
/// [`ShapeError::NoQualifyingData`] when nothing usable remains.
pub fn normalize(table: &RawTable, roles: &ColumnRoles) -> Result<Normalized> {
    let period_idx = required_column(table, ColumnRole::Period, &roles.period_column)?;

    let normalized = match (&roles.category_column, &roles.measure_column) {
        (Some(category), Some(measure)) => {
            let category_idx = required_column(table, ColumnRole::Category, category)?;
            let measure_idx = required_column(table, ColumnRole::Measure, measure)?;
            normalize_long(table, period_idx, category_idx, measure_idx)
        }
        _ => normalize_wide(table, period_idx),
    }?;

    debug!(
        layout = %normalized.layout,
        records = normalized.records.len(),
        dropped_rows = normalized.dropped_rows,
        value_columns = normalized.value_columns.len(),
        "normalized table"
    );
    Ok(normalized)
}

fn required_column(table: &RawTable, role: ColumnRole, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| ShapeError::MissingRequiredColumn {
            role,
            column: column.to_string(),
            available: table.headers().to_vec(),
        })
}

fn no_data<T>(layout: Layout, reason: NoDataReason) -> Result<T> {
    Err(ShapeError::NoQualifyingData { layout, reason })
}

fn normalize_long(
    table: &RawTable,
    period_idx: usize,
    category_idx: usize,
    measure_idx: usize,
) -> Result<Normalized> {
    let mut records = Vec::with_capacity(table.row_count());
    let mut dropped_rows = 0usize;
    for (row_idx, row) in table.rows().enumerate() {
        let period = parse_period(row.cell(period_idx));
        let value = parse_magnitude(row.cell(measure_idx));
        let category = row.cell(category_idx).trim();
        match (period, value) {
            (Some(period), Some(value)) if !category.is_empty() => {
                records.push(CanonicalRecord::new(period, category, value));
            }
            _ => {
                trace!(row = row_idx, "dropping long-layout row");
                dropped_rows += 1;
            }
        }
    }
    if records.is_empty() {
        return no_data(Layout::Long, NoDataReason::NoRecords);
    }
    Ok(Normalized {
        layout: Layout::Long,
        records,
        value_columns: vec![table.headers()[measure_idx].clone()],
        dropped_rows,
    })
}

fn normalize_wide(table: &RawTable, period_idx: usize) -> Result<Normalized> {
    let value_idxs: Vec<usize> = (0..table.headers().len())
        .filter(|&idx| idx != period_idx)
        .filter(|&idx| {
            table
                .rows()
                .any(|row| parse_magnitude(row.cell(idx)).is_some())
        })
        .collect();
    if value_idxs.is_empty() {
        return no_data(Layout::Wide, NoDataReason::NoValueColumns);
    }
    let categories: Vec<&str> = value_idxs
        .iter()
        .map(|&idx| table.headers()[idx].trim())
        .collect();

    let mut records = Vec::with_capacity(table.row_count() * value_idxs.len());
    let mut dropped_rows = 0usize;
    for (row_idx, row) in table.rows().enumerate() {
        let Some(period) = parse_period(row.cell(period_idx)) else {
            trace!(row = row_idx, "dropping wide-layout row without period");
            dropped_rows += 1;
            continue;
        };
        for (&idx, category) in value_idxs.iter().zip(&categories) {
            let value = parse_magnitude(row.cell(idx)).unwrap_or(0.0);
            records.push(CanonicalRecord::new(period, *category, value));
        }
    }
    if records.is_empty() {
        return no_data(Layout::Wide, NoDataReason::NoRecords);
    }
    Ok(Normalized {
        layout: Layout::Wide,
        records,
        value_columns: value_idxs
            .iter()
            .map(|&idx| table.headers()[idx].clone())
            .collect(),
        dropped_rows,
    })
}
