//! Grouped sum of canonical records into gap-filled series.

use std::collections::{BTreeSet, HashMap};

use vizprep_model::{AggregateResult, CanonicalRecord, Layout, Series, SeriesPoint};

/// Sums records by `(category, period)`.
///
/// The period axis is the ascending union of all record periods. Categories
/// keep first-seen order. Absent combinations are filled with zero, so every
/// series has exactly one point per period.
pub fn aggregate(layout: Layout, records: &[CanonicalRecord]) -> AggregateResult {
    let periods: Vec<i32> = records
        .iter()
        .map(|r| r.period)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let period_slot: HashMap<i32, usize> = periods
        .iter()
        .enumerate()
        .map(|(slot, &period)| (period, slot))
        .collect();

    let mut categories: Vec<String> = Vec::new();
    let mut category_slot: HashMap<&str, usize> = HashMap::new();
    let mut sums: Vec<Vec<f64>> = Vec::new();
    for record in records {
        let slot = *category_slot
            .entry(record.category.as_str())
            .or_insert_with(|| {
                categories.push(record.category.clone());
                sums.push(vec![0.0; periods.len()]);
                categories.len() - 1
            });
        sums[slot][period_slot[&record.period]] += record.value;
    }

    let series = categories
        .iter()
        .zip(sums)
        .map(|(category, values)| Series {
            category: category.clone(),
            points: periods
                .iter()
                .zip(values)
                .map(|(&period, value)| SeriesPoint { period, value })
                .collect(),
        })
        .collect();

    AggregateResult {
        layout,
        periods,
        categories,
        series,
    }
}
