use serde::{Deserialize, Serialize};

use crate::record::Layout;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub period: i32,
    pub value: f64,
}

/// One category's values aligned to the full period axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub category: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn value_at(&self, period: i32) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.period == period)
            .map(|p| p.value)
    }
}

/// Aggregated, gap-filled output of normalization.
///
/// Every series has one point per entry of `periods`, in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub layout: Layout,
    pub periods: Vec<i32>,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl AggregateResult {
    pub fn series_for(&self, category: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.category == category)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().flat_map(Series::values)
    }

    /// Sum of all series at each period, aligned to `periods`.
    pub fn period_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.periods.len()];
        for series in &self.series {
            for (total, point) in totals.iter_mut().zip(&series.points) {
                *total += point.value;
            }
        }
        totals
    }
}
