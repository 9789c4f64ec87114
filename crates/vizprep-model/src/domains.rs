//! Scale domains handed to the rendering layer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// Continuous period extent for line charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodExtent {
    pub min: i32,
    pub max: i32,
}

/// Symmetric value domain for a diverging color scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivergingDomain {
    /// Largest absolute finite value observed (1 when there were none).
    pub max_abs: f64,
    /// Round tick values spanning `[-bound, bound]`.
    pub nice_ticks: Vec<f64>,
    /// Final symmetric bound; always `>= max_abs`.
    pub bound: f64,
}

impl DivergingDomain {
    pub fn lower(&self) -> f64 {
        -self.bound
    }

    pub fn upper(&self) -> f64 {
        self.bound
    }
}

/// Everything a renderer needs to build its scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleDomains {
    /// Ascending, deduplicated period axis (ordinal/band domain).
    pub periods: Vec<i32>,
    /// First and last period, for continuous axes.
    pub period_extent: Option<PeriodExtent>,
    /// Suggested tick count for a continuous period axis.
    pub period_tick_count: usize,
    /// Category keys in first-seen order (color, position and legend order).
    pub categories: Vec<String>,
    pub value_range: ValueRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diverging: Option<DivergingDomain>,
}
