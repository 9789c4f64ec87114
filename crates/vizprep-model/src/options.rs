//! Options controlling domain derivation.

use serde::{Deserialize, Serialize};

/// Default exponent of the diverging contrast curve.
pub const DEFAULT_GAMMA: f64 = 0.9;

/// Options for [`ScaleDomains`](crate::ScaleDomains) derivation.
///
/// Deserializes from partial config files; missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainOptions {
    /// Force the linear value range to include zero.
    pub force_zero_floor: bool,
    /// Also derive a symmetric diverging domain over all values.
    pub diverging: bool,
    /// Extend the linear value range to round tick bounds.
    pub nice_value_range: bool,
    /// Target tick count when rounding the linear value range. The tick
    /// generator clamps counts to 100.
    pub value_tick_count: usize,
    /// Target tick count for the diverging legend.
    pub diverging_tick_count: usize,
    /// Exponent in `(0, 1]` boosting contrast near the diverging midpoint.
    pub gamma: f64,
}

impl Default for DomainOptions {
    fn default() -> Self {
        Self {
            force_zero_floor: true,
            diverging: false,
            nice_value_range: false,
            value_tick_count: 10,
            diverging_tick_count: 5,
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl DomainOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_zero_floor(mut self, enable: bool) -> Self {
        self.force_zero_floor = enable;
        self
    }

    #[must_use]
    pub fn with_diverging(mut self, enable: bool) -> Self {
        self.diverging = enable;
        self
    }

    #[must_use]
    pub fn with_nice_value_range(mut self, enable: bool) -> Self {
        self.nice_value_range = enable;
        self
    }

    #[must_use]
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Configured gamma when it lies in `(0, 1]`; anything else falls back
    /// to [`DEFAULT_GAMMA`].
    pub fn effective_gamma(&self) -> f64 {
        if self.gamma.is_finite() && self.gamma > 0.0 && self.gamma <= 1.0 {
            self.gamma
        } else {
            DEFAULT_GAMMA
        }
    }
}
