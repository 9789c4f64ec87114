//! Symmetric diverging domain and its contrast-boosted color position.

use serde::Serialize;

use vizprep_model::{DivergingDomain, DomainOptions};

use crate::ticks::{nice, ticks};

/// Derives a symmetric domain around zero from signed values.
///
/// The observed span `[-max_abs, max_abs]` is first extended to round bounds,
/// then ticks are generated over it and the largest absolute tick becomes the
/// final bound. Legend end ticks are therefore round numbers and the color
/// scale stays exactly symmetric.
pub fn derive_diverging<I>(values: I, tick_count: usize) -> DivergingDomain
where
    I: IntoIterator<Item = f64>,
{
    let observed = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    // No finite values, or all zero: keep a unit span instead of a zero-width scale.
    let max_abs = if observed > 0.0 { observed } else { 1.0 };

    let count = tick_count.max(1);
    let (lo, hi) = nice(-max_abs, max_abs, count);
    let mut nice_ticks = ticks(lo, hi, count);
    let measured = nice_ticks.iter().fold(0.0_f64, |acc, t| acc.max(t.abs()));
    let bound = if measured >= max_abs {
        measured
    } else {
        hi.max(max_abs)
    };
    // Spans with no finite tick step still get a usable legend.
    if nice_ticks.is_empty() {
        nice_ticks = vec![-bound, 0.0, bound];
    }

    DivergingDomain {
        max_abs,
        nice_ticks,
        bound,
    }
}

/// One gradient stop of a legend ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendStop {
    /// Position along the ramp in `[0, 1]`.
    pub offset: f64,
    pub value: f64,
    /// Interpolator input for `value`.
    pub position: f64,
}

/// Maps signed values onto a diverging color interpolator's `[0, 1]` input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergingScale {
    bound: f64,
    gamma: f64,
}

impl DivergingScale {
    pub fn new(domain: &DivergingDomain, options: &DomainOptions) -> Self {
        Self {
            bound: domain.bound,
            gamma: options.effective_gamma(),
        }
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Signed score in `[-1, 1]` after clamping and the gamma curve.
    ///
    /// Non-finite input yields `None`, which renderers draw as "no data".
    pub fn normalize(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let s = (value / self.bound).clamp(-1.0, 1.0);
        if s == 0.0 {
            return Some(0.0);
        }
        Some(s.signum() * s.abs().powf(self.gamma))
    }

    /// Interpolator input in `[0, 1]`; 0.5 is the neutral midpoint.
    pub fn position(&self, value: f64) -> Option<f64> {
        self.normalize(value).map(|s| (s + 1.0) / 2.0)
    }

    /// Legend tick values: both bounds and zero.
    pub fn legend_ticks(&self) -> [f64; 3] {
        [-self.bound, 0.0, self.bound]
    }

    /// `segments + 1` evenly spaced stops across `[-bound, bound]`.
    pub fn legend_stops(&self, segments: usize) -> Vec<LegendStop> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                let offset = i as f64 / segments as f64;
                let value = -self.bound + offset * 2.0 * self.bound;
                LegendStop {
                    offset,
                    value,
                    position: self.position(value).unwrap_or(0.5),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(values: &[f64]) -> (DivergingDomain, DivergingScale) {
        let domain = derive_diverging(values.iter().copied(), 5);
        let scale = DivergingScale::new(&domain, &DomainOptions::default());
        (domain, scale)
    }

    #[test]
    fn bound_is_round_and_covers_data() {
        let (domain, _) = scale(&[-7.0, 3.0]);
        assert_eq!(domain.max_abs, 7.0);
        assert_eq!(domain.nice_ticks, vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
        assert_eq!(domain.bound, 10.0);
        assert_eq!(domain.lower(), -domain.upper());
    }

    #[test]
    fn empty_or_zero_input_defaults_to_unit_span() {
        let (empty, _) = scale(&[]);
        assert_eq!(empty.max_abs, 1.0);
        assert_eq!(empty.bound, 1.0);
        let (zeros, _) = scale(&[0.0, 0.0]);
        assert_eq!(zeros.max_abs, 1.0);
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let (domain, scale) = scale(&[f64::NAN, 2.0, f64::NEG_INFINITY]);
        assert_eq!(domain.max_abs, 2.0);
        assert_eq!(scale.position(f64::NAN), None);
    }

    #[test]
    fn extreme_magnitudes_keep_finite_ticks() {
        let (domain, scale) = scale(&[-1.0e308, 5.0]);
        assert!(domain.nice_ticks.iter().all(|t| t.is_finite()));
        assert!(domain.bound.is_finite());
        assert!(domain.bound >= 1.0e308);
        assert_eq!(domain.nice_ticks.first().map(|t| -t), domain.nice_ticks.last().copied());
        let position = scale.position(-1.0e308).unwrap();
        assert!((0.0..0.5).contains(&position));

        let (huge, _) = self::scale(&[f64::MAX]);
        assert_eq!(huge.bound, f64::MAX);
        assert!(huge.nice_ticks.iter().all(|t| t.is_finite()));
    }

    #[test]
    fn tiny_magnitudes_fall_back_to_bound_ticks() {
        let (domain, _) = scale(&[1.0e-308]);
        assert_eq!(domain.bound, 1.0e-308);
        assert_eq!(domain.nice_ticks, vec![-1.0e-308, 0.0, 1.0e-308]);
    }

    #[test]
    fn gamma_curve_boosts_small_magnitudes() {
        let (_, scale) = scale(&[-7.0, 3.0]);
        let s = scale.normalize(5.0).unwrap();
        assert!((s - 0.5_f64.powf(0.9)).abs() < 1e-12);
        assert!(s > 0.5);
        let position = scale.position(5.0).unwrap();
        assert!((position - 0.768).abs() < 1e-3);
        assert_eq!(scale.normalize(-5.0), Some(-s));
    }

    #[test]
    fn extremes_are_clamped() {
        let (_, scale) = scale(&[-7.0, 3.0]);
        assert_eq!(scale.normalize(25.0), Some(1.0));
        assert_eq!(scale.position(-25.0), Some(0.0));
        assert_eq!(scale.position(0.0), Some(0.5));
    }

    #[test]
    fn legend_stops_span_domain() {
        let (_, scale) = scale(&[4.0]);
        let stops = scale.legend_stops(4);
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0].value, -4.0);
        assert_eq!(stops[1].value, -2.0);
        assert_eq!(stops[0].position, 0.0);
        assert_eq!(stops[2].position, 0.5);
        assert_eq!(stops[4].offset, 1.0);
        assert_eq!(scale.legend_ticks(), [-4.0, 0.0, 4.0]);
    }
}
