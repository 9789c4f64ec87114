//! Scale domain derivation from aggregated series.

use vizprep_model::{AggregateResult, DomainOptions, PeriodExtent, ScaleDomains, ValueRange};

use crate::diverging::derive_diverging;
use crate::ticks::nice;

/// Upper limit on ticks along a continuous period axis.
pub const MAX_PERIOD_TICKS: usize = 12;

/// Derives every scale domain a renderer needs from one aggregate.
pub fn derive_domains(result: &AggregateResult, options: &DomainOptions) -> ScaleDomains {
    let periods = result.periods.clone();
    let period_extent = match (periods.first(), periods.last()) {
        (Some(&min), Some(&max)) => Some(PeriodExtent { min, max }),
        _ => None,
    };
    let diverging = options
        .diverging
        .then(|| derive_diverging(result.values(), options.diverging_tick_count));

    ScaleDomains {
        period_tick_count: periods.len().min(MAX_PERIOD_TICKS),
        period_extent,
        periods,
        categories: result.categories.clone(),
        value_range: value_range(result.values(), options),
        diverging,
    }
}

/// Linear value domain over finite values.
///
/// With `force_zero_floor` the lower bound never sits above zero. A zero-width
/// range gets a unit-wide upper bound so the scale stays invertible.
pub fn value_range<I>(values: I, options: &DomainOptions) -> ValueRange
where
    I: IntoIterator<Item = f64>,
{
    let (mut min, mut max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })
        .unwrap_or((0.0, 0.0));
    if options.force_zero_floor {
        min = min.min(0.0);
    }
    if max <= min {
        max = min + 1.0;
    }
    if options.nice_value_range {
        (min, max) = nice(min, max, options.value_tick_count);
    }
    ValueRange { min, max }
}
