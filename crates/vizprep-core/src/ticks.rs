//! Round tick generation.
//!
//! Steps are 1, 2, 5 or 10 times a power of ten, chosen so that roughly
//! `count` ticks cover the range. Small steps are represented by their inverse
//! (a negative increment) to keep tick values free of accumulated float error.

const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

const MAX_NICE_ROUNDS: usize = 10;

/// Upper limit on requested tick counts; larger requests are clamped.
pub const MAX_TICK_COUNT: usize = 100;

const NO_TICKS: (f64, f64, f64) = (f64::NAN, f64::NAN, f64::NAN);

/// Rounds half toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    // Divide before subtracting so spans near f64::MAX stay finite.
    let step = stop / count - start / count;
    if !step.is_finite() || step <= 0.0 {
        return NO_TICKS;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inverse = 10f64.powf(-power) / factor;
        if !inverse.is_finite() {
            return NO_TICKS;
        }
        i1 = round_half_up(start * inverse);
        i2 = round_half_up(stop * inverse);
        if i1 / inverse < start {
            i1 += 1.0;
        }
        if i2 / inverse > stop {
            i2 -= 1.0;
        }
        inc = -inverse;
    } else {
        inc = 10f64.powf(power) * factor;
        if !inc.is_finite() {
            return NO_TICKS;
        }
        i1 = round_half_up(start / inc);
        i2 = round_half_up(stop / inc);
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Tick step for `[start, stop]`. Negative results are inverse steps
/// (`-10` means a step of `0.1`). NaN when no finite step exists.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count.min(MAX_TICK_COUNT) as f64).2
}

/// Round tick values inside `[start, stop]`, in the direction of the input.
///
/// `count` is clamped to [`MAX_TICK_COUNT`].
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let count = count.min(MAX_TICK_COUNT);
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i1.is_finite() && i2.is_finite() && inc.is_finite()) || i2 < i1 {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Extends `[start, stop]` outward to multiples of the tick step.
///
/// Re-measures until the step stops changing; if it never settles the input
/// bounds are returned unchanged, as they are when rounding outward would
/// overflow.
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let count = count.min(MAX_TICK_COUNT);
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return (start, stop);
    }
    let reverse = stop < start;
    let (mut lo, mut hi) = if reverse { (stop, start) } else { (start, stop) };
    let mut previous: Option<f64> = None;
    for _ in 0..MAX_NICE_ROUNDS {
        let step = tick_increment(lo, hi, count);
        if previous == Some(step) {
            return if reverse { (hi, lo) } else { (lo, hi) };
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        if !lo.is_finite() || !hi.is_finite() {
            break;
        }
        previous = Some(step);
    }
    (start, stop)
}
