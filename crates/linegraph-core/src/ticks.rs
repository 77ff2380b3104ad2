// File: crates/linegraph-core/src/ticks.rs
// Summary: Nice-bound rounding for y-axis labels, tick value layout, and value formatting.

use serde::{Deserialize, Serialize};

use crate::scale::ValueRange;

/// Largest decimal precision the rounding helpers accept.
pub const MAX_PRECISION: u32 = 15;

/// How tick bounds are rounded outward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Floor/ceil at `precision` decimals.
    #[default]
    Precision,
    /// Floor/ceil at two significant digits, whatever the magnitude (`1234` floors to `1200`).
    Significant,
}

/// Multiply by `10^exp`; negative exponents divide by the exact power so results stay nearest.
/// Exponents past the f64 power range are applied in two steps.
fn shift(v: f64, exp: i32) -> f64 {
    if exp.abs() > 300 {
        let half = exp / 2;
        return shift(shift(v, half), exp - half);
    }
    if exp >= 0 { v * 10f64.powi(exp) } else { v / 10f64.powi(-exp) }
}

/// Round `v` outward to a whole multiple of `10^-exp`: down when `down`, else up.
///
/// A scaled value within float noise of an integer is taken as that integer, but only when
/// the result still encloses `v`. The returned bound always encloses `v`.
fn round_out(v: f64, exp: i32, down: bool) -> f64 {
    if v == 0.0 || !v.is_finite() {
        return v;
    }
    let encloses = |b: f64| if down { b <= v } else { b >= v };
    let x = shift(v, exp);
    if !x.is_finite() {
        return v;
    }
    let r = x.round();
    if (x - r).abs() <= 1e-9 * r.abs().max(1.0) {
        let snapped = shift(r, -exp);
        if encloses(snapped) {
            return snapped;
        }
    }
    let step = if down { -1.0 } else { 1.0 };
    let whole = if down { x.floor() } else { x.ceil() };
    [whole, whole + step]
        .into_iter()
        .map(|w| shift(w, -exp))
        .find(|&b| b.is_finite() && encloses(b))
        .unwrap_or(v)
}

/// Round `v` down to `precision` decimals.
pub fn floor_at(v: f64, precision: u32) -> f64 {
    round_out(v, precision.min(MAX_PRECISION) as i32, true)
}

/// Round `v` up to `precision` decimals.
pub fn ceil_at(v: f64, precision: u32) -> f64 {
    round_out(v, precision.min(MAX_PRECISION) as i32, false)
}

/// Power of ten that brings `|v|` into `[10, 100)`.
fn magnitude(v: f64) -> i32 {
    let mut m = v.abs();
    let mut exp = 0;
    while m >= 100.0 {
        m /= 10.0;
        exp += 1;
    }
    while m < 10.0 {
        m *= 10.0;
        exp -= 1;
    }
    exp
}

/// Round `v` down to two significant digits.
pub fn floor_significant(v: f64) -> f64 {
    if v == 0.0 || !v.is_finite() {
        return v;
    }
    round_out(v, -magnitude(v), true)
}

/// Round `v` up to two significant digits.
pub fn ceil_significant(v: f64) -> f64 {
    if v == 0.0 || !v.is_finite() {
        return v;
    }
    round_out(v, -magnitude(v), false)
}

/// Outward-rounded bounds enclosing `range`.
pub fn nice_bounds(range: ValueRange, precision: u32, rounding: Rounding) -> ValueRange {
    match rounding {
        Rounding::Precision => ValueRange::new(floor_at(range.min, precision), ceil_at(range.max, precision)),
        Rounding::Significant => ValueRange::new(floor_significant(range.min), ceil_significant(range.max)),
    }
}

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Tick label values; fewer than two lines yields no ticks.
pub fn tick_values(nice: ValueRange, lines: u32) -> Vec<f64> {
    if lines < 2 {
        return Vec::new();
    }
    linspace(nice.min, nice.max, lines as usize)
}

/// Fixed-point formatting; a value that rounds to zero never prints a sign.
pub fn format_value(v: f64, precision: u32) -> String {
    let p = precision.min(MAX_PRECISION) as usize;
    let s = format!("{:.*}", p, v);
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}
