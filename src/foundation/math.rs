//! Polar coordinate mapping shared by every layer.
//!
//! Angles are in radians measured from day 0, increasing with the day index. The
//! orchestrator applies the +90° offset and the clockwise direction once, when the scene is
//! placed on the page, so layers never deal with screen orientation.

use std::f64::consts::TAU;

/// Angle of a (possibly fractional) day index: `2π · day / day_count`.
pub fn angle_of_day(day: f64, day_count: usize) -> f64 {
    TAU * day / day_count as f64
}

/// Normalized radius of an hour of the day: `hour / 24`.
pub fn radius_of_hour(hour: f64) -> f64 {
    hour / 24.0
}

/// Text rotation in degrees for a label placed at `angle` radians.
///
/// `(−degrees(angle) + 180) mod 360 − 180`, which always lands in `[−180, 180)`.
pub fn label_rotation_deg(angle: f64) -> f64 {
    (-angle.to_degrees() + 180.0).rem_euclid(360.0) - 180.0
}

/// Normalize degrees into `[−180, 180)`.
pub fn wrap_deg(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// `n` evenly spaced samples from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Floating-point range `[start, stop)` with a fixed step.
///
/// Values are rounded to 10 decimal places so accumulated error never produces
/// `5.999999999` where `6.0` was meant.
pub fn frange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut i = 0u32;
    loop {
        let v = round_to(start + step * f64::from(i), 10);
        if v >= stop {
            break;
        }
        out.push(v);
        i += 1;
    }
    out
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let p = 10f64.powi(decimals);
    (v * p).round() / p
}

/// Round `hours` down to the nearest quarter hour.
pub fn floor_quarter(hours: f64) -> f64 {
    (hours * 4.0).floor() / 4.0
}

/// Round `hours` up to the nearest quarter hour.
pub fn ceil_quarter(hours: f64) -> f64 {
    (hours * 4.0).ceil() / 4.0
}

/// Minimum and maximum of a slice, ignoring NaN. `None` when no finite value exists.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
