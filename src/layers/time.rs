use std::f64::consts::TAU;

use crate::foundation::core::HourRange;
use crate::foundation::error::CalendarResult;
use crate::foundation::math::{frange, radius_of_hour};
use crate::layers::{Derived, Layer, LayerContext, z};
use crate::render::scene::{Scene, TextStyle};

const LABEL_SIZE_PT: f64 = 6.0;
const TICK_HALF_WIDTH: f64 = 0.0001;
const TICK_ALPHA: f64 = 0.4;

/// Tick radii every `interval` hours across `range`, starting at its inner edge.
pub fn hour_ticks(range: HourRange, interval: f64) -> Vec<f64> {
    frange(range.start, range.end, interval)
        .into_iter()
        .map(radius_of_hour)
        .collect()
}

/// 12-hour clock label for a fractional hour, e.g. `13.75` → `"1:45PM"`.
pub fn clock_label(hours: f64) -> String {
    let h = hours.floor() as i64;
    let m = (hours.fract() * 60.0) as i64;
    let suffix = if h < 12 { "AM" } else { "PM" };
    format!("{}:{m:02}{suffix}", (h - 1).rem_euclid(12) + 1)
}

/// Labels paired with [`hour_ticks`]: blank at the inner edge, none for the last two ticks.
pub fn hour_labels(range: HourRange, interval: f64) -> Vec<String> {
    let mut out = vec![String::new()];
    if !(interval > 0.0) {
        return out;
    }
    let mut t = range.start + interval;
    while t < range.end - interval {
        out.push(clock_label(t));
        t += interval;
    }
    out
}

/// Faint rings at every tick and a column of clock labels at each configured angle.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeLayer;

impl Layer for TimeLayer {
    fn name(&self) -> &'static str {
        "time"
    }

    fn plot(&self, scene: &mut Scene, ctx: &LayerContext<'_>, _derived: &Derived) -> CalendarResult<()> {
        let settings = ctx.settings;
        let colors = ctx.palette();
        let ticks = hour_ticks(ctx.range, settings.interval);
        let labels = hour_labels(ctx.range, settings.interval);
        let ring = [0.0, TAU];

        for (&r, _) in ticks.iter().zip(&labels) {
            scene.fill_between(
                z::TWILIGHT,
                &ring,
                &[r - TICK_HALF_WIDTH; 2],
                &[r + TICK_HALF_WIDTH; 2],
                colors.tick.with_opacity(TICK_ALPHA),
            );
        }
        for pos in &settings.time_labels {
            let theta = pos.angle_deg.to_radians();
            let style = TextStyle::new(LABEL_SIZE_PT, colors.time_label).align(pos.align);
            for (&r, label) in ticks.iter().zip(&labels) {
                scene.polar_text(z::GUIDES, theta, r, format!(" {label}"), style);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/time.rs"]
mod tests;
