use crate::data::activity::{ActivityKind, ActivityRecord};
use crate::foundation::error::CalendarResult;
use crate::foundation::math::angle_of_day;
use crate::layers::{Derived, Layer, LayerContext, z};
use crate::render::scene::{Scene, Stroke};

const SPOKE_WIDTH_PT: f64 = 1.5;
const CUMULATIVE_WIDTH_PT: f64 = 0.5;
const TARGET_WIDTH_PT: f64 = 1.0;
const TARGET_ALPHA: f64 = 0.25;

/// Cumulative distance of one calendar year, sampled at each activity.
#[derive(Clone, Debug, PartialEq)]
pub struct YearTrack {
    /// Year the activities happened in.
    pub year: i32,
    /// Projected day index of each activity.
    pub days: Vec<usize>,
    /// Running distance total after each activity, km.
    pub cumulative_km: Vec<f64>,
}

/// Activities grouped by the year they happened in, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityTracks {
    /// One entry per year with at least one activity.
    pub years: Vec<YearTrack>,
}

impl ActivityTracks {
    /// Group records (sorted by projected day) into per-year running totals.
    pub fn from_records(records: &[ActivityRecord]) -> Self {
        let mut years: Vec<YearTrack> = Vec::new();
        let mut sorted: Vec<&ActivityRecord> = records.iter().collect();
        sorted.sort_by_key(|r| (r.source_year(), r.day_of_year));
        for rec in sorted {
            let year = rec.source_year();
            if years.last().is_none_or(|t| t.year != year) {
                years.push(YearTrack {
                    year,
                    days: Vec::new(),
                    cumulative_km: Vec::new(),
                });
            }
            let Some(track) = years.last_mut() else {
                continue;
            };
            let total = track.cumulative_km.last().copied().unwrap_or(0.0) + rec.distance_km;
            track.days.push(rec.day_of_year);
            track.cumulative_km.push(total);
        }
        Self { years }
    }
}

/// Radial spokes per activity, a cumulative spiral per year and a dashed pace target.
#[derive(Clone, Debug)]
pub struct ActivityLayer {
    records: Vec<ActivityRecord>,
}

impl ActivityLayer {
    /// Build a layer over records already projected onto the rendered year.
    pub fn new(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }
}

impl Layer for ActivityLayer {
    fn name(&self) -> &'static str {
        "activity"
    }

    fn prepare(&self, _ctx: &LayerContext<'_>) -> CalendarResult<Derived> {
        if self.records.is_empty() {
            tracing::warn!("no activity data to plot");
            return Ok(Derived::None);
        }
        Ok(Derived::Activities(ActivityTracks::from_records(&self.records)))
    }

    fn plot(&self, scene: &mut Scene, ctx: &LayerContext<'_>, derived: &Derived) -> CalendarResult<()> {
        let Derived::Activities(tracks) = derived else {
            return Ok(());
        };
        let a = &ctx.settings.activity;
        let colors = ctx.palette();
        let days = ctx.days();
        let r_min = ctx.range.r_min();
        let alpha_for = |year: i32| if year < ctx.year.0 { a.past_alpha } else { 1.0 };

        let per_km = ctx.span_fraction(a.km_scale);
        for rec in &self.records {
            let theta = angle_of_day(rec.day_of_year as f64, days);
            let r_start = rec.start_hour / 24.0;
            let color = match rec.kind {
                ActivityKind::Run => colors.run,
                ActivityKind::Walk => colors.walk,
            };
            scene.line(
                z::SPOKES,
                vec![theta, theta],
                vec![r_start, r_start + rec.distance_km * per_km],
                Stroke::solid(color.with_opacity(alpha_for(rec.source_year())), SPOKE_WIDTH_PT),
            );
        }

        let km_to_r = ctx.span_fraction(a.target_span) / a.target_km;
        for track in &tracks.years {
            let theta = track
                .days
                .iter()
                .map(|&d| angle_of_day(d as f64, days))
                .collect();
            let r = track.cumulative_km.iter().map(|km| r_min + km * km_to_r).collect();
            scene.line(
                z::CUMULATIVE,
                theta,
                r,
                Stroke::solid(
                    colors.cumulative.with_opacity(alpha_for(track.year)),
                    CUMULATIVE_WIDTH_PT,
                ),
            );
        }

        let daily = a.target_km / days as f64;
        let (theta, r) = (1..=days)
            .map(|d| (angle_of_day(d as f64, days), r_min + d as f64 * daily * km_to_r))
            .unzip();
        scene.line(
            z::GUIDES,
            theta,
            r,
            Stroke::dashed(colors.target.with_opacity(TARGET_ALPHA), TARGET_WIDTH_PT),
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/activity.rs"]
mod tests;
