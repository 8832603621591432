use crate::foundation::core::Year;
use crate::foundation::error::CalendarResult;
use crate::foundation::math::{angle_of_day, label_rotation_deg};
use crate::layers::{Derived, Layer, LayerContext, z};
use crate::render::scene::{Scene, TextStyle};
use crate::style::color::Color;

const LABEL_SIZE_PT: f64 = 14.0;

/// Zero-based day indices of every Sunday in `year`.
pub fn sundays(year: Year) -> CalendarResult<Vec<usize>> {
    let first = year.first_sunday()?;
    Ok((first..year.days()).step_by(7).collect())
}

/// Angle of the middle of `day`, where its date label is centred.
pub fn day_center_angle(day: usize, days: usize) -> f64 {
    angle_of_day(day as f64 + 0.5, days)
}

/// Radius of the date labels just inside the outer edge.
pub(crate) fn date_label_radius(ctx: &LayerContext<'_>) -> f64 {
    ctx.range.r_max() - ctx.span_fraction(ctx.settings.offsets.sunday)
}

/// Day-of-month label for `day`, rotated to read along the rim.
pub(crate) fn date_label(
    scene: &mut Scene,
    ctx: &LayerContext<'_>,
    day: usize,
    size_pt: f64,
    color: Color,
) {
    let angle = day_center_angle(day, ctx.days());
    let (_, day_of_month) = ctx.year.month_and_day(day);
    scene.polar_text(
        z::DATE_LABELS,
        angle,
        date_label_radius(ctx),
        day_of_month.to_string(),
        TextStyle::new(size_pt, color).rotated(label_rotation_deg(angle)),
    );
}

/// Day-of-month label on every Sunday.
#[derive(Clone, Copy, Debug, Default)]
pub struct SundayLayer;

impl Layer for SundayLayer {
    fn name(&self) -> &'static str {
        "sunday"
    }

    fn plot(&self, scene: &mut Scene, ctx: &LayerContext<'_>, _derived: &Derived) -> CalendarResult<()> {
        let color = ctx.palette().sunday_label;
        for day in sundays(ctx.year)? {
            date_label(scene, ctx, day, LABEL_SIZE_PT, color);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/sunday.rs"]
mod tests;
