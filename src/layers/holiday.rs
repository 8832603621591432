use std::f64::consts::PI;

use crate::data::holiday::{HolidayRecord, holidays_in};
use crate::foundation::error::CalendarResult;
use crate::foundation::math::wrap_deg;
use crate::layers::sunday::{date_label, date_label_radius, day_center_angle, sundays};
use crate::layers::{Derived, Layer, LayerContext, z};
use crate::render::scene::{DrawKind, HAlign, Scene, TextStyle};

const DATE_SIZE_PT: f64 = 8.0;
const SUNDAY_SIZE_PT: f64 = 7.0;
const NAME_SIZE_PT: f64 = 6.0;
const MARKER_RADIUS_PT: f64 = 1.5;
const NAME_PADDING: &str = "  ";

/// Placement of a holiday name running along the radius.
#[derive(Clone, Debug, PartialEq)]
pub struct NamePlacement {
    /// Padded text.
    pub text: String,
    /// Rotation in degrees, always readable.
    pub rotation_deg: f64,
    /// Anchor at the rim end of the text.
    pub align: HAlign,
}

/// Lay a holiday name along the radius at `angle`.
///
/// On the right half the name reads outward and ends at the rim. On the left half it is
/// turned 180° so it still reads left to right, which puts its start at the rim; the
/// padding moves to the other side accordingly.
pub fn place_name(name: &str, angle: f64) -> NamePlacement {
    let radial = 90.0 - angle.to_degrees();
    if angle <= PI {
        NamePlacement {
            text: format!("{name}{NAME_PADDING}"),
            rotation_deg: wrap_deg(radial),
            align: HAlign::Right,
        }
    } else {
        NamePlacement {
            text: format!("{NAME_PADDING}{name}"),
            rotation_deg: wrap_deg(radial + 180.0),
            align: HAlign::Left,
        }
    }
}

/// Holiday dates, markers and names, optionally with Sunday dates.
#[derive(Clone, Debug)]
pub struct HolidayLayer {
    holidays: Vec<HolidayRecord>,
    include_sundays: bool,
}

impl HolidayLayer {
    /// Build a layer over every known holiday; only those in the rendered year are drawn.
    pub fn new(holidays: Vec<HolidayRecord>, include_sundays: bool) -> Self {
        Self {
            holidays,
            include_sundays,
        }
    }
}

impl Layer for HolidayLayer {
    fn name(&self) -> &'static str {
        "holidays"
    }

    fn plot(&self, scene: &mut Scene, ctx: &LayerContext<'_>, _derived: &Derived) -> CalendarResult<()> {
        if self.holidays.is_empty() && !self.include_sundays {
            tracing::warn!("no holidays to plot");
            return Ok(());
        }
        let colors = ctx.palette();
        let days = ctx.days();
        let name_r = date_label_radius(ctx) - ctx.span_fraction(ctx.settings.offsets.sunday);

        for (day, holiday) in holidays_in(&self.holidays, ctx.year) {
            let angle = day_center_angle(day, days);
            date_label(scene, ctx, day, DATE_SIZE_PT, colors.holiday_label);
            scene.push(
                z::DATE_LABELS,
                DrawKind::Marker {
                    theta: angle,
                    r: ctx.range.r_max(),
                    radius_pt: MARKER_RADIUS_PT,
                    fill: colors.holiday_marker,
                },
            );
            let placed = place_name(&holiday.name, angle);
            scene.polar_text(
                z::DATE_LABELS,
                angle,
                name_r,
                placed.text,
                TextStyle::new(NAME_SIZE_PT, colors.holiday_label)
                    .align(placed.align)
                    .rotated(placed.rotation_deg),
            );
        }

        if self.include_sundays {
            for day in sundays(ctx.year)? {
                date_label(scene, ctx, day, SUNDAY_SIZE_PT, colors.sunday_label);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/holiday.rs"]
mod tests;
