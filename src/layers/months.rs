use crate::foundation::core::MONTH_LABELS;
use crate::foundation::error::CalendarResult;
use crate::foundation::math::{angle_of_day, label_rotation_deg};
use crate::layers::{Derived, Layer, LayerContext, z};
use crate::render::scene::{Scene, Stroke, TextStyle};

const LABEL_SIZE_PT: f64 = 22.0;
const DIVIDER_WIDTH_PT: f64 = 0.5;

/// One month sector: where it starts and where its label sits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthSector {
    /// Zero-based month index.
    pub month: usize,
    /// Angle of the first day of the month.
    pub start: f64,
    /// Angle of the first day of the next month (`2π` for December).
    pub end: f64,
}

impl MonthSector {
    /// Angle halfway through the sector.
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Twelve sectors sized by the month lengths of the rendered year.
pub fn month_sectors(ctx: &LayerContext<'_>) -> Vec<MonthSector> {
    let days = ctx.days();
    let starts = ctx.year.month_starts();
    (0..12)
        .map(|month| {
            let end_day = starts.get(month + 1).copied().unwrap_or(days);
            MonthSector {
                month,
                start: angle_of_day(starts[month] as f64, days),
                end: angle_of_day(end_day as f64, days),
            }
        })
        .collect()
}

/// Month names outside the dial and a divider at every month boundary.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonthsLayer;

impl Layer for MonthsLayer {
    fn name(&self) -> &'static str {
        "months"
    }

    fn plot(&self, scene: &mut Scene, ctx: &LayerContext<'_>, _derived: &Derived) -> CalendarResult<()> {
        let colors = ctx.palette();
        let r_min = ctx.range.r_min();
        let r_max = ctx.range.r_max();
        let label_r = r_max + ctx.span_fraction(ctx.settings.offsets.months);

        for sector in month_sectors(ctx) {
            let center = sector.center();
            scene.polar_text(
                z::GUIDES,
                center,
                label_r,
                MONTH_LABELS[sector.month],
                TextStyle::new(LABEL_SIZE_PT, colors.month_label)
                    .bold()
                    .rotated(label_rotation_deg(center)),
            );
            scene.line(
                z::GUIDES,
                vec![sector.end, sector.end],
                vec![r_min, r_max],
                Stroke::solid(colors.divider, DIVIDER_WIDTH_PT),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/months.rs"]
mod tests;
