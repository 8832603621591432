//! The pluggable visual layers and the contract they share with the plotter.
//!
//! Every layer goes through two passes. [`Layer::prepare`] turns the layer's raw data into a
//! typed [`Derived`] value (repaired and smoothed signals, value ranges, cumulative
//! tracks); [`Layer::plot`] and the optional [`FooterLayer::draw_footer`] then read that
//! value by reference. Nothing derived is shared through mutable state.

pub(crate) mod activity;
pub(crate) mod holiday;
pub(crate) mod months;
pub(crate) mod scalar;
pub(crate) mod sunday;
pub(crate) mod time;
pub(crate) mod twilight;

use crate::config::settings::Settings;
use crate::foundation::core::{HourRange, Rect, Year};
use crate::foundation::error::CalendarResult;
use crate::foundation::math::angle_of_day;
use crate::render::scene::Scene;
use crate::style::palette::Palette;

pub use activity::{ActivityLayer, ActivityTracks, YearTrack};
pub use holiday::{HolidayLayer, NamePlacement, place_name};
pub use months::{MonthSector, MonthsLayer, month_sectors};
pub use scalar::{ScalarBandLayer, ScalarKind, ScalarSummary};
pub use sunday::{SundayLayer, day_center_angle, sundays};
pub use time::{TimeLayer, clock_label, hour_labels, hour_ticks};
pub use twilight::{DuskCurves, TwilightCurves, TwilightKind, TwilightLayer};

/// Stacking priorities used by the built-in layers.
pub mod z {
    /// Page background.
    pub const BACKGROUND: i32 = 0;
    /// Dial face behind every layer.
    pub const DIAL: i32 = 1;
    /// Night and daylight fills.
    pub const BASE_BANDS: i32 = 2;
    /// Twilight phase fills and hour tick rings.
    pub const TWILIGHT: i32 = 3;
    /// Sunday and holiday labels.
    pub const DATE_LABELS: i32 = 5;
    /// Temperature and precipitation rings.
    pub const SCALAR_RING: i32 = 9;
    /// Month dividers and labels, hour labels, pace target.
    pub const GUIDES: i32 = 10;
    /// Cumulative distance spirals.
    pub const CUMULATIVE: i32 = 15;
    /// Activity spokes.
    pub const SPOKES: i32 = 20;
    /// Title chrome and footers.
    pub const CHROME: i32 = 100;
}

/// Values computed once per layer, before any drawing.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Derived {
    /// Nothing to draw (no data) or nothing to precompute.
    #[default]
    None,
    /// Twilight boundaries on the normalized radius scale.
    Twilight(TwilightCurves),
    /// A repaired day-indexed signal and its observed range.
    Scalar(ScalarSummary),
    /// Activities grouped per year.
    Activities(ActivityTracks),
}

/// Shared, read-only render state handed to every layer call.
#[derive(Clone, Copy, Debug)]
pub struct LayerContext<'a> {
    /// Rendered year.
    pub year: Year,
    /// Global visible hour window.
    pub range: HourRange,
    /// Full settings.
    pub settings: &'a Settings,
}

impl LayerContext<'_> {
    /// Day count of the rendered year.
    pub fn days(&self) -> usize {
        self.year.days()
    }

    /// Semantic palette.
    pub fn palette(&self) -> &Palette {
        &self.settings.colors
    }

    /// Convert a fraction of the visible range to a normalized radius delta.
    pub fn span_fraction(&self, fraction: f64) -> f64 {
        self.range.r_span() * fraction
    }

    /// Angles of the `days + 1` day boundaries, the last one closing the circle.
    pub fn day_edges(&self) -> Vec<f64> {
        let n = self.days();
        (0..=n).map(|i| angle_of_day(i as f64, n)).collect()
    }
}

/// A rectangle reserved for one footer, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterArea {
    /// Region the footer may draw into.
    pub rect: Rect,
    /// Footers are stacked vertically (wallpaper) rather than split into rows (poster).
    pub stacked: bool,
}

/// A layer that contributes a legend or colorbar below (or beside) the dial.
pub trait FooterLayer {
    /// Draw into `area`. Called once, after every layer has plotted.
    fn draw_footer(
        &self,
        scene: &mut Scene,
        area: &FooterArea,
        ctx: &LayerContext<'_>,
        derived: &Derived,
    ) -> CalendarResult<()>;
}

/// One independently authored piece of the calendar.
pub trait Layer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Earliest hour this layer needs visible, or `None` for no opinion.
    fn start_time(&self) -> Option<f64> {
        None
    }

    /// Latest hour this layer needs visible, or `None` for no opinion.
    fn end_time(&self) -> Option<f64> {
        None
    }

    /// First pass: compute everything `plot` and the footer need.
    fn prepare(&self, _ctx: &LayerContext<'_>) -> CalendarResult<Derived> {
        Ok(Derived::None)
    }

    /// Second pass: append draw operations.
    fn plot(&self, scene: &mut Scene, ctx: &LayerContext<'_>, derived: &Derived)
    -> CalendarResult<()>;

    /// Footer capability, when the layer has one.
    fn footer(&self) -> Option<&dyn FooterLayer> {
        None
    }
}

/// Union of every layer's declared extent; the full day when nobody has an opinion.
///
/// Starts and ends are combined independently, so a layer may declare only one side.
pub fn global_range(layers: &[Box<dyn Layer>]) -> CalendarResult<HourRange> {
    let start = layers
        .iter()
        .filter_map(|l| l.start_time())
        .filter(|v| v.is_finite())
        .reduce(f64::min);
    let end = layers
        .iter()
        .filter_map(|l| l.end_time())
        .filter(|v| v.is_finite())
        .reduce(f64::max);
    HourRange::new(
        start.unwrap_or(HourRange::FULL_DAY.start),
        end.unwrap_or(HourRange::FULL_DAY.end),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layers/mod.rs"]
mod tests;
