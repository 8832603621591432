//! polar-calendar renders a whole year on one circular dial.
//!
//! Days run clockwise around the dial, starting with January 1st at the top. Hours of the
//! day run outward from the centre. Layers paint onto that surface: twilight bands bounded
//! by the sun's dawn and dusk times, weather rings, activity spokes and spirals, and the
//! month, Sunday, holiday and hour guides.
//!
//! # Pipeline overview
//!
//! 1. **Load**: [`Settings`] from TOML or JSON, [`CityData`] and the optional activity and
//!    holiday files from `data_dir`.
//! 2. **Setup**: [`CalendarCanvas::setup`] fixes the visible hour window from the union of
//!    every [`Layer`]'s extent and lays out the page ([`PageLayout`]).
//! 3. **Draw**: [`CalendarCanvas::draw`] runs every layer's [`Layer::prepare`] pass, then
//!    its [`Layer::plot`] pass into a shared [`Scene`], then the title.
//! 4. **Finish**: [`CalendarCanvas::finish`] draws the footers, writes the scene as SVG and
//!    rasterizes it. [`Rendered::export`] writes the PNG (and the SVG for posters).
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No partial output**: files are written only after every phase succeeded.
//! - **Derived values flow forward**: values computed in `prepare` reach `plot` and the
//!   footer by reference; layers share no mutable state.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod data;
mod foundation;
mod layers;
mod plot;
mod render;
mod signal;
mod style;

pub use config::settings::{
    ActivitySettings, FigureRect, FontSettings, HolidaySettings, LayerToggles, Offsets,
    PosterSettings, Settings, TimeLabelPosition, WallpaperSettings,
};
pub use data::activity::{
    ActivityEntry, ActivityKind, ActivityRecord, load_activities, project_activities,
};
pub use data::city::{CityData, Coordinates, SunData, WeatherData};
pub use data::holiday::{HolidayRecord, holidays_in, load_holidays};
pub use foundation::core::{Canvas, HourRange, MONTH_LABELS, Point, Rect, Year};
pub use foundation::error::{CalendarError, CalendarResult};
pub use foundation::math::{
    angle_of_day, ceil_quarter, floor_quarter, frange, label_rotation_deg, linspace, min_max,
    radius_of_hour, wrap_deg,
};
pub use layers::{
    ActivityLayer, ActivityTracks, Derived, DuskCurves, FooterArea, FooterLayer, HolidayLayer,
    Layer, LayerContext, MonthSector, MonthsLayer, NamePlacement, ScalarBandLayer, ScalarKind,
    ScalarSummary, SundayLayer, TimeLayer, TwilightCurves, TwilightKind, TwilightLayer,
    YearTrack, clock_label, day_center_angle, global_range, hour_labels, hour_ticks,
    month_sectors, place_name, sundays, z,
};
pub use plot::canvas::{CalendarCanvas, Drawn, Placement, Rendered, Setup};
pub use plot::layout::{LayoutKind, PageLayout, TitlePlacement, month_rotation};
pub use plot::preset::{Preset, auxiliary_layers, render, run};
pub use render::fonts::FontBook;
pub use render::polar::PolarAxes;
pub use render::raster::{RasterImage, rasterize_svg, write_png, write_svg};
pub use render::scene::{DrawKind, DrawOp, FontRole, HAlign, Scene, Stroke, TextStyle};
pub use render::svg::{Figure, scene_to_svg};
pub use signal::Signal;
pub use signal::adjust::{Repair, fit_to_days, repair_length};
pub use signal::smooth::{SMOOTHING_CUTOFF, smooth, smooth_to_len};
pub use style::color::Color;
pub use style::colormap::{Colormap, Normalize};
pub use style::palette::Palette;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;
