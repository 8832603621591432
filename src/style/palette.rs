use serde::Deserialize;

use crate::style::color::Color;
use crate::style::colormap::Colormap;

/// Semantic color roles shared by every layer.
///
/// The first block of roles is required in the settings document; the activity, holiday
/// and tick roles fall back to the defaults documented on each field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    /// Sun more than 18° below the horizon.
    pub night: Color,
    /// Sun above the horizon.
    pub daylight: Color,
    /// Civil twilight (0° to 6° below).
    pub civil: Color,
    /// Nautical twilight (6° to 12° below).
    pub nautical: Color,
    /// Astronomical twilight (12° to 18° below).
    pub astro: Color,
    /// Month divider lines.
    pub divider: Color,
    /// Month name labels.
    pub month_label: Color,
    /// Sunday date labels.
    pub sunday_label: Color,
    /// Hour tick labels.
    pub time_label: Color,
    /// Title chrome and footer text.
    pub title_text: Color,
    /// Temperature ring palette.
    pub temperature: Colormap,
    /// Precipitation ring palette.
    pub precipitation: Colormap,
    /// Face of the visible annulus.
    pub dial: Color,
    /// Page background.
    pub background: Color,

    /// Run spokes. Default red.
    #[serde(default = "default_run")]
    pub run: Color,
    /// Walk spokes. Default blue.
    #[serde(default = "default_walk")]
    pub walk: Color,
    /// Cumulative distance spirals. Default blue.
    #[serde(default = "default_walk")]
    pub cumulative: Color,
    /// Dashed pace-target spiral. Default gray.
    #[serde(default = "default_gray")]
    pub target: Color,
    /// Holiday date labels. Default red.
    #[serde(default = "default_run")]
    pub holiday_label: Color,
    /// Holiday dot markers. Default red.
    #[serde(default = "default_run")]
    pub holiday_marker: Color,
    /// Hour tick rings. Default gray.
    #[serde(default = "default_gray")]
    pub tick: Color,
}

fn default_run() -> Color {
    Color::rgb(1.0, 0.0, 0.0)
}

fn default_walk() -> Color {
    Color::rgb(0.0, 0.0, 1.0)
}

fn default_gray() -> Color {
    Color::rgb(0.5, 0.5, 0.5)
}
