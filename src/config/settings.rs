use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::foundation::core::Year;
use crate::foundation::error::{CalendarError, CalendarResult};
use crate::render::scene::HAlign;
use crate::style::palette::Palette;

/// Everything a render needs to know besides the data itself.
///
/// Only `city_name` (alias `name`) and `colors` are required. Unknown keys are rejected
/// so typos surface as configuration errors; free-form keys belong in `extensions`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// City whose data file is loaded and whose name is printed in the title.
    #[serde(alias = "name")]
    pub city_name: String,
    /// Semantic palette.
    pub colors: Palette,
    /// Calendar year being rendered. Default 2025.
    #[serde(default = "default_year")]
    pub year: Year,
    /// Low-pass filter the twilight signals. Default off.
    #[serde(default)]
    pub smoothen: bool,
    /// Hour tick spacing in hours. Default a quarter hour.
    #[serde(default = "default_interval")]
    pub interval: f64,
    /// Directory holding `<city>_data.json` and the optional activity/holiday files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Root for the `png/` and `svg/` output directories.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Output file stem. Defaults to `<city>_<Preset>`.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Radial placement constants, as fractions of the visible radial range.
    #[serde(default)]
    pub offsets: Offsets,
    /// Auxiliary layer toggles.
    #[serde(default)]
    pub layers: LayerToggles,
    /// Angular positions of the hour labels.
    #[serde(default = "default_time_labels")]
    pub time_labels: Vec<TimeLabelPosition>,
    /// Activity layer inputs and scales.
    #[serde(default)]
    pub activity: ActivitySettings,
    /// Holiday layer inputs.
    #[serde(default)]
    pub holidays: HolidaySettings,
    /// Print poster layout.
    #[serde(default)]
    pub poster: PosterSettings,
    /// Fixed-pixel wallpaper layout.
    #[serde(default)]
    pub wallpaper: WallpaperSettings,
    /// Font files and families.
    #[serde(default)]
    pub fonts: FontSettings,
    /// Free-form keys ignored by the renderer.
    #[serde(default)]
    pub extensions: BTreeMap<String, serde_json::Value>,
}

/// Radial offsets, each a fraction of the visible radial range.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Offsets {
    /// Gap between the daylight band and the outer edge.
    pub daylight: f64,
    /// Distance of the temperature ring centre inward from the outer edge.
    pub temperature: f64,
    /// Distance of the precipitation ring centre inward from the outer edge.
    pub precipitation: f64,
    /// Width of the temperature and precipitation rings.
    pub band_width: f64,
    /// Distance of the month labels outward from the outer edge.
    pub months: f64,
    /// Distance of the Sunday and holiday date labels inward from the outer edge.
    pub sunday: f64,
}

impl Default for Offsets {
    fn default() -> Self {
        Self {
            daylight: 0.03,
            temperature: 0.042,
            precipitation: 0.066,
            band_width: 0.02,
            months: 0.03,
            sunday: 0.013,
        }
    }
}

/// Which auxiliary layers the plotter appends after the preset's data layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayerToggles {
    /// Sunday date labels.
    pub sunday: bool,
    /// Month labels and dividers.
    pub months: bool,
    /// Hour ticks and labels.
    pub time: bool,
    /// Holiday labels and markers.
    pub holidays: bool,
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self {
            sunday: true,
            months: true,
            time: true,
            holidays: false,
        }
    }
}

/// One column of hour labels.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeLabelPosition {
    /// Data angle in degrees (0 is January 1st).
    #[serde(default)]
    pub angle_deg: f64,
    /// Anchor of each label at that angle.
    #[serde(default)]
    pub align: HAlign,
}

/// Activity layer inputs.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActivitySettings {
    /// Activity export, relative to `data_dir` unless absolute.
    pub file: PathBuf,
    /// Annual distance goal in km; the goal spans `target_span` of the radial range.
    pub target_km: f64,
    /// Fraction of the visible radial range covered by the annual goal.
    pub target_span: f64,
    /// Spoke length per km as a fraction of the visible radial range.
    pub km_scale: f64,
    /// Opacity of activities from years before the rendered one.
    pub past_alpha: f64,
}

impl Default for ActivitySettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("strava_activities.json"),
            target_km: 1000.0,
            target_span: 0.9,
            km_scale: 0.01,
            past_alpha: 0.25,
        }
    }
}

/// Holiday layer inputs.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HolidaySettings {
    /// Holiday list, relative to `data_dir` unless absolute.
    pub file: PathBuf,
    /// Also label Sundays (in the Sunday colour, smaller).
    pub include_sundays: bool,
}

impl Default for HolidaySettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("holidays.json"),
            include_sundays: true,
        }
    }
}

/// Rectangle in figure fractions, origin at the bottom left.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FigureRect {
    /// Left edge.
    pub left: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl FigureRect {
    /// Build a rectangle from its four fractions.
    pub const fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }
}

/// Print poster layout.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PosterSettings {
    /// Figure width in inches.
    pub width_in: f64,
    /// Figure height in inches.
    pub height_in: f64,
    /// Raster resolution.
    pub dpi: f64,
    /// Square region holding the dial.
    pub dial: FigureRect,
    /// Strip split into one row per footer.
    pub footer: FigureRect,
}

impl Default for PosterSettings {
    fn default() -> Self {
        Self {
            width_in: 24.0,
            height_in: 30.0,
            dpi: 300.0,
            dial: FigureRect::new(0.1, 0.25, 0.8, 0.64),
            footer: FigureRect::new(0.1, 0.03, 0.8, 0.17),
        }
    }
}

/// Wallpaper layout. Sizes are in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WallpaperSettings {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Point-to-pixel scale.
    pub dpi: f64,
    /// Region holding the dial; may extend past the figure.
    pub calendar_position: FigureRect,
    /// Rotate the dial so a month sits at the top.
    pub rotate_to_month: bool,
    /// Month (1..=12) to rotate to the top. Defaults to the current month.
    pub month: Option<u32>,
    /// Footer column: left edge, width and the bottom of the first footer.
    pub footer: FigureRect,
    /// Vertical gap between stacked footers.
    pub footer_gap: f64,
}

impl Default for WallpaperSettings {
    fn default() -> Self {
        Self {
            width: 3840,
            height: 2160,
            dpi: 96.0,
            calendar_position: FigureRect::new(-0.2, -0.3, 1.2, 1.2),
            rotate_to_month: true,
            month: None,
            footer: FigureRect::new(0.7, 0.2, 0.25, 0.15),
            footer_gap: 0.1,
        }
    }
}

/// Font files and families.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontSettings {
    /// Directory searched for `files`.
    pub dir: PathBuf,
    /// Font files loaded when present.
    pub files: Vec<PathBuf>,
    /// Family used for the title chrome.
    pub title_family: String,
    /// Family used for everything else and as the fallback.
    pub family: String,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("fonts"),
            files: vec![
                PathBuf::from("Arvo-Bold.ttf"),
                PathBuf::from("Arvo-Regular.ttf"),
            ],
            title_family: "Arvo".to_owned(),
            family: "DejaVu Sans".to_owned(),
        }
    }
}

fn default_year() -> Year {
    Year(2025)
}

fn default_interval() -> f64 {
    0.25
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_time_labels() -> Vec<TimeLabelPosition> {
    vec![TimeLabelPosition {
        angle_deg: 0.0,
        align: HAlign::Left,
    }]
}

impl Settings {
    /// Load settings from a `.json` or `.toml` file (anything else is read as TOML).
    pub fn from_path(path: impl AsRef<Path>) -> CalendarResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CalendarError::config(format!("configuration file not found: {}", path.display()))
            } else {
                CalendarError::config(format!("read '{}': {e}", path.display()))
            }
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// Parse and validate a TOML settings document.
    pub fn from_toml_str(text: &str) -> CalendarResult<Self> {
        let s: Self = toml::from_str(text)
            .map_err(|e| CalendarError::config(format!("invalid TOML settings: {e}")))?;
        s.validate()?;
        Ok(s)
    }

    /// Parse and validate a JSON settings document.
    pub fn from_json_str(text: &str) -> CalendarResult<Self> {
        let mut de = serde_json::Deserializer::from_str(text);
        let s: Self = serde_path_to_error::deserialize(&mut de).map_err(|e| {
            CalendarError::config(format!(
                "invalid JSON settings at '{}': {}",
                e.path(),
                e.inner()
            ))
        })?;
        s.validate()?;
        Ok(s)
    }

    /// Replace the city, as the positional CLI argument does.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city_name = city.into();
        self
    }

    /// Path of the city data file.
    pub fn city_data_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}_data.json", self.city_name))
    }

    /// Resolve a data file name against `data_dir`.
    pub fn data_path(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }

    /// Output stem: the configured `file_name`, or `<city>_<suffix>`.
    pub fn file_stem(&self, suffix: &str) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| format!("{}_{suffix}", self.city_name))
    }

    /// Reject values no render could use.
    pub fn validate(&self) -> CalendarResult<()> {
        if self.city_name.trim().is_empty() {
            return Err(CalendarError::config("city_name must not be empty"));
        }
        if !(1..=9999).contains(&self.year.0) {
            return Err(CalendarError::config(format!(
                "year {} is out of range 1..=9999",
                self.year
            )));
        }
        if !(self.interval.is_finite() && self.interval > 0.0) {
            return Err(CalendarError::config("interval must be a positive number of hours"));
        }
        let o = &self.offsets;
        for (name, v) in [
            ("daylight", o.daylight),
            ("temperature", o.temperature),
            ("precipitation", o.precipitation),
            ("band_width", o.band_width),
            ("months", o.months),
            ("sunday", o.sunday),
        ] {
            if !(v.is_finite() && (0.0..1.0).contains(&v)) {
                return Err(CalendarError::config(format!(
                    "offsets.{name} must be a fraction in [0, 1), got {v}"
                )));
            }
        }
        let a = &self.activity;
        if !(a.target_km > 0.0 && a.target_span > 0.0 && a.km_scale >= 0.0) {
            return Err(CalendarError::config(
                "activity.target_km and activity.target_span must be > 0, activity.km_scale >= 0",
            ));
        }
        let p = &self.poster;
        if !(p.width_in > 0.0 && p.height_in > 0.0 && p.dpi > 0.0) {
            return Err(CalendarError::config("poster size and dpi must be > 0"));
        }
        let w = &self.wallpaper;
        if w.width == 0 || w.height == 0 || w.dpi <= 0.0 {
            return Err(CalendarError::config("wallpaper size and dpi must be > 0"));
        }
        if let Some(m) = w.month
            && !(1..=12).contains(&m)
        {
            return Err(CalendarError::config(format!(
                "wallpaper.month must be 1..=12, got {m}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
