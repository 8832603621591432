use std::path::PathBuf;

use chrono::Datelike;

use crate::config::settings::Settings;
use crate::data::activity::load_activities;
use crate::data::city::CityData;
use crate::data::holiday::load_holidays;
use crate::foundation::error::CalendarResult;
use crate::layers::{
    ActivityLayer, HolidayLayer, Layer, MonthsLayer, ScalarBandLayer, SundayLayer, TimeLayer,
    TwilightKind, TwilightLayer,
};
use crate::plot::canvas::{CalendarCanvas, Placement, Rendered};
use crate::plot::layout::month_rotation;
use crate::render::fonts::FontBook;

/// The ready-made calendars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Dawn twilight and temperature on a poster.
    Dawn,
    /// Full-day twilight, temperature and precipitation on a poster.
    Day,
    /// Dawn twilight, temperature and activities on a wallpaper, current month on top.
    Wallpaper,
}

impl Preset {
    /// Suffix of the default output file name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dawn => "Dawn",
            Self::Day => "Day",
            Self::Wallpaper => "Wallpaper",
        }
    }

    /// Poster, or wallpaper rotated to the configured (or current) month.
    pub fn placement(self, settings: &Settings) -> CalendarResult<Placement> {
        match self {
            Self::Dawn | Self::Day => Ok(Placement::Poster),
            Self::Wallpaper => {
                let wp = &settings.wallpaper;
                let rotation = if wp.rotate_to_month {
                    let month = wp.month.unwrap_or_else(|| chrono::Local::now().month());
                    month_rotation(settings.year, month)?
                } else {
                    0.0
                };
                Ok(Placement::Wallpaper { rotation })
            }
        }
    }

    /// The preset's own data layers, in registration order.
    pub fn data_layers(
        self,
        settings: &Settings,
        city: &CityData,
    ) -> CalendarResult<Vec<Box<dyn Layer>>> {
        let sun = city.sun.clone();
        let weather = &city.weather;
        let mut layers: Vec<Box<dyn Layer>> = Vec::new();
        match self {
            Self::Dawn => {
                layers.push(Box::new(TwilightLayer::new(TwilightKind::Dawn, sun)));
                layers.push(Box::new(ScalarBandLayer::temperature(weather.temperature.clone())));
            }
            Self::Day => {
                layers.push(Box::new(TwilightLayer::new(TwilightKind::Day, sun)));
                layers.push(Box::new(ScalarBandLayer::temperature(weather.temperature.clone())));
                layers.push(Box::new(ScalarBandLayer::precipitation(
                    weather.precipitation.clone(),
                )));
            }
            Self::Wallpaper => {
                layers.push(Box::new(TwilightLayer::new(TwilightKind::Dawn, sun)));
                layers.push(Box::new(ScalarBandLayer::temperature(weather.temperature.clone())));
                let activities = load_activities(
                    settings.data_path(&settings.activity.file),
                    settings.year,
                )?;
                layers.push(Box::new(ActivityLayer::new(activities)));
            }
        }
        Ok(layers)
    }
}

/// Sunday, month, time and holiday layers, as toggled in `settings.layers`.
pub fn auxiliary_layers(settings: &Settings) -> CalendarResult<Vec<Box<dyn Layer>>> {
    let toggles = settings.layers;
    let mut layers: Vec<Box<dyn Layer>> = Vec::new();
    if toggles.sunday {
        layers.push(Box::new(SundayLayer));
    }
    if toggles.months {
        layers.push(Box::new(MonthsLayer));
    }
    if toggles.time {
        layers.push(Box::new(TimeLayer));
    }
    if toggles.holidays {
        let holidays = load_holidays(settings.data_path(&settings.holidays.file))?;
        layers.push(Box::new(HolidayLayer::new(
            holidays,
            settings.holidays.include_sundays,
        )));
    }
    Ok(layers)
}

/// Run the three phases for `preset` over already loaded city data.
#[tracing::instrument(level = "info", skip_all, fields(preset = preset.label(), city = %settings.city_name))]
pub fn render(
    preset: Preset,
    settings: &Settings,
    city: &CityData,
    fonts: &FontBook,
) -> CalendarResult<Rendered> {
    city.check_year(settings.year);
    let mut layers = preset.data_layers(settings, city)?;
    layers.extend(auxiliary_layers(settings)?);
    CalendarCanvas::setup(settings, layers, preset.placement(settings)?, city.coordinates)?
        .draw()?
        .finish(fonts)
}

/// Load the city data and fonts, render `preset` and write the output files.
pub fn run(preset: Preset, settings: &Settings) -> CalendarResult<Vec<PathBuf>> {
    let city = CityData::from_path(settings.city_data_path())?;
    let fonts = FontBook::load(&settings.fonts);
    let rendered = render(preset, settings, &city, &fonts)?;
    rendered.export(&settings.output_dir, &settings.file_stem(preset.label()))
}

#[cfg(test)]
#[path = "../../tests/unit/plot/preset.rs"]
mod tests;
