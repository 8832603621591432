use std::path::Path;

use serde::Deserialize;

use crate::foundation::core::Year;
use crate::foundation::error::{CalendarError, CalendarResult};
use crate::signal::Signal;

/// Geographic position of the city, in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Coordinates {
    /// Degrees north (negative is south).
    #[serde(default)]
    pub latitude: f64,
    /// Degrees east (negative is west).
    #[serde(default)]
    pub longitude: f64,
}

impl Coordinates {
    /// Format as `"59.913900°N,   10.752200°E"` with S/W suffixes for negative values.
    pub fn label(&self) -> String {
        format!(
            "{:.6}°{},   {:.6}°{}",
            self.latitude.abs(),
            if self.latitude >= 0.0 { 'N' } else { 'S' },
            self.longitude.abs(),
            if self.longitude >= 0.0 { 'E' } else { 'W' },
        )
    }
}

/// Sun event times for every day of the year, in fractional hours of local time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SunData {
    /// Sun crosses the horizon, morning.
    pub sunrise: Signal,
    /// Sun crosses the horizon, evening.
    pub sunset: Signal,
    /// Sun 6° below the horizon, morning.
    pub civil_dawn: Signal,
    /// Sun 6° below the horizon, evening.
    pub civil_dusk: Signal,
    /// Sun 12° below the horizon, morning.
    pub nautical_dawn: Signal,
    /// Sun 12° below the horizon, evening.
    pub nautical_dusk: Signal,
    /// Sun 18° below the horizon, morning.
    pub astro_dawn: Signal,
    /// Sun 18° below the horizon, evening.
    pub astro_dusk: Signal,
}

/// Daily climate normals used by the temperature and precipitation rings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeatherData {
    /// Mean daily temperature in °C. Empty when unavailable.
    pub temperature: Signal,
    /// Mean daily precipitation in mm. Empty when unavailable.
    pub precipitation: Signal,
    /// Year the weather normals were recorded for, when it differs from the sun data.
    pub weather_data_year: Option<Year>,
}

/// Everything loaded from one `<city>_data.json` file.
#[derive(Clone, Debug, PartialEq)]
pub struct CityData {
    /// Where the sun data was computed.
    pub coordinates: Coordinates,
    /// Month lengths as written by the generator.
    pub days_in_month: Vec<usize>,
    /// Year the sun data was generated for.
    pub year: Year,
    /// Twilight boundaries.
    pub sun: SunData,
    /// Climate normals.
    pub weather: WeatherData,
}

#[derive(Deserialize)]
struct CityDataFile {
    sunrise: Vec<f64>,
    sunset: Vec<f64>,
    civil: Vec<[f64; 2]>,
    nautical: Vec<[f64; 2]>,
    astro: Vec<[f64; 2]>,
    #[serde(default)]
    temperature: Vec<f64>,
    #[serde(default)]
    precipitation: Vec<f64>,
    coordinates: Coordinates,
    days_in_month: Vec<usize>,
    year: i32,
    #[serde(default)]
    weather_data_year: Option<i32>,
}

fn split(pairs: &[[f64; 2]]) -> (Signal, Signal) {
    pairs.iter().map(|[dawn, dusk]| (*dawn, *dusk)).unzip()
}

impl CityData {
    /// Parse city data from a JSON reader. `origin` names the source in error messages.
    pub fn from_reader<R: std::io::Read>(r: R, origin: &str) -> CalendarResult<Self> {
        let raw: CityDataFile = super::parse_json(r, origin)?;
        Self::from_file(raw, origin)
    }

    /// Parse city data from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CalendarResult<Self> {
        let path = path.as_ref();
        let raw: CityDataFile = super::read_json(path)?;
        Self::from_file(raw, &path.display().to_string())
    }

    fn from_file(raw: CityDataFile, origin: &str) -> CalendarResult<Self> {
        if raw.days_in_month.len() != 12 {
            return Err(CalendarError::data(format!(
                "{origin}: days_in_month must list 12 months, got {}",
                raw.days_in_month.len()
            )));
        }

        let (civil_dawn, civil_dusk) = split(&raw.civil);
        let (nautical_dawn, nautical_dusk) = split(&raw.nautical);
        let (astro_dawn, astro_dusk) = split(&raw.astro);

        Ok(Self {
            coordinates: raw.coordinates,
            days_in_month: raw.days_in_month,
            year: Year(raw.year),
            sun: SunData {
                sunrise: raw.sunrise,
                sunset: raw.sunset,
                civil_dawn,
                civil_dusk,
                nautical_dawn,
                nautical_dusk,
                astro_dawn,
                astro_dusk,
            },
            weather: WeatherData {
                temperature: raw.temperature,
                precipitation: raw.precipitation,
                weather_data_year: raw.weather_data_year.map(Year),
            },
        })
    }

    /// Warn when the file was generated for a different year than the one being rendered.
    pub fn check_year(&self, year: Year) {
        if self.year != year {
            tracing::warn!(
                data_year = self.year.0,
                render_year = year.0,
                "city data was generated for {} but rendering {year}; signals will be length-repaired",
                self.year
            );
        }
        if let Some(wy) = self.weather.weather_data_year
            && wy != year
        {
            tracing::info!(
                weather_year = wy.0,
                "weather normals from {wy} used as a proxy for {year}"
            );
        }
        if self.days_in_month.as_slice() != year.days_in_month().as_slice() {
            tracing::warn!(
                "days_in_month in data file does not match {year}; using the calendar of {year}"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/city.rs"]
mod tests;
