use chrono::{Datelike, NaiveDate, Weekday};

use crate::foundation::error::{CalendarError, CalendarResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Three-letter month labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// A Gregorian calendar year.
///
/// The year fixes the day count (and therefore the length every [`crate::Signal`] is
/// repaired to) and the month partition used by the month, Sunday and holiday layers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Year(pub i32);

impl Year {
    /// Standard Gregorian leap rule.
    pub fn is_leap(self) -> bool {
        let y = self.0;
        y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
    }

    /// Number of days in the year (365 or 366).
    pub fn days(self) -> usize {
        if self.is_leap() { 366 } else { 365 }
    }

    /// Month lengths, summing to [`Year::days`].
    pub fn days_in_month(self) -> [usize; 12] {
        let feb = if self.is_leap() { 29 } else { 28 };
        [31, feb, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    }

    /// Zero-based day index of the first day of each month.
    pub fn month_starts(self) -> [usize; 12] {
        let mut out = [0usize; 12];
        let mut acc = 0;
        for (slot, len) in out.iter_mut().zip(self.days_in_month()) {
            *slot = acc;
            acc += len;
        }
        out
    }

    /// Map a zero-based day index to `(month index 0..12, day of month 1..=31)`.
    ///
    /// Indices past the end of the year land in December.
    pub fn month_and_day(self, day: usize) -> (usize, usize) {
        let starts = self.month_starts();
        let month = starts
            .iter()
            .rposition(|&s| s <= day)
            .unwrap_or(0);
        (month, day - starts[month] + 1)
    }

    /// January 1st of this year.
    pub fn jan1(self) -> CalendarResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, 1, 1)
            .ok_or_else(|| CalendarError::config(format!("year {} is out of range", self.0)))
    }

    /// Zero-based day index of the first occurrence of `weekday`.
    pub fn first_weekday(self, weekday: Weekday) -> CalendarResult<usize> {
        let jan1 = self.jan1()?.weekday();
        let delta = i64::from(weekday.num_days_from_monday())
            - i64::from(jan1.num_days_from_monday());
        Ok(delta.rem_euclid(7) as usize)
    }

    /// Zero-based day index of the first Sunday: `(6 - weekday(Jan 1)) mod 7`.
    pub fn first_sunday(self) -> CalendarResult<usize> {
        self.first_weekday(Weekday::Sun)
    }

    /// Zero-based day index of `date` when it falls inside this year.
    pub fn day_of(self, date: NaiveDate) -> Option<usize> {
        (date.year() == self.0).then(|| date.ordinal0() as usize)
    }

    /// Project `date` onto this year, keeping month and day.
    ///
    /// Returns `None` for February 29th projected onto a non-leap year.
    pub fn project(self, date: NaiveDate) -> Option<usize> {
        date.with_year(self.0).map(|d| d.ordinal0() as usize)
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open window of hours of the day, `[start, end)`, on the 0..24 scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HourRange {
    /// Inclusive start hour.
    pub start: f64,
    /// Exclusive end hour.
    pub end: f64,
}

impl HourRange {
    /// Full day, used when no layer declares an extent.
    pub const FULL_DAY: Self = Self {
        start: 0.0,
        end: 24.0,
    };

    /// Create a validated range with finite bounds and `start < end`.
    pub fn new(start: f64, end: f64) -> CalendarResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(CalendarError::render("hour range bounds must be finite"));
        }
        if start >= end {
            return Err(CalendarError::render(format!(
                "hour range start ({start}) must be < end ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Width of the window in hours.
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Inner axis limit on the normalized 0..1 radius scale.
    pub fn r_min(self) -> f64 {
        self.start / 24.0
    }

    /// Outer axis limit on the normalized 0..1 radius scale.
    pub fn r_max(self) -> f64 {
        self.end / 24.0
    }

    /// Width of the window on the normalized radius scale.
    pub fn r_span(self) -> f64 {
        self.span() / 24.0
    }

    /// Smallest range covering both inputs.
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> CalendarResult<Self> {
        if width == 0 || height == 0 {
            return Err(CalendarError::config("canvas width and height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
