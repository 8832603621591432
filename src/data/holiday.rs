use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::foundation::core::Year;
use crate::foundation::error::CalendarResult;

/// A named public holiday.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HolidayRecord {
    /// Display name.
    pub name: String,
    /// Calendar date, `YYYY-MM-DD` in the file.
    pub date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HolidayFile {
    Wrapped { holidays: Vec<HolidayRecord> },
    Bare(Vec<HolidayRecord>),
}

/// Load holidays from `{"holidays": [...]}` or a bare array. A missing file yields none.
pub fn load_holidays(path: impl AsRef<Path>) -> CalendarResult<Vec<HolidayRecord>> {
    let path = path.as_ref();
    match super::read_optional_json::<HolidayFile>(path)? {
        Some(HolidayFile::Wrapped { holidays }) | Some(HolidayFile::Bare(holidays)) => Ok(holidays),
        None => {
            tracing::warn!(path = %path.display(), "holiday file not found");
            Ok(Vec::new())
        }
    }
}

/// Holidays falling in `year`, with their zero-based day index.
pub fn holidays_in(holidays: &[HolidayRecord], year: Year) -> Vec<(usize, &HolidayRecord)> {
    holidays
        .iter()
        .filter_map(|h| year.day_of(h.date).map(|d| (d, h)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/data/holiday.rs"]
mod tests;
