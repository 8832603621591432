use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::foundation::core::Year;
use crate::foundation::error::{CalendarError, CalendarResult};

/// Kind of fitness activity drawn by the activity layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    /// A run.
    Run,
    /// A walk.
    Walk,
}

/// One activity as exported by the fitness-data collaborator.
///
/// Unknown fields (ids, names, speeds) are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ActivityEntry {
    /// `Run`, `Walk`, or anything else (ignored when projecting).
    #[serde(rename = "type")]
    pub kind: String,
    /// ISO-8601 local start time.
    pub start_date: String,
    /// Distance in metres.
    pub distance: f64,
    /// Elapsed time in seconds.
    #[serde(default)]
    pub elapsed_time: f64,
}

/// An activity projected onto the rendered year.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityRecord {
    /// Original calendar date of the activity.
    pub date: NaiveDate,
    /// Zero-based day index after projecting `date` onto the rendered year.
    pub day_of_year: usize,
    /// Local start time of day in fractional hours.
    pub start_hour: f64,
    /// Distance in kilometres.
    pub distance_km: f64,
    /// Wall-clock duration.
    pub elapsed: Duration,
    /// Run or walk.
    pub kind: ActivityKind,
}

impl ActivityRecord {
    /// Year the activity actually happened in.
    pub fn source_year(&self) -> i32 {
        chrono::Datelike::year(&self.date)
    }
}

fn parse_local_start(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Keep runs and walks and project each onto `year`.
///
/// February 29th activities cannot be projected onto a common year and are skipped with a
/// warning. Records are returned sorted by projected day.
pub fn project_activities(
    entries: &[ActivityEntry],
    year: Year,
) -> CalendarResult<Vec<ActivityRecord>> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let kind = match entry.kind.as_str() {
            "Run" => ActivityKind::Run,
            "Walk" => ActivityKind::Walk,
            _ => continue,
        };
        let start = parse_local_start(&entry.start_date).ok_or_else(|| {
            CalendarError::data(format!(
                "activity start_date '{}' is not an ISO-8601 timestamp",
                entry.start_date
            ))
        })?;
        let elapsed = Duration::try_from_secs_f64(entry.elapsed_time.max(0.0)).map_err(|e| {
            CalendarError::data(format!(
                "activity elapsed_time {} out of range: {e}",
                entry.elapsed_time
            ))
        })?;
        let date = start.date();
        let Some(day_of_year) = year.project(date) else {
            tracing::warn!(%date, "skipping activity that cannot be projected onto {year}");
            continue;
        };
        out.push(ActivityRecord {
            date,
            day_of_year,
            start_hour: f64::from(start.hour()) + f64::from(start.minute()) / 60.0,
            distance_km: entry.distance / 1000.0,
            elapsed,
            kind,
        });
    }
    out.sort_by_key(|a| (a.day_of_year, a.date));
    Ok(out)
}

/// Load and project an activity export. A missing file yields no records.
pub fn load_activities(path: impl AsRef<Path>, year: Year) -> CalendarResult<Vec<ActivityRecord>> {
    let path = path.as_ref();
    let Some(entries) = super::read_optional_json::<Vec<ActivityEntry>>(path)? else {
        tracing::warn!(path = %path.display(), "activity file not found");
        return Ok(Vec::new());
    };
    tracing::info!(count = entries.len(), "loaded activities");
    project_activities(&entries, year)
}

#[cfg(test)]
#[path = "../../tests/unit/data/activity.rs"]
mod tests;
