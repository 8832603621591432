use super::*;

fn entry(kind: &str, start: &str, metres: f64) -> ActivityEntry {
    ActivityEntry {
        kind: kind.to_owned(),
        start_date: start.to_owned(),
        distance: metres,
        elapsed_time: 1800.0,
    }
}

#[test]
fn keeps_runs_and_walks_only() {
    let entries = vec![
        entry("Run", "2024-03-02T07:30:00Z", 5000.0),
        entry("Ride", "2024-03-02T08:00:00Z", 20000.0),
        entry("Walk", "2024-01-01 18:15:00", 2500.0),
    ];
    let out = project_activities(&entries, Year(2025)).unwrap();
    assert_eq!(out.len(), 2);

    assert_eq!(out[0].kind, ActivityKind::Walk);
    assert_eq!(out[0].day_of_year, 0);
    assert_eq!(out[0].start_hour, 18.25);

    assert_eq!(out[1].kind, ActivityKind::Run);
    assert_eq!(out[1].day_of_year, 31 + 28 + 1);
    assert_eq!(out[1].distance_km, 5.0);
    assert_eq!(out[1].start_hour, 7.5);
    assert_eq!(out[1].source_year(), 2024);
    assert_eq!(out[1].elapsed, Duration::from_secs(1800));
}

#[test]
fn leap_day_is_skipped_on_common_years() {
    let entries = vec![entry("Run", "2024-02-29T06:00:00", 3000.0)];
    assert!(project_activities(&entries, Year(2025)).unwrap().is_empty());
    let kept = project_activities(&entries, Year(2028)).unwrap();
    assert_eq!(kept[0].day_of_year, 59);
}

#[test]
fn bad_timestamp_is_a_data_error() {
    let entries = vec![entry("Run", "yesterday", 3000.0)];
    let err = project_activities(&entries, Year(2025)).unwrap_err();
    assert_eq!(err.kind(), "data");
}

#[test]
fn missing_file_yields_no_activities() {
    let out = load_activities("target/definitely/missing_activities.json", Year(2025)).unwrap();
    assert!(out.is_empty());
}

#[test]
fn oversized_elapsed_time_is_a_data_error() {
    let mut huge = entry("Run", "2025-03-01T07:30:00", 5000.0);
    huge.elapsed_time = 1e20;
    let err = project_activities(&[huge], Year(2025)).unwrap_err();
    assert_eq!(err.kind(), "data");
    assert!(err.to_string().contains("elapsed_time"), "{err}");

    let mut negative = entry("Walk", "2025-03-01T07:30:00", 1000.0);
    negative.elapsed_time = -5.0;
    let out = project_activities(&[negative], Year(2025)).unwrap();
    assert_eq!(out[0].elapsed, Duration::ZERO);
}
