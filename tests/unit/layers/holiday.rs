use chrono::NaiveDate;

use super::*;
use crate::foundation::core::HourRange;
use crate::test_support::{ctx, settings};

fn holiday(name: &str, y: i32, m: u32, d: u32) -> HolidayRecord {
    HolidayRecord {
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
    }
}

#[test]
fn names_never_read_upside_down() {
    for deg in [1.0_f64, 45.0, 120.0, 179.0, 181.0, 250.0, 300.0, 359.0] {
        let placed = place_name("Midsummer", deg.to_radians());
        assert!(
            placed.rotation_deg >= -90.0 && placed.rotation_deg <= 90.0,
            "{deg}° gave {}",
            placed.rotation_deg
        );
    }
}

#[test]
fn left_half_is_mirrored_and_padded_on_the_other_side() {
    let right = place_name("May Day", 60f64.to_radians());
    assert_eq!(right.text, "May Day  ");
    assert_eq!(right.align, HAlign::Right);
    assert!((right.rotation_deg - 30.0).abs() < 1e-9);

    let left = place_name("May Day", 240f64.to_radians());
    assert_eq!(left.text, "  May Day");
    assert_eq!(left.align, HAlign::Left);
    assert!((left.rotation_deg - 30.0).abs() < 1e-9);
}

#[test]
fn only_holidays_in_the_rendered_year_are_drawn() {
    let s = settings();
    let c = ctx(&s, 2025, HourRange::FULL_DAY);
    let layer = HolidayLayer::new(
        vec![
            holiday("New Year", 2025, 1, 1),
            holiday("Christmas", 2024, 12, 25),
            holiday("Constitution Day", 2025, 5, 17),
        ],
        false,
    );
    let mut scene = Scene::new();
    layer.plot(&mut scene, &c, &Derived::None).unwrap();
    // date label, marker and name per holiday
    assert_eq!(scene.len(), 6);
    let markers = scene
        .ops()
        .iter()
        .filter(|op| matches!(op.kind, DrawKind::Marker { .. }))
        .count();
    assert_eq!(markers, 2);
    assert!(scene.ops().iter().all(|op| op.z == z::DATE_LABELS));
    let names: Vec<_> = scene
        .ops()
        .iter()
        .filter_map(|op| match &op.kind {
            DrawKind::PolarText { text, style, .. } if style.size_pt == 6.0 => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, ["New Year  ", "Constitution Day  "]);
}

#[test]
fn sundays_are_added_in_a_smaller_size() {
    let s = settings();
    let c = ctx(&s, 2023, HourRange::FULL_DAY);
    let mut scene = Scene::new();
    HolidayLayer::new(Vec::new(), true)
        .plot(&mut scene, &c, &Derived::None)
        .unwrap();
    assert_eq!(scene.len(), 53);
    let DrawKind::PolarText { style, .. } = &scene.ops()[0].kind else {
        panic!("expected a date label");
    };
    assert_eq!(style.size_pt, 7.0);
    assert_eq!(style.color, s.colors.sunday_label);
}

#[test]
fn nothing_to_draw_is_not_an_error() {
    let s = settings();
    let c = ctx(&s, 2023, HourRange::FULL_DAY);
    let mut scene = Scene::new();
    HolidayLayer::new(Vec::new(), false)
        .plot(&mut scene, &c, &Derived::None)
        .unwrap();
    assert!(scene.is_empty());
}
