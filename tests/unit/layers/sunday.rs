use std::f64::consts::TAU;

use super::*;
use crate::foundation::core::HourRange;
use crate::render::scene::DrawKind;
use crate::test_support::{ctx, settings};

#[test]
fn sundays_start_from_the_first_one() {
    let s24 = sundays(Year(2024)).unwrap();
    assert_eq!(s24[0], 6);
    assert_eq!(s24[1], 13);
    assert_eq!(s24.len(), 52);
    let s23 = sundays(Year(2023)).unwrap();
    assert_eq!(s23[0], 0);
    assert_eq!(s23.len(), 53);
    assert_eq!(*s23.last().unwrap(), 364);
}

#[test]
fn labels_show_day_of_month_inside_the_rim() {
    let s = settings();
    let c = ctx(&s, 2024, HourRange::new(4.0, 10.0).unwrap());
    let mut scene = Scene::new();
    SundayLayer.plot(&mut scene, &c, &Derived::None).unwrap();
    assert_eq!(scene.len(), 52);

    let texts: Vec<_> = scene
        .ops()
        .iter()
        .filter_map(|op| match &op.kind {
            DrawKind::PolarText { theta, r, text, style } => Some((*theta, *r, text.as_str(), *style)),
            _ => None,
        })
        .collect();
    // Jan 7, Jan 14, ..., Feb 4
    assert_eq!(texts[0].2, "7");
    assert_eq!(texts[4].2, "4");
    assert!((texts[0].0 - TAU * 6.5 / 366.0).abs() < 1e-12);
    let r = 10.0 / 24.0 - 0.013 * 6.0 / 24.0;
    assert!((texts[0].1 - r).abs() < 1e-12);
    assert_eq!(texts[0].3.size_pt, 14.0);
    assert_eq!(texts[0].3.color, s.colors.sunday_label);
    assert!(scene.ops().iter().all(|op| op.z == z::DATE_LABELS));
}
