use super::*;
use crate::foundation::core::HourRange;
use crate::test_support::{ctx, flat_sun, settings};

#[test]
fn dawn_extent_rounds_to_quarter_hours() {
    let mut sun = flat_sun(365);
    sun.astro_dawn[10] = 3.6;
    sun.sunrise[200] = 7.1;
    let layer = TwilightLayer::new(TwilightKind::Dawn, sun);
    assert_eq!(layer.start_time(), Some(3.5));
    assert_eq!(layer.end_time(), Some(7.5));
}

#[test]
fn day_extent_is_the_full_day() {
    let layer = TwilightLayer::new(TwilightKind::Day, flat_sun(365));
    assert_eq!((layer.start_time(), layer.end_time()), (Some(0.0), Some(24.0)));
}

#[test]
fn dawn_draws_five_bands_and_day_nine() {
    let s = settings();
    let c = ctx(&s, 2025, HourRange::FULL_DAY);
    for (kind, bands) in [(TwilightKind::Dawn, 5), (TwilightKind::Day, 9)] {
        let layer = TwilightLayer::new(kind, flat_sun(365));
        let derived = layer.prepare(&c).unwrap();
        let mut scene = Scene::new();
        layer.plot(&mut scene, &c, &derived).unwrap();
        assert_eq!(scene.len(), bands);
        assert!(
            scene
                .ops()
                .iter()
                .all(|op| op.z == z::BASE_BANDS || op.z == z::TWILIGHT)
        );
    }
}

#[test]
fn curves_are_repaired_and_normalized() {
    let s = settings();
    let c = ctx(&s, 2024, HourRange::FULL_DAY);
    let layer = TwilightLayer::new(TwilightKind::Dawn, flat_sun(365));
    let Derived::Twilight(curves) = layer.prepare(&c).unwrap() else {
        panic!("expected twilight curves");
    };
    assert_eq!(curves.sunrise.len(), 366);
    assert_eq!(curves.sunrise[365], 0.25);
    assert!(curves.dusk.is_none());
}

#[test]
fn empty_sun_data_skips_without_error() {
    let s = settings();
    let c = ctx(&s, 2025, HourRange::FULL_DAY);
    let layer = TwilightLayer::new(TwilightKind::Dawn, SunData::default());
    assert_eq!(layer.start_time(), None);
    let derived = layer.prepare(&c).unwrap();
    assert_eq!(derived, Derived::None);
    let mut scene = Scene::new();
    layer.plot(&mut scene, &c, &derived).unwrap();
    assert!(scene.is_empty());
}

#[test]
fn legend_has_five_entries() {
    let s = settings();
    let c = ctx(&s, 2025, HourRange::FULL_DAY);
    let layer = TwilightLayer::new(TwilightKind::Day, flat_sun(365));
    let derived = layer.prepare(&c).unwrap();
    let area = FooterArea {
        rect: crate::foundation::core::Rect::new(0.0, 0.0, 800.0, 100.0),
        stacked: false,
    };
    let mut scene = Scene::new();
    layer
        .footer()
        .unwrap()
        .draw_footer(&mut scene, &area, &c, &derived)
        .unwrap();
    let circles = scene
        .ops()
        .iter()
        .filter(|op| matches!(op.kind, DrawKind::FigureCircle { .. }))
        .count();
    assert_eq!(circles, 5);
    assert_eq!(scene.len(), 15);
}

#[test]
fn smoothed_curves_are_resampled_onto_a_leap_year() {
    let mut s = settings();
    s.smoothen = true;
    let c = ctx(&s, 2024, HourRange::FULL_DAY);
    let layer = TwilightLayer::new(TwilightKind::Day, flat_sun(365));
    let Derived::Twilight(curves) = layer.prepare(&c).unwrap() else {
        panic!("expected twilight curves");
    };
    let dusk = curves.dusk.as_ref().expect("day layer has dusk curves");
    for (curve, hour) in [
        (&curves.sunrise, 6.0),
        (&curves.civil, 5.5),
        (&curves.nautical, 5.0),
        (&curves.astro, 4.5),
        (&dusk.sunset, 18.0),
        (&dusk.civil, 18.5),
        (&dusk.nautical, 19.0),
        (&dusk.astro, 19.5),
    ] {
        assert_eq!(curve.len(), 366);
        assert!(curve.iter().all(|r| (r - hour / 24.0).abs() < 1e-9), "{hour}");
    }
}
