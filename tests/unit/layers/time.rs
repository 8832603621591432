use super::*;
use crate::render::scene::{DrawKind, HAlign};
use crate::test_support::{ctx, settings};

#[test]
fn clock_labels_use_twelve_hour_time() {
    assert_eq!(clock_label(0.25), "12:15AM");
    assert_eq!(clock_label(6.5), "6:30AM");
    assert_eq!(clock_label(12.0), "12:00PM");
    assert_eq!(clock_label(13.75), "1:45PM");
}

#[test]
fn labels_skip_the_edges() {
    let range = HourRange::new(4.0, 6.0).unwrap();
    let ticks = hour_ticks(range, 0.5);
    assert_eq!(ticks, [4.0 / 24.0, 4.5 / 24.0, 5.0 / 24.0, 5.5 / 24.0]);
    assert_eq!(hour_labels(range, 0.5), ["", "4:30AM", "5:00AM"]);
}

#[test]
fn plots_rings_and_one_label_column_per_position() {
    let mut s = settings();
    s.interval = 0.5;
    s.time_labels.push(crate::config::settings::TimeLabelPosition {
        angle_deg: 180.0,
        align: HAlign::Right,
    });
    let c = ctx(&s, 2025, HourRange::new(4.0, 6.0).unwrap());
    let mut scene = Scene::new();
    TimeLayer.plot(&mut scene, &c, &Derived::None).unwrap();

    let rings = scene.ops().iter().filter(|op| op.z == z::TWILIGHT).count();
    assert_eq!(rings, 3);
    let texts: Vec<_> = scene
        .ops()
        .iter()
        .filter_map(|op| match &op.kind {
            DrawKind::PolarText { theta, r, text, style } => Some((*theta, *r, text.as_str(), style.align)),
            _ => None,
        })
        .collect();
    assert_eq!(texts.len(), 6);
    assert_eq!(texts[0].2, " ");
    assert_eq!(texts[1].2, " 4:30AM");
    assert_eq!(texts[1].1, 4.5 / 24.0);
    assert_eq!(texts[0].3, HAlign::Left);
    assert!((texts[3].0 - std::f64::consts::PI).abs() < 1e-12);
    assert_eq!(texts[3].3, HAlign::Right);
}
