use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

fn axes(range: HourRange) -> PolarAxes {
    PolarAxes::clockwise(Point::new(100.0, 100.0), 50.0, range, 0.0)
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn day_zero_is_at_the_top_and_runs_clockwise() {
    let ax = axes(HourRange::FULL_DAY);
    assert!(close(ax.to_px(0.0, 1.0), Point::new(100.0, 50.0)));
    assert!(close(ax.to_px(FRAC_PI_2, 1.0), Point::new(150.0, 100.0)));
    assert!(close(ax.to_px(PI, 0.5), Point::new(100.0, 125.0)));
}

#[test]
fn inner_limit_maps_to_centre() {
    let ax = axes(HourRange::new(4.0, 8.0).unwrap());
    assert!(close(ax.to_px(1.0, 4.0 / 24.0), Point::new(100.0, 100.0)));
    assert!((ax.rho(6.0 / 24.0) - 25.0).abs() < 1e-9);
}

#[test]
fn geometry_is_clamped_but_text_is_not() {
    let ax = axes(HourRange::new(4.0, 8.0).unwrap());
    assert_eq!(ax.rho_clamped(0.9), 50.0);
    assert_eq!(ax.rho_clamped(0.0), 0.0);
    assert!(ax.rho(9.0 / 24.0) > 50.0);
}

#[test]
fn rotation_follows_extra_offset() {
    let ax = axes(HourRange::FULL_DAY);
    assert_eq!(ax.text_rotation(-90.0), -90.0);
    let turned = PolarAxes::clockwise(Point::ZERO, 1.0, HourRange::FULL_DAY, FRAC_PI_2);
    assert!((turned.text_rotation(0.0) - 90.0).abs() < 1e-9);
}

#[test]
fn long_segments_are_subdivided() {
    let ax = axes(HourRange::FULL_DAY);
    let path = ax.line_path(&[0.0, PI], &[1.0, 1.0]);
    assert!(path.elements().len() > 100);
    let band = ax.band_path(&[0.0, 0.001], &[0.2, 0.2], &[0.4, 0.4]);
    assert_eq!(band.elements().len(), 5);
}
