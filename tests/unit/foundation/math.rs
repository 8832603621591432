use super::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn angle_of_day_is_periodic() {
    assert_eq!(angle_of_day(0.0, 365), 0.0);
    for n in [1usize, 7, 365, 366] {
        let full = angle_of_day(n as f64, n);
        assert!((full.rem_euclid(TAU)).abs() < 1e-9 || (full.rem_euclid(TAU) - TAU).abs() < 1e-9);
    }
    assert!((angle_of_day(183.0, 366) - PI).abs() < 1e-12);
}

#[test]
fn radius_of_hour_is_fraction_of_day() {
    assert_eq!(radius_of_hour(0.0), 0.0);
    assert_eq!(radius_of_hour(12.0), 0.5);
    assert_eq!(radius_of_hour(24.0), 1.0);
}

#[test]
fn label_rotation_stays_in_half_open_interval() {
    assert_eq!(label_rotation_deg(0.0), 0.0);
    assert!((label_rotation_deg(FRAC_PI_2) + 90.0).abs() < 1e-9);
    assert!((label_rotation_deg(TAU) - label_rotation_deg(0.0)).abs() < 1e-9);

    for i in 0..720 {
        let a = f64::from(i) * TAU / 360.0;
        let r = label_rotation_deg(a);
        assert!((-180.0..180.0).contains(&r), "angle {a} -> {r}");
    }
}

#[test]
fn wrap_deg_normalizes() {
    assert_eq!(wrap_deg(190.0), -170.0);
    assert_eq!(wrap_deg(-190.0), 170.0);
    assert_eq!(wrap_deg(180.0), -180.0);
}

#[test]
fn linspace_includes_both_ends() {
    let v = linspace(0.0, 1.0, 5);
    assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
}

#[test]
fn frange_is_half_open_and_rounded() {
    let v = frange(4.0, 5.0, 0.25);
    assert_eq!(v, vec![4.0, 4.25, 4.5, 4.75]);
    let v = frange(0.0, 1.0, 0.1);
    assert_eq!(v.len(), 10);
    assert_eq!(v[3], 0.3);
    assert!(frange(0.0, 1.0, 0.0).is_empty());
}

#[test]
fn quarter_rounding() {
    assert_eq!(floor_quarter(4.3), 4.25);
    assert_eq!(ceil_quarter(4.3), 4.5);
    assert_eq!(ceil_quarter(4.5), 4.5);
}

#[test]
fn min_max_ignores_nan() {
    assert_eq!(min_max(&[3.0, f64::NAN, -1.0, 2.0]), Some((-1.0, 3.0)));
    assert_eq!(min_max(&[]), None);
}
