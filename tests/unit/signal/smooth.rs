use super::*;
use std::f64::consts::TAU;

#[test]
fn disabled_is_identity() {
    let x = vec![1.0, 5.0, -2.0, 7.5];
    assert_eq!(smooth(&x, false), x);
    assert_eq!(smooth_to_len(&x, 10, false), x);
}

#[test]
fn constant_input_stays_constant() {
    for n in [2usize, 3, 10, 365, 366] {
        let x = vec![6.25; n];
        let y = smooth(&x, true);
        assert_eq!(y.len(), n);
        for v in y {
            assert!((v - 6.25).abs() < 1e-9, "n={n} v={v}");
        }
    }
}

#[test]
fn constant_input_survives_resampling() {
    let x = vec![-3.5; 365];
    let y = smooth_to_len(&x, 366, true);
    assert_eq!(y.len(), 366);
    assert!(y.iter().all(|v| (v + 3.5).abs() < 1e-9));
}

#[test]
fn low_frequency_passes_and_noise_is_removed() {
    let n = 366;
    let base: Vec<f64> = (0..n)
        .map(|i| 12.0 + 3.0 * (TAU * i as f64 / n as f64).cos())
        .collect();
    // Alternating noise on an even length is exactly the Nyquist bin.
    let noisy: Vec<f64> = base
        .iter()
        .enumerate()
        .map(|(i, v)| v + if i % 2 == 0 { 0.5 } else { -0.5 })
        .collect();

    let y = smooth(&noisy, true);
    let max_err = y
        .iter()
        .zip(&base)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f64, f64::max);
    assert!(max_err < 1e-6, "max_err={max_err}");
}

#[test]
fn output_wraps_continuously() {
    let n = 366;
    let ramp: Vec<f64> = (0..n).map(|i| i as f64 / n as f64).collect();
    let y = smooth(&ramp, true);
    assert!((ramp[0] - ramp[n - 1]).abs() > 0.9);
    let wrap_step = (y[0] - y[n - 1]).abs();
    assert!(wrap_step < 0.15, "wrap_step={wrap_step}");
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(smooth(&[], true).is_empty());
}
