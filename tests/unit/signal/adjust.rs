use super::*;

#[test]
fn pads_with_last_value() {
    let x: Vec<f64> = (0..365).map(f64::from).collect();
    let (y, r) = repair_length(&x, 366);
    assert_eq!(y.len(), 366);
    assert_eq!(y[365], 364.0);
    assert_eq!(y[..365], x[..]);
    assert_eq!(r, Repair::Padded { from: 365, to: 366 });
}

#[test]
fn truncates_surplus() {
    let x: Vec<f64> = (0..366).map(f64::from).collect();
    let (y, r) = repair_length(&x, 365);
    assert_eq!(y, x[..365].to_vec());
    assert_eq!(r, Repair::Truncated { from: 366, to: 365 });
}

#[test]
fn matching_and_empty_are_untouched() {
    let x = vec![1.0; 365];
    assert_eq!(repair_length(&x, 365), (x.clone(), Repair::Unchanged));
    assert_eq!(repair_length(&[], 365), (Vec::new(), Repair::Unchanged));
}

#[test]
fn fit_to_days_returns_repaired_signal() {
    let x = vec![2.0; 10];
    assert_eq!(fit_to_days("temperature", &x, 12), vec![2.0; 12]);
}
