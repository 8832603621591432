use super::*;
use serde_json::json;

#[test]
fn named_maps_hit_their_end_stops() {
    let cm = Colormap::named("Blues").unwrap();
    assert_eq!(cm.sample(0.0).to_hex_rgb(), "#f7fbff");
    assert_eq!(cm.sample(1.0).to_hex_rgb(), "#08306b");

    let rev = Colormap::named("Blues_r").unwrap();
    assert_eq!(rev.sample(0.0).to_hex_rgb(), "#08306b");
    assert_eq!(rev.name(), "Blues_r");
}

#[test]
fn unknown_name_is_rejected() {
    assert!(Colormap::named("jet-ish").is_err());
    assert!(serde_json::from_value::<Colormap>(json!("nope")).is_err());
}

#[test]
fn explicit_stops_interpolate_linearly() {
    let cm: Colormap = serde_json::from_value(json!(["#000000", "#ffffff"])).unwrap();
    assert_eq!(cm.sample(0.5).to_hex_rgb(), "#808080");
    assert_eq!(cm.sample(-3.0).to_hex_rgb(), "#000000");
    assert_eq!(cm.sample(7.0).to_hex_rgb(), "#ffffff");
    assert!(serde_json::from_value::<Colormap>(json!(["#000000"])).is_err());
}

#[test]
fn normalize_handles_degenerate_ranges() {
    let n = Normalize { min: 10.0, max: 20.0 };
    assert_eq!(n.apply(15.0), 0.5);
    assert_eq!(n.apply(30.0), 1.0);
    let flat = Normalize { min: 3.0, max: 3.0 };
    assert_eq!(flat.apply(3.0), 0.0);
}
