use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CalendarError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(CalendarError::data("x").to_string().contains("data error:"));
    assert!(
        CalendarError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        CalendarError::export("x")
            .to_string()
            .contains("export error:")
    );
}

#[test]
fn kinds_are_distinct_for_config_and_data() {
    assert_eq!(CalendarError::config("x").kind(), "configuration");
    assert_eq!(CalendarError::data("x").kind(), "data");
    assert!(CalendarError::config("x").is_config());
    assert!(!CalendarError::data("x").is_config());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CalendarError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), "internal");
}
