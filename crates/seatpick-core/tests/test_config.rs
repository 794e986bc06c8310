use seatpick_core::config::PickerConfig;
use seatpick_core::error::SeatpickError;
use seatpick_core::geometry::{FillRule, Point, Size};

#[test]
fn test_defaults_match_stadium_map() {
    let config = PickerConfig::default();
    assert_eq!(config.overview_height, 200.0);
    assert_eq!(config.loupe_size, 50.0);
    assert_eq!(config.zoom_view_size, 250.0);
    assert_eq!(config.zoom_scale, 0.3);
    assert_eq!(config.zoom_radius, 200.0);
    assert_eq!(config.source_size(), Size::new(2816.0, 2641.0));
    assert_eq!(config.initial_loupe(), Point::new(40.0, 40.0));
    assert_eq!(config.fill_rule, FillRule::NonZero);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_round_trip() {
    let config = PickerConfig {
        zoom_radius: 120.0,
        fill_rule: FillRule::EvenOdd,
        initial_loupe: [0.0, 10.0],
        ..PickerConfig::default()
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let back: PickerConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let config: PickerConfig = toml::from_str("zoom_scale = 0.5\nfill_rule = \"EvenOdd\"\n").unwrap();
    assert_eq!(config.zoom_scale, 0.5);
    assert_eq!(config.fill_rule, FillRule::EvenOdd);
    assert_eq!(config.loupe_size, 50.0);
    assert_eq!(config.zoom_radius, 200.0);
}

#[test]
fn test_empty_toml_is_default() {
    let config: PickerConfig = toml::from_str("").unwrap();
    assert_eq!(config, PickerConfig::default());
}

#[test]
fn test_unknown_fill_rule_is_rejected() {
    assert!(toml::from_str::<PickerConfig>("fill_rule = \"Winding\"").is_err());
}

#[test]
fn test_validate_rejects_degenerate_values() {
    let cases = [
        PickerConfig { loupe_size: 0.0, ..PickerConfig::default() },
        PickerConfig { zoom_scale: -0.3, ..PickerConfig::default() },
        PickerConfig { zoom_view_size: f64::NAN, ..PickerConfig::default() },
        PickerConfig { source_width: 0.0, ..PickerConfig::default() },
        PickerConfig { zoom_radius: -1.0, ..PickerConfig::default() },
    ];
    for config in cases {
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SeatpickError::Config(_)), "{err}");
    }
}

#[test]
fn test_zero_radius_is_valid() {
    let config = PickerConfig {
        zoom_radius: 0.0,
        ..PickerConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_fill_rule_display() {
    assert_eq!(FillRule::NonZero.to_string(), "Non-zero");
    assert_eq!(FillRule::EvenOdd.to_string(), "Even-odd");
}
