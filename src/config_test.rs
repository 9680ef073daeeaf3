#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults() {
    let c = ControlsConfig::default();
    assert_eq!(c.alt_action_key, ModifierKey::Shift);
    assert_eq!(c.centered_key, ModifierKey::Alt);
    assert_eq!(c.uni_scale_key, ModifierKey::Shift);
    assert!(c.uniform_scaling);
    assert!(!c.centered_scaling);
    assert!(!c.centered_rotation);
    assert_eq!(c.corner_size, 13.0);
}

#[test]
fn from_json_empty_object_is_default() {
    let c = ControlsConfig::from_json("{}").unwrap();
    assert_eq!(c, ControlsConfig::default());
}

#[test]
fn from_json_overrides_fields() {
    let c = ControlsConfig::from_json(
        r#"{ "alt_action_key": "ctrl", "centered_scaling": true, "corner_size": 24 }"#,
    )
    .unwrap();
    assert_eq!(c.alt_action_key, ModifierKey::Ctrl);
    assert!(c.centered_scaling);
    assert_eq!(c.corner_size, 24.0);
    assert!(c.uniform_scaling);
}

#[test]
fn from_json_unknown_key_name_is_parse_error() {
    let err = ControlsConfig::from_json(r#"{ "centered_key": "hyper" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

#[test]
fn from_json_malformed_is_parse_error() {
    assert!(matches!(ControlsConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_non_positive_corner_size() {
    let err = ControlsConfig::from_json(r#"{ "corner_size": 0 }"#).unwrap_err();
    match err {
        ConfigError::Invalid { field, .. } => assert_eq!(field, "corner_size"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validate_rejects_nan_corner_size() {
    let c = ControlsConfig { corner_size: f64::NAN, ..Default::default() };
    let err = c.validate().unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG_INVALID");
}

#[test]
fn round_trips_through_json() {
    let c = ControlsConfig { centered_rotation: true, ..Default::default() };
    let raw = serde_json::to_string(&c).unwrap();
    assert_eq!(ControlsConfig::from_json(&raw).unwrap(), c);
}
