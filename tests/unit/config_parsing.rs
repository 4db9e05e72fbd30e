//! Unit tests for configuration parsing.

use axis_monitor::config::parse_config;

/// Test parsing of a full configuration.
#[test]
fn test_parse_full_config() {
    let toml_str = r##"
[layout]
total_width = 60
label_width = 14
value_width = 6
marker = "#"
fill = "."

[channels.position]
label = "Axis Position"
unit = "mm"
min_value = 0.0
max_value = 1000.0
digits = 2

[channels.torque_current]
label = "Torque"
unit = "%"
min_value = -100.0
max_value = 100.0
"##;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.layout.total_width, 60);
    assert_eq!(config.layout.marker, '#');
    assert_eq!(config.layout.fill, '.');

    let position = config.channel("position").unwrap();
    assert_eq!(position.digits, 2);
    assert_eq!(position.unit.as_str(), "mm");

    // digits falls back to the default
    assert_eq!(config.channel("torque_current").unwrap().digits, 1);
}

/// Test that the layout section is optional.
#[test]
fn test_layout_defaults_applied() {
    let toml_str = r#"
[channels.motor_speed]
label = "Motor Speed"
unit = "rpm"
min_value = -1500.0
max_value = 1500.0
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.layout.total_width, 56);
    assert_eq!(config.layout.label_width, 12);
    assert_eq!(config.layout.value_width, 5);
    assert_eq!(config.layout.marker, '█');
    assert_eq!(config.layout.fill, '-');
}

/// Test that an empty config parses (panel would hold only status/faults).
#[test]
fn test_empty_config_parses() {
    let config = parse_config("").expect("Failed to parse empty TOML");
    assert_eq!(config.channel_names().count(), 0);
}

/// Test parse failure on malformed TOML.
#[test]
fn test_malformed_toml_rejected() {
    let result = parse_config("[channels.position\nlabel = ");
    assert!(result.is_err());
}

/// Test parse failure on a missing required field.
#[test]
fn test_missing_bounds_rejected() {
    let toml_str = r#"
[channels.position]
label = "Axis Position"
unit = "mm"
"#;
    assert!(parse_config(toml_str).is_err());
}
