//! Unit tests for configuration validation.

use axis_monitor::config::parse_config;
use axis_monitor::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[channels.position]
label = "Axis Position"
unit = "mm"
min_value = 0.0
max_value = 1000.0
"#;

    assert!(parse_config(toml_str).is_ok());
}

/// Test validation fails for an inverted range.
#[test]
fn test_inverted_range_rejected() {
    let toml_str = r#"
[channels.velocity]
label = "Axis Vel"
unit = "mm/s"
min_value = 100.0
max_value = -100.0
"#;

    let err = parse_config(toml_str).unwrap_err();
    assert_eq!(
        err,
        Error::Config(ConfigError::InvalidRange {
            min: 100.0,
            max: -100.0
        })
    );
}

/// Test validation fails for a degenerate range (min == max).
#[test]
fn test_degenerate_range_rejected() {
    let toml_str = r#"
[channels.torque_limit]
label = "Torque Limit"
unit = "%"
min_value = 50.0
max_value = 50.0
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidRange { .. }))
    ));
}

/// Test validation fails when reserved columns consume the whole line.
#[test]
fn test_layout_too_narrow_for_unit() {
    let toml_str = r#"
[layout]
total_width = 22

[channels.velocity]
label = "Axis Vel"
unit = "mm/s"
min_value = -100.0
max_value = 100.0
"#;

    // 12 label + 5 value + 4 unit + 2 separators = 23 reserved > 22 total
    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::BarTooNarrow { .. }))
    ));
}

/// Test validation fails for a line wider than the render buffers.
#[test]
fn test_layout_too_wide_rejected() {
    let toml_str = r#"
[layout]
total_width = 500

[channels.position]
label = "Axis Position"
unit = "mm"
min_value = 0.0
max_value = 1000.0
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::LineTooWide { .. }))
    ));
}
