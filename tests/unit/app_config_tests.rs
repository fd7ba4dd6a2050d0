/*!
 * Tests for app configuration functionality
 */

use subcheck::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_defaultConfig_shouldMatchDocumentedThresholds() {
    let config = Config::default();

    assert_eq!(config.checks.max_chars_per_line, 25);
    assert_eq!(config.checks.max_lines_per_block, 2);
    assert_eq!(config.checks.min_duration_ms, 100);
    assert_eq!(config.checks.max_chars_per_second, 20.0);
    assert!(config.checks.check_content_layout);
    assert!(config.checks.check_reading_speed);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration round-trip through JSON
#[test]
fn test_configSerde_withRoundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.checks.max_chars_per_line = 16;
    config.checks.check_reading_speed = false;
    config.log_level = LogLevel::Debug;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let restored: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.checks.max_chars_per_line, 16);
    assert!(!restored.checks.check_reading_speed);
    assert_eq!(restored.log_level, LogLevel::Debug);
}

/// Test that missing sections fall back to defaults
#[test]
fn test_configSerde_withEmptyJson_shouldUseDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.checks.max_chars_per_line, 25);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test log level serialization casing
#[test]
fn test_logLevelSerde_shouldUseLowercase() {
    let config: Config = serde_json::from_str(r#"{"log_level": "trace"}"#).unwrap();

    assert_eq!(config.log_level, LogLevel::Trace);
}

/// Test validation of inconsistent configurations
#[test]
fn test_validate_withDefaultConfig_shouldPass() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_withZeroMaxChars_shouldFail() {
    let mut config = Config::default();
    config.checks.max_chars_per_line = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroMaxLines_shouldFail() {
    let mut config = Config::default();
    config.checks.max_lines_per_block = 0;

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withNonPositiveCps_shouldFail() {
    let mut config = Config::default();
    config.checks.max_chars_per_second = 0.0;

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroMinDuration_shouldPass() {
    // A zero minimum duration disables the rule rather than misconfiguring it
    let mut config = Config::default();
    config.checks.min_duration_ms = 0;

    assert!(config.validate().is_ok());
}
