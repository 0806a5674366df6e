//! # Configuration Tests
//!
//! Tests for configuration deserialization, defaults, and error paths.

use ttalu_core::common::DriverError;
use ttalu_core::config::{Config, DriverConfig, TimingConfig, defaults};

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.timing.mul_latency, 8);
    assert_eq!(config.timing.div_latency, 16);
    assert_eq!(config.driver.poll_budget, 20);
    assert_eq!(config.driver.reset_hold, 2);
}

#[test]
fn test_defaults_match_the_named_constants() {
    assert_eq!(TimingConfig::default().mul_latency, defaults::MUL_LATENCY);
    assert_eq!(TimingConfig::default().div_latency, defaults::DIV_LATENCY);
    assert_eq!(DriverConfig::default().poll_budget, defaults::POLL_BUDGET);
    assert_eq!(DriverConfig::default().reset_hold, defaults::RESET_HOLD);
}

#[test]
fn test_default_latencies_fit_inside_the_poll_budget() {
    let config = Config::default();
    assert!(config.timing.mul_latency <= config.driver.poll_budget);
    assert!(config.timing.div_latency <= config.driver.poll_budget);
}

#[test]
fn test_empty_object_gives_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_section_keeps_sibling_defaults() {
    let config = Config::from_json(r#"{ "timing": { "div_latency": 12 } }"#).unwrap();
    assert_eq!(config.timing.div_latency, 12);
    assert_eq!(config.timing.mul_latency, defaults::MUL_LATENCY);
    assert_eq!(config.driver, DriverConfig::default());
}

#[test]
fn test_full_config_round_trip() {
    let config = Config::from_json(
        r#"{
            "timing": { "mul_latency": 2, "div_latency": 4 },
            "driver": { "poll_budget": 6, "reset_hold": 1 }
        }"#,
    )
    .unwrap();
    assert_eq!(config.timing.mul_latency, 2);
    assert_eq!(config.timing.div_latency, 4);
    assert_eq!(config.driver.poll_budget, 6);
    assert_eq!(config.driver.reset_hold, 1);
}

#[test]
fn test_invalid_json_is_an_error() {
    let err = Config::from_json("not json").unwrap_err();
    assert!(matches!(err, DriverError::InvalidConfig(_)));
}

#[test]
fn test_wrong_field_type_is_an_error() {
    let result = Config::from_json(r#"{ "timing": { "mul_latency": "fast" } }"#);
    assert!(result.is_err());
}
