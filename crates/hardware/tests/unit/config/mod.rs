//! Configuration tests.
//!
//! Defaults, TOML deserialization, and the untyped-tree path the bindings
//! use.

use coregate::config::Config;
use coregate::core::sequencer::SETTLE_TICKS;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.general.variant, "standard");
    assert!(!config.general.trace_sequencer);
    assert_eq!(config.cluster.settle_ticks, SETTLE_TICKS);
    assert_eq!(config.soc.reset_address, None);
}

#[test]
fn test_empty_toml_is_all_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.cluster.settle_ticks, SETTLE_TICKS);
    assert_eq!(config.general.variant, "standard");
}

#[test]
fn test_toml_overrides() {
    let config: Config = toml::from_str(
        r#"
        [general]
        trace_sequencer = true

        [cluster]
        settle_ticks = 16

        [soc]
        reset_address = 0x1fc00000
        "#,
    )
    .unwrap();

    assert!(config.general.trace_sequencer);
    assert_eq!(config.general.variant, "standard");
    assert_eq!(config.cluster.settle_ticks, 16);
    assert_eq!(config.soc.reset_address, Some(0x1fc0_0000));
}

#[test]
fn test_from_value_partial_tree() {
    let config = Config::from_value(json!({
        "cluster": { "settle_ticks": 8 },
    }))
    .unwrap();
    assert_eq!(config.cluster.settle_ticks, 8);
    assert_eq!(config.general.variant, "standard");
}

#[test]
fn test_from_value_rejects_malformed_tree() {
    let err = Config::from_value(json!({
        "cluster": { "settle_ticks": "lots" },
    }))
    .unwrap_err();
    assert!(err.contains("invalid config"), "unexpected error: {}", err);
}
