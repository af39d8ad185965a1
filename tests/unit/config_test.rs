//! Tests for configuration validation

use deferq::config::DispatchConfig;
use deferq::core::{FirePolicy, OverflowPolicy};

fn valid_config() -> DispatchConfig {
    DispatchConfig {
        queue_capacity: 16,
        schedule_capacity: 8,
        fire_policy: FirePolicy::CatchUp,
        overflow_policy: OverflowPolicy::RetryNextTick,
    }
}

#[test]
fn test_dispatch_config_validation() {
    assert!(valid_config().validate().is_ok());
}

#[test]
fn test_dispatch_config_degenerate_queue_capacity() {
    let mut cfg = valid_config();
    cfg.queue_capacity = 1;
    assert!(cfg.validate().is_err());
    cfg.queue_capacity = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_dispatch_config_zero_schedule_capacity() {
    let mut cfg = valid_config();
    cfg.schedule_capacity = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_dispatch_config_from_json() {
    let json = r#"{
        "queue_capacity": 32,
        "schedule_capacity": 16,
        "fire_policy": "strict",
        "overflow_policy": "drop_entry"
    }"#;
    let cfg = DispatchConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.queue_capacity, 32);
    assert_eq!(cfg.fire_policy, FirePolicy::Strict);
    assert_eq!(cfg.overflow_policy, OverflowPolicy::DropEntry);
}

#[test]
fn test_dispatch_config_policy_defaults() {
    let json = r#"{ "queue_capacity": 32, "schedule_capacity": 16 }"#;
    let cfg = DispatchConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.fire_policy, FirePolicy::CatchUp);
    assert_eq!(cfg.overflow_policy, OverflowPolicy::RetryNextTick);
}

#[test]
fn test_dispatch_config_from_json_rejects_invalid() {
    assert!(DispatchConfig::from_json_str("not json").is_err());
    let bad = r#"{ "queue_capacity": 1, "schedule_capacity": 16 }"#;
    assert!(DispatchConfig::from_json_str(bad).is_err());
}

#[test]
fn test_dispatch_config_round_trips_through_json() {
    let cfg = valid_config();
    let json = serde_json::to_string(&cfg).unwrap();
    let back = DispatchConfig::from_json_str(&json).unwrap();
    assert_eq!(back.queue_capacity, cfg.queue_capacity);
    assert_eq!(back.schedule_capacity, cfg.schedule_capacity);
}
