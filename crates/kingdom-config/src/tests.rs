//! Tests for process configuration.

use super::*;
use std::collections::BTreeMap;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        app_id = "castle-dev"
        random_seed = 42

        [rewards]
        chores_per_coupon = 4
        chores_per_date_night = 12
        reign_margin = 3
        default_pool = ["Tea", "Nap"]
    "#;

    let config = KingdomConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.app_id, "castle-dev");
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.rewards.chores_per_coupon, 4);
    assert_eq!(config.rewards.chores_per_date_night, 12);
    assert_eq!(config.rewards.reign_margin, 3);
    assert_eq!(config.rewards.default_pool, vec!["Tea", "Nap"]);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        app_id: castle-dev
        random_seed: 42
        rewards:
          chores_per_coupon: 6
    "#;

    let config = KingdomConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.app_id, "castle-dev");
    assert_eq!(config.rewards.chores_per_coupon, 6);
    assert_eq!(config.rewards.chores_per_date_night, DEFAULT_CHORES_PER_DATE_NIGHT);
}

#[test]
fn test_empty_toml_is_default() {
    let config = KingdomConfig::from_toml_str("").unwrap();
    assert_eq!(config.app_id, DEFAULT_APP_ID);
    assert_eq!(config.random_seed, None);
    assert_eq!(config.rewards, RewardDefaults::default());
    assert_eq!(config.rewards.default_pool.len(), 10);
}

#[test]
fn test_zero_threshold_rejected() {
    let err = KingdomConfig::from_toml_str("[rewards]\nchores_per_coupon = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_empty_pool_rejected() {
    let err = KingdomConfig::from_toml_str("[rewards]\ndefault_pool = []").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = KingdomConfig::load("/nonexistent/kingdom.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = KingdomConfig::new()
        .with_app_id("other")
        .with_random_seed(123);

    assert_eq!(config.app_id, "other");
    assert_eq!(config.random_seed, Some(123));
}

#[test]
fn test_resolve_without_store_settings() {
    let policy = RewardDefaults::default().resolve(None);
    assert_eq!(policy.chores_per_coupon, 5);
    assert_eq!(policy.chores_per_date_night, 20);
    assert_eq!(policy.pool(Participant::Ducky).len(), 10);
    assert_eq!(policy.pool(Participant::Pips)[0], "15 min Back Massage");
}

#[test]
fn test_resolve_prefers_store_settings() {
    let mut pools = BTreeMap::new();
    pools.insert(Participant::Pips, vec!["Pancakes".to_string()]);
    let settings = RewardSettings {
        chores_per_coupon: Some(2),
        chores_per_date_night: Some(8),
        pools,
        requests: Vec::new(),
    };

    let policy = RewardDefaults::default().resolve(Some(&settings));
    assert_eq!(policy.chores_per_coupon, 2);
    assert_eq!(policy.chores_per_date_night, 8);
    assert_eq!(policy.pool(Participant::Pips), ["Pancakes".to_string()]);
    assert_eq!(policy.pool(Participant::Ducky).len(), 10);
}

#[test]
fn test_resolve_ignores_zero_thresholds_and_empty_pools() {
    let mut pools = BTreeMap::new();
    pools.insert(Participant::Ducky, Vec::new());
    let settings = RewardSettings {
        chores_per_coupon: Some(0),
        chores_per_date_night: None,
        pools,
        requests: Vec::new(),
    };

    let policy = RewardDefaults::default().resolve(Some(&settings));
    assert_eq!(policy.chores_per_coupon, DEFAULT_CHORES_PER_COUPON);
    assert_eq!(policy.chores_per_date_night, DEFAULT_CHORES_PER_DATE_NIGHT);
    assert_eq!(policy.pool(Participant::Ducky).len(), DEFAULT_COUPONS.len());
}
