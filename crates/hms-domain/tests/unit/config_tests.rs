//! Sampling configuration tests

use hms_domain::value_objects::SamplingConfig;
use std::time::Duration;

#[test]
fn test_defaults() {
    let config = SamplingConfig::default();
    assert_eq!(config.history_capacity, 60);
    assert_eq!(config.collect_interval(), Duration::from_secs(1));
    assert_eq!(config.network_interval(), Duration::from_secs(1));
    assert_eq!(config.disk_interval_ms, 5000);
    assert_eq!(config.instant_delay(), Duration::from_millis(350));
    assert_eq!(config.ema_alpha, 0.4);
    assert_eq!(config.collector_start_delay(), Duration::from_secs(2));
    assert!(config.startup_seed);
    assert_eq!(config.seed_attempts, 3);
    assert_eq!(config.seed_pause(), Duration::from_millis(120));
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config: SamplingConfig =
        serde_json::from_str(r#"{"ema_alpha": 0.25, "history_capacity": 120}"#).unwrap();
    assert_eq!(config.ema_alpha, 0.25);
    assert_eq!(config.history_capacity, 120);
    assert_eq!(config.disk_interval_ms, 5000);
}
