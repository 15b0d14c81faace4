//! Metrics store tests

use crate::test_utils::fixtures::zero_placeholder;
use hms_application::MetricsStore;
use hms_domain::value_objects::{CpuLoadSample, LoadAverage, NetworkRate, NetworkSample};

#[test]
fn test_genuine_sample_purges_every_placeholder() {
    let store = MetricsStore::new(60);
    for t in 0..3 {
        store.record_network(zero_placeholder(t));
    }
    assert!(store.network_only_heuristic());

    store.record_network(NetworkSample::measured(10, NetworkRate::new(500, 0)));

    let history = store.network_history();
    assert_eq!(history.iter().filter(|s| s.is_heuristic).count(), 0);
    let last = history.last().copied().unwrap();
    assert_eq!(last.received_rate, 500);
    assert!(!last.is_heuristic);
    assert_eq!(store.network_heuristic_count(), 0);
}

#[test]
fn test_measured_zero_does_not_purge() {
    let store = MetricsStore::new(60);
    store.record_network(zero_placeholder(0));
    store.record_network(NetworkSample::measured(1, NetworkRate::default()));

    assert_eq!(store.network_history().len(), 2);
    assert_eq!(store.network_heuristic_count(), 1);
    assert!(!store.network_only_heuristic());
}

#[test]
fn test_placeholder_does_not_purge_placeholders() {
    let store = MetricsStore::new(60);
    store.record_network(zero_placeholder(0));
    store.record_network(NetworkSample::heuristic(1, NetworkRate::new(102_400, 0)));
    assert_eq!(store.network_history().len(), 2);
    assert!(store.network_only_heuristic());
}

#[test]
fn test_only_heuristic_is_false_when_empty() {
    let store = MetricsStore::new(60);
    assert!(!store.network_only_heuristic());
}

#[test]
fn test_heuristic_count_follows_eviction() {
    let store = MetricsStore::new(2);
    store.record_network(zero_placeholder(0));
    store.record_network(NetworkSample::measured(1, NetworkRate::default()));
    store.record_network(NetworkSample::measured(2, NetworkRate::default()));

    // The placeholder fell off the head
    assert_eq!(store.network_heuristic_count(), 0);
    assert!(store.network_history().iter().all(|s| !s.is_heuristic));
}

#[test]
fn test_every_kind_is_bounded() {
    let store = MetricsStore::new(60);
    for t in 0..100 {
        store.push_cpu_load(CpuLoadSample::new(t, LoadAverage::new(1.0, 1.0, 1.0)));
        store.record_network(NetworkSample::measured(t, NetworkRate::new(1, 1)));
    }
    let cpu = store.cpu_load_history();
    assert_eq!(cpu.len(), 60);
    assert_eq!(cpu.first().map(|s| s.timestamp), Some(40));
    assert_eq!(store.network_history().len(), 60);
    assert_eq!(store.latest_network().map(|s| s.timestamp), Some(99));
}

#[test]
fn test_network_window_returns_most_recent() {
    let store = MetricsStore::new(60);
    for t in 0..10 {
        store.record_network(NetworkSample::measured(t, NetworkRate::new(t as u64, 0)));
    }
    let window = store.network_window(3);
    let stamps: Vec<i64> = window.iter().map(|s| s.timestamp).collect();
    assert_eq!(stamps, vec![7, 8, 9]);
}
