//! Null probe and system clock tests

use hms_domain::ports::{Clock, CounterProbe, HostStatsProbe, InterfaceResolver};
use hms_domain::value_objects::{DiskCounters, MemoryUsage};
use hms_providers::{NullCounterProbe, NullHostStats, NullInterfaceResolver, SystemClock};

#[tokio::test]
async fn test_null_counter_probe_reports_idle_host() {
    let probe = NullCounterProbe::new();

    assert!(probe.read_network_counters().await.expect("null network").is_empty());
    assert_eq!(probe.read_disk_counters().await.ok(), Some(DiskCounters::default()));
    assert_eq!(probe.read_load_average().await.expect("null load").one_min, 0.0);
    assert_eq!(probe.provider_name(), "null");
}

#[test]
fn test_null_host_stats_report_no_memory() {
    let stats = NullHostStats::new();

    let usage = stats.memory_usage().expect("null memory");
    assert_eq!(usage, MemoryUsage::default());
    assert_eq!(usage.percent_used(), 0);
}

#[tokio::test]
async fn test_null_resolver_knows_nothing() {
    let resolver = NullInterfaceResolver::new();

    assert_eq!(resolver.default_interface().await, None);
    assert_eq!(resolver.interface_speed_mbps("eth0").await, None);
}

#[test]
fn test_system_clock_is_epoch_millis() {
    let clock = SystemClock::new();

    let first = clock.now_millis();
    let second = clock.now_millis();
    // 2020-01-01T00:00:00Z
    assert!(first > 1_577_836_800_000);
    assert!(second >= first);
}
