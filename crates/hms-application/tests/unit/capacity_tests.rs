//! Capacity service tests

use crate::test_utils::fakes::FixedResolver;
use hms_application::capacity::inferred_cap_bytes_per_sec;
use hms_application::{CapacityService, MetricsStore};
use hms_domain::value_objects::{NetworkRate, NetworkSample, PercentileQuery};
use std::sync::Arc;

fn service(resolver: FixedResolver) -> (Arc<MetricsStore>, CapacityService) {
    let store = Arc::new(MetricsStore::new(60));
    let service = CapacityService::new(store.clone(), Arc::new(resolver));
    (store, service)
}

#[test]
fn test_inferred_cap_for_gigabit_link() {
    assert_eq!(inferred_cap_bytes_per_sec(1000), 943_718_400);
    assert_eq!(inferred_cap_bytes_per_sec(0), 0);
}

#[tokio::test]
async fn test_capacity_with_known_speed() {
    let (_, service) = service(FixedResolver::new(Some("eth0"), Some(1000)));
    let capacity = service.network_capacity().await;

    assert_eq!(capacity.default_interface.as_deref(), Some("eth0"));
    assert_eq!(capacity.interface_speed_mbps, Some(1000));
    assert_eq!(capacity.inferred_cap_bytes_per_sec, Some(943_718_400));
}

#[tokio::test]
async fn test_capacity_with_unknown_speed() {
    let (_, service) = service(FixedResolver::new(Some("wlan0"), None));
    let capacity = service.network_capacity().await;

    assert_eq!(capacity.default_interface.as_deref(), Some("wlan0"));
    assert_eq!(capacity.interface_speed_mbps, None);
    assert_eq!(capacity.inferred_cap_bytes_per_sec, None);
}

#[tokio::test]
async fn test_capacity_without_default_route() {
    let (_, service) = service(FixedResolver::none());
    let capacity = service.network_capacity().await;
    assert_eq!(capacity, Default::default());
}

#[test]
fn test_percentile_reads_network_history() {
    let (store, service) = service(FixedResolver::none());
    for (t, received) in [10u64, 20, 30, 40, 50].into_iter().enumerate() {
        store.record_network(NetworkSample::measured(t as i64, NetworkRate::new(received, 0)));
    }

    let result = service.network_percentile(PercentileQuery::new(5, 50));
    assert_eq!(result.received_percentile, 30);
    assert_eq!(result.samples, 5);

    let result = service.network_percentile(PercentileQuery::default());
    assert_eq!(result.window, 60);
    assert_eq!(result.percentile, 95);
    assert_eq!(result.samples, 5);
    // floor(0.95 * 4) = 3
    assert_eq!(result.received_percentile, 40);
}
