//! Startup seeding tests

use crate::test_utils::clocks::TokioClock;
use crate::test_utils::fakes::{FixedResolver, ScriptedProbe};
use crate::test_utils::fixtures::zero_placeholder;
use hms_application::seeding::heuristic_bytes_per_sec;
use hms_application::{InstantRateEstimator, MetricsStore, StartupSeeder};
use hms_domain::value_objects::{NetworkRate, NetworkSample};
use std::sync::Arc;
use std::time::Duration;

fn seeder(probe: &Arc<ScriptedProbe>, speed_mbps: Option<u64>) -> (Arc<MetricsStore>, StartupSeeder) {
    let store = Arc::new(MetricsStore::new(60));
    let resolver = Arc::new(FixedResolver::new(Some("eth0"), speed_mbps));
    let clock = Arc::new(TokioClock::new());
    let instant = Arc::new(InstantRateEstimator::new(
        probe.clone(),
        resolver.clone(),
        clock.clone(),
        Duration::from_millis(350),
    ));
    let seeder = StartupSeeder::new(
        store.clone(),
        resolver,
        instant,
        clock,
        3,
        Duration::from_millis(120),
    );
    (store, seeder)
}

#[test]
fn test_heuristic_rate_floor_and_link_share() {
    assert_eq!(heuristic_bytes_per_sec(None), 102_400);
    assert_eq!(heuristic_bytes_per_sec(Some(0)), 102_400);
    // 1% of 10 Mbit/s is below the floor
    assert_eq!(heuristic_bytes_per_sec(Some(10)), 102_400);
    // 1% of 1 Gbit/s = 1_250_000 bytes/s
    assert_eq!(heuristic_bytes_per_sec(Some(1000)), 1_250_000);
}

#[tokio::test(start_paused = true)]
async fn test_seed_on_empty_history() {
    let probe = Arc::new(ScriptedProbe::with_eth0(0, 0));
    let (store, seeder) = seeder(&probe, Some(1000));

    let seeded = seeder.seed_heuristic().await.unwrap();

    assert!(seeded.is_heuristic);
    assert_eq!(seeded.received_rate, 1_250_000);
    assert_eq!(seeded.sent_rate, 0);
    assert_eq!(store.network_history(), vec![seeded]);
}

#[tokio::test(start_paused = true)]
async fn test_seed_after_zero_entry() {
    let probe = Arc::new(ScriptedProbe::with_eth0(0, 0));
    let (store, seeder) = seeder(&probe, None);
    store.record_network(zero_placeholder(0));

    let seeded = seeder.seed_heuristic().await.unwrap();
    assert_eq!(seeded.received_rate, 102_400);
    assert_eq!(store.network_history().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_no_seed_when_traffic_already_known() {
    let probe = Arc::new(ScriptedProbe::with_eth0(0, 0));
    let (store, seeder) = seeder(&probe, None);
    store.record_network(NetworkSample::measured(0, NetworkRate::new(10, 0)));

    assert!(seeder.seed_heuristic().await.is_none());
    assert_eq!(store.network_history().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_replace_purges_placeholder() {
    let probe = Arc::new(ScriptedProbe::with_eth0(0, 0));
    probe.set_network_step(350, 0);
    let (store, seeder) = seeder(&probe, None);
    seeder.seed_heuristic().await;

    let replacement = seeder.replace_heuristic().await.unwrap();

    assert!(!replacement.is_heuristic);
    assert_eq!(replacement.received_rate, 1000);
    let history = store.network_history();
    assert_eq!(history, vec![replacement]);
}

#[tokio::test(start_paused = true)]
async fn test_replace_keeps_placeholder_when_link_idle() {
    let probe = Arc::new(ScriptedProbe::with_eth0(0, 0));
    let (store, seeder) = seeder(&probe, None);
    seeder.seed_heuristic().await;

    assert!(seeder.replace_heuristic().await.is_none());
    assert!(store.network_only_heuristic());
}
