//! Network rate sampler tests

use crate::test_utils::clocks::{ManualClock, T0};
use crate::test_utils::fakes::{FixedResolver, ScriptedProbe};
use hms_application::{NetworkRateSampler, is_loopback, select_counters};
use hms_domain::ports::InterfaceCounters;
use hms_domain::value_objects::{NetworkCounters, NetworkRate};
use std::sync::Arc;

fn sampler(probe: &Arc<ScriptedProbe>, clock: &Arc<ManualClock>, preferred: Option<&str>) -> NetworkRateSampler {
    NetworkRateSampler::new(
        probe.clone(),
        Arc::new(FixedResolver::new(preferred, None)),
        clock.clone(),
        0.4,
    )
}

#[test]
fn test_loopback_names() {
    assert!(is_loopback("lo"));
    assert!(is_loopback("lo0"));
    assert!(is_loopback("lo12"));
    assert!(!is_loopback("lan0"));
    assert!(!is_loopback("eth0"));
    assert!(!is_loopback("local"));
}

#[test]
fn test_select_prefers_default_interface() {
    let mut interfaces = InterfaceCounters::new();
    interfaces.insert("eth0".into(), NetworkCounters::new(100, 10));
    interfaces.insert("wlan0".into(), NetworkCounters::new(5, 5));
    interfaces.insert("lo".into(), NetworkCounters::new(9999, 9999));

    assert_eq!(
        select_counters(&interfaces, Some("eth0")),
        NetworkCounters::new(100, 10)
    );
    // Unknown preferred interface falls back to the non-loopback sum
    assert_eq!(
        select_counters(&interfaces, Some("eth9")),
        NetworkCounters::new(105, 15)
    );
    assert_eq!(select_counters(&interfaces, None), NetworkCounters::new(105, 15));
    // A loopback default route is never used
    assert_eq!(
        select_counters(&interfaces, Some("lo")),
        NetworkCounters::new(105, 15)
    );
}

#[tokio::test]
async fn test_first_tick_sets_baseline_only() {
    let probe = Arc::new(ScriptedProbe::with_eth0(1000, 1000));
    let clock = Arc::new(ManualClock::default());
    let sampler = sampler(&probe, &clock, Some("eth0"));

    assert_eq!(sampler.tick().await.unwrap(), None);
    assert!(sampler.current_raw().is_none());
    assert!(sampler.current_smoothed().is_none());
}

#[tokio::test]
async fn test_second_tick_publishes_raw_and_smoothed() {
    let probe = Arc::new(ScriptedProbe::with_eth0(0, 0));
    let clock = Arc::new(ManualClock::default());
    let sampler = sampler(&probe, &clock, Some("eth0"));

    sampler.tick().await.unwrap();
    probe.set_interface("eth0", 1000, 500);
    clock.advance(1000);

    let raw = sampler.tick().await.unwrap();
    assert_eq!(raw, Some(NetworkRate::new(1000, 500)));

    let reading = sampler.reading();
    let raw = reading.raw.unwrap();
    assert_eq!(raw.rate(), NetworkRate::new(1000, 500));
    assert_eq!(raw.timestamp, T0 + 1000);
    assert!(!raw.is_heuristic);
    // No prior smoothed value: smoothed equals raw
    assert_eq!(reading.smoothed.unwrap().rate(), NetworkRate::new(1000, 500));
}

#[tokio::test]
async fn test_smoothing_across_ticks() {
    let probe = Arc::new(ScriptedProbe::with_eth0(0, 0));
    let clock = Arc::new(ManualClock::default());
    let sampler = sampler(&probe, &clock, Some("eth0"));

    sampler.tick().await.unwrap();
    probe.set_interface("eth0", 1000, 0);
    clock.advance(1000);
    sampler.tick().await.unwrap();
    probe.set_interface("eth0", 3000, 0);
    clock.advance(1000);
    sampler.tick().await.unwrap();

    assert_eq!(sampler.current_raw().unwrap().received_rate, 2000);
    // 0.4 * 2000 + 0.6 * 1000
    assert_eq!(sampler.current_smoothed().unwrap().received_rate, 1400);
}

#[tokio::test]
async fn test_failed_tick_keeps_last_good_readings() {
    let probe = Arc::new(ScriptedProbe::with_eth0(0, 0));
    let clock = Arc::new(ManualClock::default());
    let sampler = sampler(&probe, &clock, Some("eth0"));

    sampler.tick().await.unwrap();
    probe.set_interface("eth0", 800, 0);
    clock.advance(1000);
    sampler.tick().await.unwrap();
    let before = sampler.reading();

    probe.fail_network(true);
    clock.advance(1000);
    assert!(sampler.tick().await.is_err());
    assert_eq!(sampler.reading(), before);

    // Recovery measures against the last good baseline
    probe.fail_network(false);
    probe.set_interface("eth0", 2800, 0);
    clock.advance(1000);
    sampler.tick().await.unwrap();
    assert_eq!(sampler.current_raw().unwrap().received_rate, 1000);
}

#[tokio::test]
async fn test_loopback_traffic_is_ignored() {
    let probe = Arc::new(ScriptedProbe::with_eth0(0, 0));
    let clock = Arc::new(ManualClock::default());
    let sampler = sampler(&probe, &clock, None);

    sampler.tick().await.unwrap();
    probe.set_interface("lo", 1_000_000, 1_000_000);
    clock.advance(1000);
    sampler.tick().await.unwrap();

    assert!(sampler.current_raw().unwrap().is_zero());
}
