//! MetricsRuntime lifecycle tests
//!
//! Time is paused; the runtime's clock follows Tokio's clock so rates are
//! computed over virtual time.

use async_trait::async_trait;
use hms_domain::error::Result;
use hms_domain::ports::{Clock, CounterProbe, InterfaceCounters};
use hms_domain::value_objects::{
    DiskCounters, LoadAverage, NetworkCounters, PercentileQuery, SamplingConfig, TimestampMs,
};
use hms_infrastructure::bootstrap::Providers;
use hms_infrastructure::config::{AppConfig, ProbeProvider};
use hms_infrastructure::runtime::MetricsRuntime;
use hms_providers::{NullHostStats, NullInterfaceResolver};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

const T0: TimestampMs = 1_700_000_000_000;

struct TokioClock {
    origin: tokio::time::Instant,
}

impl Clock for TokioClock {
    fn now_millis(&self) -> TimestampMs {
        T0 + self.origin.elapsed().as_millis() as TimestampMs
    }
}

/// Counters that grow by a fixed step on every read
#[derive(Default)]
struct SteadyProbe {
    reads: AtomicU64,
}

#[async_trait]
impl CounterProbe for SteadyProbe {
    async fn read_network_counters(&self) -> Result<InterfaceCounters> {
        let n = self.reads.fetch_add(1, Ordering::SeqCst) + 1;
        let mut counters = InterfaceCounters::new();
        counters.insert("eth0".to_string(), NetworkCounters::new(n * 10_000, n * 5_000));
        counters.insert("lo".to_string(), NetworkCounters::new(n * 1_000_000, n * 1_000_000));
        Ok(counters)
    }

    async fn read_disk_counters(&self) -> Result<DiskCounters> {
        let n = self.reads.load(Ordering::SeqCst);
        Ok(DiskCounters::new(n * 4096, n * 8192))
    }

    async fn read_load_average(&self) -> Result<LoadAverage> {
        Ok(LoadAverage::new(1.0, 0.5, 0.25))
    }

    fn provider_name(&self) -> &str {
        "steady"
    }
}

fn steady_providers() -> Providers {
    Providers::new(
        Arc::new(SteadyProbe::default()),
        Arc::new(NullHostStats::new()),
        Arc::new(NullInterfaceResolver::new()),
    )
    .with_clock(Arc::new(TokioClock {
        origin: tokio::time::Instant::now(),
    }))
}

#[tokio::test(start_paused = true)]
async fn test_start_seeds_heuristic_placeholder() {
    let runtime = MetricsRuntime::start_with(SamplingConfig::default(), steady_providers())
        .await
        .expect("runtime starts");

    let history = runtime.store().network_history();
    assert_eq!(history.len(), 1);
    assert!(history[0].is_heuristic);
    // No default interface known: the 100 KiB/s floor
    assert_eq!(history[0].received_rate, 100 * 1024);
    assert_eq!(history[0].sent_rate, 0);

    assert!(runtime.shutdown().await);
}

#[tokio::test(start_paused = true)]
async fn test_without_seeding_history_starts_empty() {
    let sampling = SamplingConfig {
        startup_seed: false,
        ..SamplingConfig::default()
    };
    let runtime = MetricsRuntime::start_with(sampling, steady_providers())
        .await
        .expect("runtime starts");

    assert!(runtime.store().network_history().is_empty());
    assert!(runtime.shutdown().await);
}

#[tokio::test(start_paused = true)]
async fn test_pipeline_fills_every_kind() {
    let runtime = MetricsRuntime::start_with(SamplingConfig::default(), steady_providers())
        .await
        .expect("runtime starts");
    assert_eq!(runtime.provider_name(), "steady");

    // Past the collector start delay plus a few ticks
    tokio::time::sleep(Duration::from_millis(6_500)).await;

    let snapshot = runtime.snapshot();
    assert!(!snapshot.cpu_load.history.is_empty());
    assert_eq!(snapshot.cpu_load.current, LoadAverage::new(1.0, 0.5, 0.25));
    assert!(!snapshot.memory.history.is_empty());
    assert!(!snapshot.disk_io.history.is_empty());
    assert!(snapshot.network_traffic.current.received_rate > 0);
    // A genuine measurement purged the placeholder
    assert!(snapshot.network_traffic.history.iter().all(|s| !s.is_heuristic));
    assert_eq!(runtime.store().network_heuristic_count(), 0);

    let percentile = runtime.network_percentile(PercentileQuery::new(500, 100));
    assert_eq!(percentile.percentile, 99);
    assert!(percentile.samples > 0);
    assert!(percentile.received_percentile > 0);

    assert!(runtime.shutdown().await);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_sampling() {
    let runtime = MetricsRuntime::start_with(SamplingConfig::default(), steady_providers())
        .await
        .expect("runtime starts");
    tokio::time::sleep(Duration::from_millis(3_500)).await;
    let store = Arc::clone(runtime.store());

    assert!(runtime.shutdown().await);
    let cpu_samples = store.cpu_load_history().len();
    let network_samples = store.network_history().len();

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(store.cpu_load_history().len(), cpu_samples);
    assert_eq!(store.network_history().len(), network_samples);
}

#[tokio::test(start_paused = true)]
async fn test_network_capacity_unknown_without_default_interface() {
    let runtime = MetricsRuntime::start_with(SamplingConfig::default(), steady_providers())
        .await
        .expect("runtime starts");

    let capacity = runtime.network_capacity().await;
    assert_eq!(capacity.default_interface, None);
    assert_eq!(capacity.inferred_cap_bytes_per_sec, None);

    assert!(runtime.shutdown().await);
}

#[tokio::test]
async fn test_start_from_config_with_null_provider() {
    let mut config = AppConfig::default();
    config.probe.provider = ProbeProvider::Null;
    config.sampling.collector_start_delay_ms = 10;
    config.sampling.collect_interval_ms = 10;

    let runtime = MetricsRuntime::start(&config).await.expect("runtime starts");
    assert_eq!(runtime.provider_name(), "null");
    assert_eq!(runtime.sampling(), &config.sampling);

    let snapshot = runtime.snapshot();
    assert_eq!(snapshot.memory.total, 0);
    assert_eq!(snapshot.memory.current, 0);

    assert!(runtime.shutdown().await);
}

#[tokio::test]
async fn test_invalid_sampling_is_rejected() {
    let sampling = SamplingConfig {
        history_capacity: 0,
        ..SamplingConfig::default()
    };

    let err = MetricsRuntime::start_with(sampling, steady_providers())
        .await
        .expect_err("zero capacity");
    assert!(err.to_string().contains("History capacity"));
}
