//! Metrics runtime lifecycle
//!
//! Wires providers, the store, both samplers, the collector and the startup
//! seeder together, runs them as cancellable background tasks, and stops them
//! on shutdown.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let runtime = MetricsRuntime::start(&config).await?;
//! let snapshot = runtime.snapshot();
//! runtime.shutdown().await;
//! ```

use crate::bootstrap::Providers;
use crate::config::{AppConfig, validate_sampling_config};
use crate::constants::SHUTDOWN_TIMEOUT;
use futures::future::join_all;
use hms_application::{
    CapacityService, DiskIoSampler, InstantRateEstimator, MetricsCollector, MetricsStore,
    NetworkRateSampler, PeriodicTask, SnapshotAssembler, StartupSeeder,
};
use hms_domain::error::Result;
use hms_domain::value_objects::{
    MetricsSnapshot, NetworkCapacity, NetworkPercentile, PercentileQuery, SamplingConfig,
};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};

/// A running sampling pipeline
pub struct MetricsRuntime {
    sampling: SamplingConfig,
    provider: String,
    store: Arc<MetricsStore>,
    snapshots: SnapshotAssembler,
    capacity: CapacityService,
    collector: Arc<MetricsCollector>,
    cancel_token: CancellationToken,
    task_tracker: TaskTracker,
    tasks: Vec<PeriodicTask>,
}

impl MetricsRuntime {
    /// Build providers from `config` and start sampling
    pub async fn start(config: &AppConfig) -> Result<Self> {
        let providers = Providers::from_config(&config.probe)?;
        Self::start_with(config.sampling.clone(), providers).await
    }

    /// Start sampling on the given providers
    ///
    /// The network and disk samplers start immediately. The collector's first
    /// tick waits `collector_start_delay_ms` so the network sampler already
    /// has a baseline. With `startup_seed` on, a heuristic placeholder is
    /// recorded before this returns and replaced in the background.
    pub async fn start_with(sampling: SamplingConfig, providers: Providers) -> Result<Self> {
        validate_sampling_config(&sampling)?;

        let Providers {
            counters,
            host,
            resolver,
            clock,
        } = providers;
        let provider = counters.provider_name().to_string();

        let store = Arc::new(MetricsStore::new(sampling.history_capacity));
        let network = Arc::new(NetworkRateSampler::new(
            Arc::clone(&counters),
            Arc::clone(&resolver),
            Arc::clone(&clock),
            sampling.ema_alpha,
        ));
        let disk = Arc::new(DiskIoSampler::new(
            Arc::clone(&counters),
            Arc::clone(&clock),
            sampling.disk_interval_ms,
        ));
        let instant = Arc::new(InstantRateEstimator::new(
            Arc::clone(&counters),
            Arc::clone(&resolver),
            Arc::clone(&clock),
            sampling.instant_delay(),
        ));
        let collector = Arc::new(MetricsCollector::new(
            Arc::clone(&store),
            Arc::clone(&host),
            Arc::clone(&counters),
            Arc::clone(&network),
            Arc::clone(&disk),
            Arc::clone(&instant),
            Arc::clone(&clock),
        ));

        let cancel_token = CancellationToken::new();
        let task_tracker = TaskTracker::new();

        if sampling.startup_seed {
            let seeder = StartupSeeder::new(
                Arc::clone(&store),
                Arc::clone(&resolver),
                Arc::clone(&instant),
                Arc::clone(&clock),
                sampling.seed_attempts,
                sampling.seed_pause(),
            );
            seeder.seed_heuristic().await;

            let token = cancel_token.child_token();
            task_tracker.spawn(async move {
                tokio::select! {
                    () = token.cancelled() => debug!("Startup seeding cancelled"),
                    _ = seeder.replace_heuristic() => {}
                }
            });
        }

        let tasks = vec![
            network.start(sampling.network_interval(), cancel_token.child_token()),
            disk.start(
                Duration::from_millis(sampling.disk_interval_ms),
                cancel_token.child_token(),
            ),
            collector.start(
                sampling.collector_start_delay(),
                sampling.collect_interval(),
                cancel_token.child_token(),
            ),
        ];

        info!(
            provider = %provider,
            history_capacity = sampling.history_capacity,
            collect_interval_ms = sampling.collect_interval_ms,
            "Metrics runtime started"
        );

        Ok(Self {
            snapshots: SnapshotAssembler::new(Arc::clone(&store), host),
            capacity: CapacityService::new(Arc::clone(&store), resolver),
            sampling,
            provider,
            store,
            collector,
            cancel_token,
            task_tracker,
            tasks,
        })
    }

    /// Current view of every metric kind
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.snapshots.snapshot()
    }

    /// Nearest-rank percentiles over the most recent network samples
    pub fn network_percentile(&self, query: PercentileQuery) -> NetworkPercentile {
        self.capacity.network_percentile(query)
    }

    /// Default interface, its link speed and the inferred usable capacity
    pub async fn network_capacity(&self) -> NetworkCapacity {
        self.capacity.network_capacity().await
    }

    pub fn store(&self) -> &Arc<MetricsStore> {
        &self.store
    }

    pub fn sampling(&self) -> &SamplingConfig {
        &self.sampling
    }

    pub fn provider_name(&self) -> &str {
        &self.provider
    }

    /// Check if shutdown has been initiated
    pub fn is_shutting_down(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Stop every task and wait for it, giving up after the default timeout
    ///
    /// Returns `true` if everything finished in time.
    pub async fn shutdown(self) -> bool {
        self.shutdown_with_timeout(SHUTDOWN_TIMEOUT).await
    }

    /// Stop every task and wait up to `timeout`
    ///
    /// 1. Cancels the shared token (periodic tasks and the seeder stop)
    /// 2. Waits for the periodic tasks and the seeder
    /// 3. Waits for any authoritative phase still in flight
    pub async fn shutdown_with_timeout(self, timeout: Duration) -> bool {
        info!(
            "Initiating graceful shutdown with {}s timeout, {} periodic tasks",
            timeout.as_secs(),
            self.tasks.len()
        );

        let Self {
            cancel_token,
            task_tracker,
            tasks,
            collector,
            ..
        } = self;
        cancel_token.cancel();
        task_tracker.close();

        let drained = async move {
            join_all(tasks.into_iter().map(PeriodicTask::shutdown)).await;
            task_tracker.wait().await;
            collector.drain().await;
        };

        if tokio::time::timeout(timeout, drained).await.is_ok() {
            info!("All metrics tasks completed cleanly");
            true
        } else {
            warn!("Timeout reached, metrics tasks still active");
            false
        }
    }
}

impl std::fmt::Debug for MetricsRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsRuntime")
            .field("provider", &self.provider)
            .field("tasks", &self.tasks.len())
            .field("shutting_down", &self.is_shutting_down())
            .finish_non_exhaustive()
    }
}
