//! Metrics collector
//!
//! One tick writes twice. The quick phase never waits: it records memory from
//! a direct read and reuses the latest known value for every other kind. The
//! authoritative phase then probes load, disk and network concurrently and
//! records corrected samples stamped at resolution time.
//!
//! The authoritative phase runs on its own task so it never delays the next
//! tick. While one is still in flight, later ticks write only their quick
//! phase. Probe failures are logged per kind and never reach the caller.

use crate::samplers::{DiskIoSampler, InstantRateEstimator, NetworkRateSampler};
use crate::scheduler::PeriodicTask;
use crate::store::MetricsStore;
use hms_domain::ports::{Clock, CounterProbe, HostStatsProbe};
use hms_domain::value_objects::{
    CpuLoadSample, LoadAverage, MemorySample, NetworkRate, NetworkSample, TimestampMs,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};

/// Clears the in-flight flag when the authoritative phase ends, even on panic
struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Fixed-cadence writer of every history buffer
pub struct MetricsCollector {
    store: Arc<MetricsStore>,
    host: Arc<dyn HostStatsProbe>,
    probe: Arc<dyn CounterProbe>,
    network: Arc<NetworkRateSampler>,
    disk: Arc<DiskIoSampler>,
    instant: Arc<InstantRateEstimator>,
    clock: Arc<dyn Clock>,
    in_flight: Arc<AtomicBool>,
    phases: TaskTracker,
}

impl MetricsCollector {
    pub fn new(
        store: Arc<MetricsStore>,
        host: Arc<dyn HostStatsProbe>,
        probe: Arc<dyn CounterProbe>,
        network: Arc<NetworkRateSampler>,
        disk: Arc<DiskIoSampler>,
        instant: Arc<InstantRateEstimator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            host,
            probe,
            network,
            disk,
            instant,
            clock,
            in_flight: Arc::new(AtomicBool::new(false)),
            phases: TaskTracker::new(),
        }
    }

    /// Whether an authoritative phase is currently running
    pub fn is_collecting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// One collector tick
    ///
    /// Writes the quick phase synchronously, then spawns the authoritative
    /// phase and returns its handle. Returns `None` when the previous
    /// authoritative phase is still running and this tick was quick-only.
    pub fn collect_metrics(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        self.quick_phase();

        let Some(guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("Previous authoritative phase still running, quick phase only");
            return None;
        };
        let collector = Arc::clone(self);
        Some(self.phases.spawn(async move {
            let _guard = guard;
            collector.authoritative_phase().await;
        }))
    }

    /// Wait for any authoritative phase still in flight
    pub async fn drain(&self) {
        self.phases.close();
        self.phases.wait().await;
    }

    /// Record one provisional sample per kind without waiting on any probe
    pub fn quick_phase(&self) {
        let now = self.clock.now_millis();

        let percent = self.read_memory_percent().unwrap_or_else(|| {
            debug!("Repeating last memory value");
            self.store.latest_memory().map_or(0, |m| m.percent)
        });
        self.store.push_memory(MemorySample::new(now, percent));

        let load = match self.store.latest_cpu_load() {
            Some(latest) => latest.load(),
            None => self.host.load_average_now().unwrap_or_else(|e| {
                warn!(error = %e, "Load average unavailable, recording zero");
                LoadAverage::default()
            }),
        };
        self.store.push_cpu_load(CpuLoadSample::new(now, load));

        self.store.push_disk_io(self.disk.cached().at(now));

        let network = self
            .network
            .current_raw()
            .or_else(|| self.store.latest_network())
            .map(|sample| sample.at(now))
            .unwrap_or_else(|| NetworkSample::heuristic(now, NetworkRate::default()));
        self.store.record_network(network);
    }

    /// Probe everything concurrently and record the corrected samples
    pub async fn authoritative_phase(&self) {
        let (load, disk, reading) = tokio::join!(
            self.probe.read_load_average(),
            self.disk.current(),
            async { self.network.reading() },
        );
        let now = self.clock.now_millis();

        match load {
            Ok(load) => self.store.push_cpu_load(CpuLoadSample::new(now, load)),
            Err(e) => warn!(
                provider = self.probe.provider_name(),
                error = %e,
                "Load average read failed, keeping quick-phase sample"
            ),
        }

        if let Some(percent) = self.read_memory_percent() {
            self.store.push_memory(MemorySample::new(now, percent));
        }

        self.store.push_disk_io(disk.at(now));

        let measured = reading.smoothed.or(reading.raw).map(|s| s.rate());
        if let Some(network) = self.reconcile_network(measured, now).await {
            self.store.record_network(network);
        }
    }

    /// Decide what network sample the authoritative phase records
    ///
    /// An all-zero or missing reading while history holds only placeholders
    /// gets one instant estimate before the zero is accepted. `None` when
    /// there is neither a sampler reading nor an estimate, leaving the
    /// quick-phase entry as the only record for this tick.
    async fn reconcile_network(
        &self,
        measured: Option<NetworkRate>,
        now: TimestampMs,
    ) -> Option<NetworkSample> {
        let mut rate = measured;
        let mut timestamp = now;

        if rate.is_none_or(|r| r.is_zero()) && self.store.network_only_heuristic() {
            match self.instant.estimate().await {
                Ok(estimate) => {
                    if !estimate.is_zero() || rate.is_none() {
                        debug!(
                            received = estimate.received,
                            sent = estimate.sent,
                            "Instant estimate used for network sample"
                        );
                        rate = Some(estimate);
                        timestamp = self.clock.now_millis();
                    }
                }
                Err(e) => warn!(error = %e, "Instant network estimate failed"),
            }
        }

        rate.map(|rate| NetworkSample::measured(timestamp, rate))
    }

    fn read_memory_percent(&self) -> Option<u32> {
        match self.host.memory_usage() {
            Ok(usage) => Some(usage.percent_used()),
            Err(e) => {
                warn!(error = %e, "Memory read failed");
                None
            }
        }
    }

    /// Run [`collect_metrics`](Self::collect_metrics) every `period`, starting
    /// after `start_delay`
    pub fn start(
        self: &Arc<Self>,
        start_delay: Duration,
        period: Duration,
        token: CancellationToken,
    ) -> PeriodicTask {
        let collector = Arc::clone(self);
        PeriodicTask::spawn_delayed("collector", start_delay, period, token, move || {
            collector.collect_metrics();
            async {}
        })
    }
}

impl std::fmt::Debug for MetricsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsCollector")
            .field("provider", &self.probe.provider_name())
            .field("collecting", &self.is_collecting())
            .finish()
    }
}
