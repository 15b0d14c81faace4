//! Disk I/O sampler
//!
//! Disk counters are more expensive to read than network counters, so the
//! sampler probes at most once per `min_interval_ms` and answers every other
//! call from its cache. Rates are not smoothed.

use crate::domain_services::disk_rate;
use crate::scheduler::PeriodicTask;
use hms_domain::ports::{Clock, CounterProbe};
use hms_domain::value_objects::{CounterSnapshot, DiskCounters, DiskIoSample, TimestampMs};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct DiskCache {
    last_sample_at: Option<TimestampMs>,
    last_result: DiskIoSample,
    previous: Option<CounterSnapshot<DiskCounters>>,
}

/// Throttled, cached disk throughput sampler
pub struct DiskIoSampler {
    probe: Arc<dyn CounterProbe>,
    clock: Arc<dyn Clock>,
    min_interval_ms: i64,
    cache: Mutex<DiskCache>,
    /// Serializes probing so concurrent callers share one probe
    gate: tokio::sync::Mutex<()>,
}

impl DiskIoSampler {
    pub fn new(probe: Arc<dyn CounterProbe>, clock: Arc<dyn Clock>, min_interval_ms: u64) -> Self {
        Self {
            probe,
            clock,
            min_interval_ms: i64::try_from(min_interval_ms).unwrap_or(i64::MAX),
            cache: Mutex::new(DiskCache::default()),
            gate: tokio::sync::Mutex::new(()),
        }
    }

    fn cache(&self) -> MutexGuard<'_, DiskCache> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The cached result if it is still fresh at `now`
    fn fresh(&self, now: TimestampMs) -> Option<DiskIoSample> {
        let cache = self.cache();
        cache
            .last_sample_at
            .filter(|at| now.saturating_sub(*at) < self.min_interval_ms)
            .map(|_| cache.last_result)
    }

    /// Current disk rate, probing only if the cache is stale
    ///
    /// A failed probe leaves the cache untouched and returns the cached value.
    pub async fn current(&self) -> DiskIoSample {
        if let Some(cached) = self.fresh(self.clock.now_millis()) {
            return cached;
        }

        let _gate = self.gate.lock().await;
        // Another caller may have probed while we waited
        if let Some(cached) = self.fresh(self.clock.now_millis()) {
            return cached;
        }

        match self.probe.read_disk_counters().await {
            Ok(counters) => {
                let current = CounterSnapshot::new(counters, self.clock.now_millis());
                let mut cache = self.cache();
                let sample = match cache.previous {
                    Some(previous) => {
                        DiskIoSample::new(current.timestamp, disk_rate(&previous, &current))
                    }
                    None => {
                        debug!("Disk baseline established");
                        DiskIoSample::default().at(current.timestamp)
                    }
                };
                cache.previous = Some(current);
                cache.last_sample_at = Some(current.timestamp);
                cache.last_result = sample;
                sample
            }
            Err(e) => {
                warn!(
                    provider = self.probe.provider_name(),
                    error = %e,
                    "Disk counter read failed, keeping cached rate"
                );
                self.cached()
            }
        }
    }

    /// Last computed result without probing
    pub fn cached(&self) -> DiskIoSample {
        self.cache().last_result
    }

    /// Refresh the cache every `period` until `token` is cancelled
    pub fn start(self: &Arc<Self>, period: Duration, token: CancellationToken) -> PeriodicTask {
        let sampler = Arc::clone(self);
        PeriodicTask::spawn("disk-sampler", period, token, move || {
            let sampler = Arc::clone(&sampler);
            async move {
                sampler.current().await;
            }
        })
    }
}

impl std::fmt::Debug for DiskIoSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskIoSampler")
            .field("provider", &self.probe.provider_name())
            .field("min_interval_ms", &self.min_interval_ms)
            .field("cached", &self.cached())
            .finish()
    }
}
