//! Network rate sampler
//!
//! Periodically reads cumulative interface counters and turns successive reads
//! into raw and EMA-smoothed throughput. The first successful read only sets
//! the baseline. A failed read leaves the last good readings in place.

use crate::domain_services::{network_rate, smooth_network};
use crate::scheduler::PeriodicTask;
use arc_swap::ArcSwap;
use hms_domain::error::Result;
use hms_domain::ports::{Clock, CounterProbe, InterfaceCounters, InterfaceResolver};
use hms_domain::value_objects::{CounterSnapshot, NetworkCounters, NetworkRate, NetworkSample};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Latest readings published by the sampler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkReading {
    /// Rate between the last two reads
    pub raw: Option<NetworkSample>,
    /// EMA of the raw rates
    pub smoothed: Option<NetworkSample>,
}

/// `lo`, or `lo` followed only by digits (`lo0` on BSD and macOS)
pub fn is_loopback(interface: &str) -> bool {
    interface
        .strip_prefix("lo")
        .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit()))
}

/// Counters to rate: the preferred interface if it has data, else the sum of
/// every non-loopback interface
pub fn select_counters(interfaces: &InterfaceCounters, preferred: Option<&str>) -> NetworkCounters {
    if let Some(counters) = preferred
        .filter(|name| !is_loopback(name))
        .and_then(|name| interfaces.get(name))
    {
        return *counters;
    }
    interfaces
        .iter()
        .filter(|(name, _)| !is_loopback(name))
        .map(|(_, counters)| *counters)
        .sum()
}

/// Background network throughput sampler
pub struct NetworkRateSampler {
    probe: Arc<dyn CounterProbe>,
    resolver: Arc<dyn InterfaceResolver>,
    clock: Arc<dyn Clock>,
    alpha: f64,
    baseline: Mutex<Option<CounterSnapshot<NetworkCounters>>>,
    reading: ArcSwap<NetworkReading>,
}

impl NetworkRateSampler {
    pub fn new(
        probe: Arc<dyn CounterProbe>,
        resolver: Arc<dyn InterfaceResolver>,
        clock: Arc<dyn Clock>,
        alpha: f64,
    ) -> Self {
        Self {
            probe,
            resolver,
            clock,
            alpha,
            baseline: Mutex::new(None),
            reading: ArcSwap::from_pointee(NetworkReading::default()),
        }
    }

    /// Take one counter read and update the readings
    ///
    /// Returns the new raw rate, or `None` when this read only set the baseline.
    pub async fn tick(&self) -> Result<Option<NetworkRate>> {
        let interfaces = self.probe.read_network_counters().await?;
        let preferred = self.resolver.default_interface().await;
        let current = CounterSnapshot::new(
            select_counters(&interfaces, preferred.as_deref()),
            self.clock.now_millis(),
        );

        let previous = self
            .baseline
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .replace(current);
        let Some(previous) = previous else {
            debug!(interface = ?preferred, "Network baseline established");
            return Ok(None);
        };

        let raw = network_rate(&previous, &current);
        let prior = self.reading.load().smoothed.map(|s| s.rate());
        let smoothed = smooth_network(raw, prior, self.alpha);

        self.reading.store(Arc::new(NetworkReading {
            raw: Some(NetworkSample::measured(current.timestamp, raw)),
            smoothed: Some(NetworkSample::measured(current.timestamp, smoothed)),
        }));
        Ok(Some(raw))
    }

    /// Both readings as one consistent pair
    pub fn reading(&self) -> NetworkReading {
        **self.reading.load()
    }

    pub fn current_raw(&self) -> Option<NetworkSample> {
        self.reading.load().raw
    }

    pub fn current_smoothed(&self) -> Option<NetworkSample> {
        self.reading.load().smoothed
    }

    /// Run [`tick`](Self::tick) every `period` until `token` is cancelled
    pub fn start(self: &Arc<Self>, period: Duration, token: CancellationToken) -> PeriodicTask {
        let sampler = Arc::clone(self);
        PeriodicTask::spawn("network-sampler", period, token, move || {
            let sampler = Arc::clone(&sampler);
            async move {
                if let Err(e) = sampler.tick().await {
                    warn!(
                        provider = sampler.probe.provider_name(),
                        error = %e,
                        "Network counter read failed, keeping last readings"
                    );
                }
            }
        })
    }
}

impl std::fmt::Debug for NetworkRateSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkRateSampler")
            .field("provider", &self.probe.provider_name())
            .field("alpha", &self.alpha)
            .field("reading", &self.reading())
            .finish()
    }
}
