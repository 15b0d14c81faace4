//! On-demand network rate estimate
//!
//! Two counter reads a short delay apart. Used at cold start before the
//! background sampler has two reads of its own, and to double-check an
//! all-zero reading while history holds only placeholders.

use super::network::select_counters;
use crate::domain_services::network_rate;
use hms_domain::error::Result;
use hms_domain::ports::{Clock, CounterProbe, InterfaceResolver};
use hms_domain::value_objects::{CounterSnapshot, NetworkCounters, NetworkRate};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub struct InstantRateEstimator {
    probe: Arc<dyn CounterProbe>,
    resolver: Arc<dyn InterfaceResolver>,
    clock: Arc<dyn Clock>,
    delay: Duration,
}

impl InstantRateEstimator {
    pub fn new(
        probe: Arc<dyn CounterProbe>,
        resolver: Arc<dyn InterfaceResolver>,
        clock: Arc<dyn Clock>,
        delay: Duration,
    ) -> Self {
        Self {
            probe,
            resolver,
            clock,
            delay,
        }
    }

    async fn read(&self, preferred: Option<&str>) -> Result<CounterSnapshot<NetworkCounters>> {
        let interfaces = self.probe.read_network_counters().await?;
        Ok(CounterSnapshot::new(
            select_counters(&interfaces, preferred),
            self.clock.now_millis(),
        ))
    }

    /// Rate between two reads `delay` apart
    ///
    /// Both reads use the same interface selection.
    pub async fn estimate(&self) -> Result<NetworkRate> {
        let preferred = self.resolver.default_interface().await;
        let first = self.read(preferred.as_deref()).await?;
        tokio::time::sleep(self.delay).await;
        let second = self.read(preferred.as_deref()).await?;
        Ok(network_rate(&first, &second))
    }

    /// Run `attempts` estimates `pause` apart and keep the largest total
    ///
    /// All-zero and failed estimates never win; `None` if nothing non-zero
    /// was seen.
    pub async fn best_of(&self, attempts: usize, pause: Duration) -> Option<NetworkRate> {
        let mut best: Option<NetworkRate> = None;
        for attempt in 0..attempts {
            if attempt > 0 {
                tokio::time::sleep(pause).await;
            }
            match self.estimate().await {
                Ok(rate) if !rate.is_zero() => {
                    if best.is_none_or(|b| rate.total() > b.total()) {
                        best = Some(rate);
                    }
                }
                Ok(_) => debug!(attempt, "Instant estimate was zero"),
                Err(e) => warn!(attempt, error = %e, "Instant estimate failed"),
            }
        }
        best
    }
}

impl std::fmt::Debug for InstantRateEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstantRateEstimator")
            .field("provider", &self.probe.provider_name())
            .field("delay", &self.delay)
            .finish()
    }
}
