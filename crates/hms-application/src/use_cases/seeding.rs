//! Startup seeding
//!
//! Right after startup there is no network measurement, and a run of zeros
//! would read as "idle link". The seeder records one heuristic placeholder,
//! then tries to replace it with a real instant estimate as soon as possible.

use crate::samplers::InstantRateEstimator;
use crate::store::MetricsStore;
use hms_domain::constants::{HEURISTIC_LINK_SHARE, HEURISTIC_MIN_BYTES_PER_SEC};
use hms_domain::ports::{Clock, InterfaceResolver};
use hms_domain::value_objects::{NetworkRate, NetworkSample};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Placeholder receive rate for a link of `speed_mbps`
///
/// 1% of decimal line rate, never below 100 KiB/s.
pub fn heuristic_bytes_per_sec(speed_mbps: Option<u64>) -> u64 {
    let share = speed_mbps
        .filter(|mbps| *mbps > 0)
        .map_or(0, |mbps| (mbps as f64 * 1_000_000.0 / 8.0 * HEURISTIC_LINK_SHARE).round() as u64);
    share.max(HEURISTIC_MIN_BYTES_PER_SEC)
}

pub struct StartupSeeder {
    store: Arc<MetricsStore>,
    resolver: Arc<dyn InterfaceResolver>,
    instant: Arc<InstantRateEstimator>,
    clock: Arc<dyn Clock>,
    attempts: usize,
    pause: Duration,
}

impl StartupSeeder {
    pub fn new(
        store: Arc<MetricsStore>,
        resolver: Arc<dyn InterfaceResolver>,
        instant: Arc<InstantRateEstimator>,
        clock: Arc<dyn Clock>,
        attempts: usize,
        pause: Duration,
    ) -> Self {
        Self {
            store,
            resolver,
            instant,
            clock,
            attempts,
            pause,
        }
    }

    /// Record a heuristic placeholder if network history is empty or its
    /// latest entry is all-zero
    pub async fn seed_heuristic(&self) -> Option<NetworkSample> {
        if self.store.latest_network().is_some_and(|s| !s.is_zero()) {
            return None;
        }

        let speed = match self.resolver.default_interface().await {
            Some(interface) => self.resolver.interface_speed_mbps(&interface).await,
            None => None,
        };
        let sample = NetworkSample::heuristic(
            self.clock.now_millis(),
            NetworkRate::new(heuristic_bytes_per_sec(speed), 0),
        );
        self.store.record_network(sample);
        debug!(
            received = sample.received_rate,
            speed_mbps = ?speed,
            "Seeded heuristic network placeholder"
        );
        Some(sample)
    }

    /// Replace placeholders with the best of several instant estimates
    ///
    /// Records nothing if every estimate was zero or failed.
    pub async fn replace_heuristic(&self) -> Option<NetworkSample> {
        let best = self.instant.best_of(self.attempts, self.pause).await?;
        let sample = NetworkSample::measured(self.clock.now_millis(), best);
        self.store.record_network(sample);
        info!(
            received = sample.received_rate,
            sent = sample.sent_rate,
            "Replaced heuristic network placeholder with a measurement"
        );
        Some(sample)
    }
}
