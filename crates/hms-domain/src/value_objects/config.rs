//! Sampling configuration value object

use crate::constants::{
    COLLECT_INTERVAL_MS, COLLECTOR_START_DELAY_MS, DISK_SAMPLE_INTERVAL_MS, EMA_ALPHA,
    HISTORY_CAPACITY, INSTANT_SAMPLE_DELAY_MS, NETWORK_SAMPLE_INTERVAL_MS, SEED_ATTEMPTS,
    SEED_PAUSE_MS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cadences, capacity and smoothing settings for the sampling pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Samples retained per metric kind
    pub history_capacity: usize,
    /// Collector tick period
    pub collect_interval_ms: u64,
    /// Network sampler tick period
    pub network_interval_ms: u64,
    /// Minimum spacing between disk probes
    pub disk_interval_ms: u64,
    /// Delay between the two reads of an instant estimate
    pub instant_delay_ms: u64,
    /// EMA weight of the newest raw rate
    pub ema_alpha: f64,
    /// Delay before the first collector tick
    pub collector_start_delay_ms: u64,
    /// Push a heuristic network placeholder at startup
    pub startup_seed: bool,
    /// Instant estimates taken while replacing the placeholder
    pub seed_attempts: usize,
    /// Pause between those estimates
    pub seed_pause_ms: u64,
}

/// Default sampling configuration using domain constants.
///
/// - `history_capacity`: `HISTORY_CAPACITY` (60)
/// - `collect_interval_ms` / `network_interval_ms`: 1000
/// - `disk_interval_ms`: 5000
/// - `ema_alpha`: 0.4
impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_CAPACITY,
            collect_interval_ms: COLLECT_INTERVAL_MS,
            network_interval_ms: NETWORK_SAMPLE_INTERVAL_MS,
            disk_interval_ms: DISK_SAMPLE_INTERVAL_MS,
            instant_delay_ms: INSTANT_SAMPLE_DELAY_MS,
            ema_alpha: EMA_ALPHA,
            collector_start_delay_ms: COLLECTOR_START_DELAY_MS,
            startup_seed: true,
            seed_attempts: SEED_ATTEMPTS,
            seed_pause_ms: SEED_PAUSE_MS,
        }
    }
}

impl SamplingConfig {
    pub fn collect_interval(&self) -> Duration {
        Duration::from_millis(self.collect_interval_ms)
    }

    pub fn network_interval(&self) -> Duration {
        Duration::from_millis(self.network_interval_ms)
    }

    pub fn instant_delay(&self) -> Duration {
        Duration::from_millis(self.instant_delay_ms)
    }

    pub fn collector_start_delay(&self) -> Duration {
        Duration::from_millis(self.collector_start_delay_ms)
    }

    pub fn seed_pause(&self) -> Duration {
        Duration::from_millis(self.seed_pause_ms)
    }
}
