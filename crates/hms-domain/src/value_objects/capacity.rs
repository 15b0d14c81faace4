//! Capacity and percentile value objects

use crate::constants::{
    PERCENTILE_DEFAULT, PERCENTILE_DEFAULT_WINDOW, PERCENTILE_MAX, PERCENTILE_MIN,
};
use serde::{Deserialize, Serialize};

/// Parameters of a network percentile query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentileQuery {
    /// Number of most recent samples to consider
    pub window: usize,
    /// Percentile to select
    pub percentile: u8,
}

/// Default query: last 60 samples, 95th percentile.
impl Default for PercentileQuery {
    fn default() -> Self {
        Self {
            window: PERCENTILE_DEFAULT_WINDOW,
            percentile: PERCENTILE_DEFAULT,
        }
    }
}

impl PercentileQuery {
    /// Create a query; values are clamped by [`PercentileQuery::normalized`]
    pub fn new(window: usize, percentile: u8) -> Self {
        Self { window, percentile }
    }

    /// Window clamped to at least 1, percentile clamped to `[1, 99]`
    pub fn normalized(self) -> Self {
        Self {
            window: self.window.max(1),
            percentile: self.percentile.clamp(PERCENTILE_MIN, PERCENTILE_MAX),
        }
    }
}

/// Nearest-rank percentiles over recent network samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPercentile {
    /// Window actually used
    pub window: usize,
    /// Percentile actually used
    pub percentile: u8,
    /// Percentile of received bytes per second
    pub received_percentile: u64,
    /// Percentile of sent bytes per second
    pub sent_percentile: u64,
    /// Percentile of the per-sample larger direction
    pub max_percentile: u64,
    /// Number of samples considered
    pub samples: usize,
}

/// What is known about the default interface's capacity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkCapacity {
    /// Interface carrying the default route
    pub default_interface: Option<String>,
    /// Nominal link speed in megabits per second
    pub interface_speed_mbps: Option<u64>,
    /// Usable bytes per second inferred from the link speed
    pub inferred_cap_bytes_per_sec: Option<u64>,
}
