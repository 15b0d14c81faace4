//! Timestamped history samples
//!
//! One sample type per metric kind. Samples are plain `Copy` values: once
//! recorded they are never mutated, only evicted.

use super::counters::{DiskRate, NetworkRate};
use super::host::LoadAverage;
use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch
pub type TimestampMs = i64;

/// CPU load averages at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuLoadSample {
    /// When the load was read
    pub timestamp: TimestampMs,
    /// One minute load average
    pub one_min: f64,
    /// Five minute load average
    pub five_min: f64,
    /// Fifteen minute load average
    pub fifteen_min: f64,
}

impl CpuLoadSample {
    /// Create a sample from a load average reading
    pub fn new(timestamp: TimestampMs, load: LoadAverage) -> Self {
        Self {
            timestamp,
            one_min: load.one_min,
            five_min: load.five_min,
            fifteen_min: load.fifteen_min,
        }
    }

    /// The load averages carried by this sample
    pub fn load(&self) -> LoadAverage {
        LoadAverage::new(self.one_min, self.five_min, self.fifteen_min)
    }
}

/// Memory utilisation at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySample {
    /// When memory was read
    pub timestamp: TimestampMs,
    /// Whole-number percentage of memory in use
    pub percent: u32,
}

impl MemorySample {
    /// Create a memory sample
    pub fn new(timestamp: TimestampMs, percent: u32) -> Self {
        Self { timestamp, percent }
    }
}

/// Disk throughput in bytes per second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskIoSample {
    /// When the rate was computed
    pub timestamp: TimestampMs,
    /// Bytes read per second
    pub read_rate: u64,
    /// Bytes written per second
    pub write_rate: u64,
}

impl DiskIoSample {
    /// Create a disk sample from a computed rate
    pub fn new(timestamp: TimestampMs, rate: DiskRate) -> Self {
        Self {
            timestamp,
            read_rate: rate.read,
            write_rate: rate.write,
        }
    }

    /// The rate carried by this sample
    pub fn rate(&self) -> DiskRate {
        DiskRate::new(self.read_rate, self.write_rate)
    }

    /// Same rate, restamped
    pub fn at(self, timestamp: TimestampMs) -> Self {
        Self { timestamp, ..self }
    }
}

/// Network throughput in bytes per second
///
/// `is_heuristic` marks a placeholder recorded while no real measurement
/// existed yet. Placeholders are purged as soon as a genuine non-zero
/// measurement is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSample {
    /// When the rate was computed
    pub timestamp: TimestampMs,
    /// Bytes received per second
    pub received_rate: u64,
    /// Bytes sent per second
    pub sent_rate: u64,
    /// Placeholder rather than a measurement
    pub is_heuristic: bool,
}

impl NetworkSample {
    /// A genuine measurement
    pub fn measured(timestamp: TimestampMs, rate: NetworkRate) -> Self {
        Self {
            timestamp,
            received_rate: rate.received,
            sent_rate: rate.sent,
            is_heuristic: false,
        }
    }

    /// A placeholder standing in for a measurement that does not exist yet
    pub fn heuristic(timestamp: TimestampMs, rate: NetworkRate) -> Self {
        Self {
            is_heuristic: true,
            ..Self::measured(timestamp, rate)
        }
    }

    /// The rate carried by this sample
    pub fn rate(&self) -> NetworkRate {
        NetworkRate::new(self.received_rate, self.sent_rate)
    }

    /// Same rate and flag, restamped
    pub fn at(self, timestamp: TimestampMs) -> Self {
        Self { timestamp, ..self }
    }

    /// Both directions are zero
    pub fn is_zero(&self) -> bool {
        self.received_rate == 0 && self.sent_rate == 0
    }

    /// A real, non-zero measurement (the kind that evicts placeholders)
    pub fn is_genuine_traffic(&self) -> bool {
        !self.is_heuristic && !self.is_zero()
    }
}
