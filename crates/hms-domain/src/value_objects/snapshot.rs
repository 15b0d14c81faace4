//! Snapshot returned to readers
//!
//! Every field has a zero default so a cold-start snapshot is fully
//! populated even before the first sample exists.

use super::host::LoadAverage;
use super::samples::{CpuLoadSample, DiskIoSample, MemorySample, NetworkSample};
use serde::{Deserialize, Serialize};

/// CPU load: latest reading plus history
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CpuLoadSeries {
    /// Most recent load averages
    pub current: LoadAverage,
    /// Buffered samples, oldest first
    pub history: Vec<CpuLoadSample>,
}

/// Memory: direct reading plus history
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemorySeries {
    /// Percentage in use right now
    pub current: u32,
    /// Bytes in use right now
    pub used: u64,
    /// Total bytes installed
    pub total: u64,
    /// Buffered samples, oldest first
    pub history: Vec<MemorySample>,
}

/// Disk I/O: latest sample plus history
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiskIoSeries {
    /// Most recent sample
    pub current: DiskIoSample,
    /// Buffered samples, oldest first
    pub history: Vec<DiskIoSample>,
}

/// Network traffic: latest sample plus history
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkSeries {
    /// Most recent sample
    pub current: NetworkSample,
    /// Buffered samples, oldest first
    pub history: Vec<NetworkSample>,
}

/// Everything a reader gets from one snapshot query
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// CPU load series
    pub cpu_load: CpuLoadSeries,
    /// Memory series
    pub memory: MemorySeries,
    /// Disk I/O series
    #[serde(rename = "diskIO")]
    pub disk_io: DiskIoSeries,
    /// Network traffic series
    pub network_traffic: NetworkSeries,
}
