//! Host Probe Ports
//!
//! Defines the contracts for reading raw OS counters. Implementations return
//! validated values or an error; they never hand untyped output upward.

use crate::error::Result;
use crate::value_objects::{DiskCounters, LoadAverage, MemoryUsage, NetworkCounters};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Cumulative network counters keyed by interface name
pub type InterfaceCounters = BTreeMap<String, NetworkCounters>;

/// Cumulative counter probe
///
/// Each call may block on the OS and may fail transiently. Callers treat a
/// failure as "no update this tick".
#[async_trait]
pub trait CounterProbe: Send + Sync {
    /// Per-interface cumulative byte counters, loopback included
    async fn read_network_counters(&self) -> Result<InterfaceCounters>;

    /// Cumulative bytes read and written across block devices
    async fn read_disk_counters(&self) -> Result<DiskCounters>;

    /// Current 1/5/15 minute load averages
    async fn read_load_average(&self) -> Result<LoadAverage>;

    /// Short provider name for logs
    fn provider_name(&self) -> &str;
}

/// Cheap, synchronous host readings
///
/// Used by the quick phase and the snapshot path, which must never wait on a
/// slow probe.
pub trait HostStatsProbe: Send + Sync {
    /// Total and free physical memory
    fn memory_usage(&self) -> Result<MemoryUsage>;

    /// Load averages straight from the OS
    fn load_average_now(&self) -> Result<LoadAverage>;
}
