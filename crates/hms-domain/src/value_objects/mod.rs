//! Domain Value Objects
//!
//! Immutable values exchanged between probes, samplers and readers.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`CpuLoadSample`], [`MemorySample`], [`DiskIoSample`], [`NetworkSample`] | One timestamped history entry per metric kind |
//! | [`NetworkCounters`], [`DiskCounters`], [`CounterSnapshot`] | Cumulative OS counters and when they were read |
//! | [`NetworkRate`], [`DiskRate`] | Per-second rates derived from two counter reads |
//! | [`LoadAverage`], [`MemoryUsage`] | Cheap direct host readings |
//! | [`MetricsSnapshot`] | What readers receive from the snapshot query |
//! | [`PercentileQuery`], [`NetworkPercentile`], [`NetworkCapacity`] | Capacity-style queries |
//! | [`SamplingConfig`] | Cadences, capacity and smoothing settings |

/// Capacity and percentile value objects
pub mod capacity;
/// Sampling configuration value object
pub mod config;
/// Cumulative counters and derived rates
pub mod counters;
/// Direct host readings (load average, memory)
pub mod host;
/// Timestamped history samples
pub mod samples;
/// Snapshot returned to readers
pub mod snapshot;

pub use capacity::{NetworkCapacity, NetworkPercentile, PercentileQuery};
pub use config::SamplingConfig;
pub use counters::{CounterSnapshot, DiskCounters, DiskRate, NetworkCounters, NetworkRate};
pub use host::{LoadAverage, MemoryUsage};
pub use samples::{CpuLoadSample, DiskIoSample, MemorySample, NetworkSample, TimestampMs};
pub use snapshot::{CpuLoadSeries, DiskIoSeries, MemorySeries, MetricsSnapshot, NetworkSeries};
