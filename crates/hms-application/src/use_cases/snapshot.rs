//! Snapshot assembly
//!
//! Reads the histories and one direct memory total/free read. Never touches a
//! counter probe, so it returns in bounded time whatever the probes are doing.

use crate::store::MetricsStore;
use hms_domain::ports::HostStatsProbe;
use hms_domain::value_objects::{
    CpuLoadSeries, DiskIoSeries, MemorySeries, MemoryUsage, MetricsSnapshot, NetworkSeries,
};
use std::sync::Arc;
use tracing::debug;

pub struct SnapshotAssembler {
    store: Arc<MetricsStore>,
    host: Arc<dyn HostStatsProbe>,
}

impl SnapshotAssembler {
    pub fn new(store: Arc<MetricsStore>, host: Arc<dyn HostStatsProbe>) -> Self {
        Self { store, host }
    }

    /// Latest value and full history of every metric kind
    ///
    /// Empty histories produce zero-valued series. Memory `current`, `used`
    /// and `total` come from one direct read. If that read fails, `current`
    /// falls back to the latest recorded percent and the totals are zero.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let memory_history = self.store.memory_history();
        let (memory_current, usage) = match self.host.memory_usage() {
            Ok(usage) => (usage.percent_used(), usage),
            Err(e) => {
                debug!(error = %e, "Memory totals unavailable for snapshot");
                (
                    memory_history.last().map_or(0, |m| m.percent),
                    MemoryUsage::default(),
                )
            }
        };

        let cpu_history = self.store.cpu_load_history();
        let disk_history = self.store.disk_io_history();
        let network_history = self.store.network_history();

        MetricsSnapshot {
            cpu_load: CpuLoadSeries {
                current: cpu_history.last().map(|s| s.load()).unwrap_or_default(),
                history: cpu_history,
            },
            memory: MemorySeries {
                current: memory_current,
                used: usage.used(),
                total: usage.total,
                history: memory_history,
            },
            disk_io: DiskIoSeries {
                current: disk_history.last().copied().unwrap_or_default(),
                history: disk_history,
            },
            network_traffic: NetworkSeries {
                current: network_history.last().copied().unwrap_or_default(),
                history: network_history,
            },
        }
    }
}
