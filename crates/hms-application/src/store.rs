//! Metrics store
//!
//! The one place every history buffer lives. The collector is the only writer;
//! snapshot and percentile readers take short read locks and copy out.
//!
//! Every critical section is a single complete push or copy, so a poisoned lock
//! still guards a consistent buffer and is recovered rather than propagated.

use crate::domain_services::HistoryBuffer;
use hms_domain::value_objects::{CpuLoadSample, DiskIoSample, MemorySample, NetworkSample};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Network history plus the number of heuristic entries it holds
#[derive(Debug)]
struct NetworkHistory {
    buffer: HistoryBuffer<NetworkSample>,
    heuristic_count: usize,
}

impl NetworkHistory {
    fn new(capacity: usize) -> Self {
        Self {
            buffer: HistoryBuffer::new(capacity),
            heuristic_count: 0,
        }
    }

    fn purge_heuristics(&mut self) -> usize {
        if self.heuristic_count == 0 {
            return 0;
        }
        let removed = self.buffer.retain(|s| !s.is_heuristic);
        self.heuristic_count = 0;
        removed
    }

    fn push(&mut self, sample: NetworkSample) {
        if sample.is_heuristic {
            self.heuristic_count += 1;
        }
        if let Some(evicted) = self.buffer.push(sample)
            && evicted.is_heuristic
        {
            self.heuristic_count = self.heuristic_count.saturating_sub(1);
        }
    }
}

/// Bounded histories for every metric kind
#[derive(Debug)]
pub struct MetricsStore {
    cpu_load: RwLock<HistoryBuffer<CpuLoadSample>>,
    memory: RwLock<HistoryBuffer<MemorySample>>,
    disk_io: RwLock<HistoryBuffer<DiskIoSample>>,
    network: RwLock<NetworkHistory>,
    capacity: usize,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MetricsStore {
    /// Create a store whose buffers each hold `capacity` samples
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            cpu_load: RwLock::new(HistoryBuffer::new(capacity)),
            memory: RwLock::new(HistoryBuffer::new(capacity)),
            disk_io: RwLock::new(HistoryBuffer::new(capacity)),
            network: RwLock::new(NetworkHistory::new(capacity)),
            capacity,
        }
    }

    /// Per-kind capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // --- writes -----------------------------------------------------------

    pub fn push_cpu_load(&self, sample: CpuLoadSample) {
        write(&self.cpu_load).push(sample);
    }

    pub fn push_memory(&self, sample: MemorySample) {
        write(&self.memory).push(sample);
    }

    pub fn push_disk_io(&self, sample: DiskIoSample) {
        write(&self.disk_io).push(sample);
    }

    /// Record a network sample
    ///
    /// A genuine non-zero measurement first purges every heuristic
    /// placeholder. Purge and push happen under one write lock, so readers
    /// never see the placeholders gone without the replacement present.
    pub fn record_network(&self, sample: NetworkSample) {
        let mut network = write(&self.network);
        if sample.is_genuine_traffic() {
            let purged = network.purge_heuristics();
            if purged > 0 {
                debug!(purged, "Purged heuristic network placeholders");
            }
        }
        network.push(sample);
    }

    // --- reads ------------------------------------------------------------

    pub fn latest_cpu_load(&self) -> Option<CpuLoadSample> {
        read(&self.cpu_load).latest().copied()
    }

    pub fn latest_memory(&self) -> Option<MemorySample> {
        read(&self.memory).latest().copied()
    }

    pub fn latest_disk_io(&self) -> Option<DiskIoSample> {
        read(&self.disk_io).latest().copied()
    }

    pub fn latest_network(&self) -> Option<NetworkSample> {
        read(&self.network).buffer.latest().copied()
    }

    pub fn cpu_load_history(&self) -> Vec<CpuLoadSample> {
        read(&self.cpu_load).snapshot()
    }

    pub fn memory_history(&self) -> Vec<MemorySample> {
        read(&self.memory).snapshot()
    }

    pub fn disk_io_history(&self) -> Vec<DiskIoSample> {
        read(&self.disk_io).snapshot()
    }

    pub fn network_history(&self) -> Vec<NetworkSample> {
        read(&self.network).buffer.snapshot()
    }

    /// The last `window` network samples, oldest first
    pub fn network_window(&self, window: usize) -> Vec<NetworkSample> {
        read(&self.network).buffer.tail(window)
    }

    /// Network history is non-empty and holds nothing but placeholders
    pub fn network_only_heuristic(&self) -> bool {
        let network = read(&self.network);
        !network.buffer.is_empty() && network.heuristic_count == network.buffer.len()
    }

    /// Number of heuristic placeholders currently in the network history
    pub fn network_heuristic_count(&self) -> usize {
        read(&self.network).heuristic_count
    }
}

impl Default for MetricsStore {
    fn default() -> Self {
        Self::new(hms_domain::constants::HISTORY_CAPACITY)
    }
}
