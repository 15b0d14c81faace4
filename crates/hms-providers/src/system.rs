//! Counter probe backed by the sysinfo crate
//!
//! Works on every platform sysinfo supports. Network and disk refreshes go
//! through a single actor task that owns the `Networks` and `Disks` handles,
//! so concurrent callers never contend on a lock around a slow refresh.

use crate::constants::{PROVIDER_SYSINFO, SYSINFO_ACTOR_CHANNEL_CAPACITY};
use async_trait::async_trait;
use hms_domain::error::{Error, Result};
use hms_domain::ports::{CounterProbe, HostStatsProbe, InterfaceCounters};
use hms_domain::value_objects::{DiskCounters, LoadAverage, MemoryUsage, NetworkCounters};
use std::sync::{Arc, Mutex};
use sysinfo::{Disks, MemoryRefreshKind, Networks, RefreshKind, System};
use tokio::sync::{mpsc, oneshot};

/// Messages for the sysinfo actor
enum ProbeMessage {
    /// Refresh interfaces and report cumulative counters
    ReadNetwork(oneshot::Sender<Result<InterfaceCounters>>),
    /// Refresh disks and report cumulative counters
    ReadDisk(oneshot::Sender<Result<DiskCounters>>),
}

/// Probe using sysinfo for counters, memory and load
///
/// Construct inside a Tokio runtime: the actor task is spawned on creation
/// and exits once every handle is dropped.
pub struct SysinfoProbe {
    sender: mpsc::Sender<ProbeMessage>,
    memory: Mutex<System>,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(SYSINFO_ACTOR_CHANNEL_CAPACITY);
        let mut actor = ProbeActor::new(rx);
        tokio::spawn(async move {
            actor.run().await;
        });

        let memory = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::everything()),
        );

        Self {
            sender: tx,
            memory: Mutex::new(memory),
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    async fn request<T>(
        &self,
        message: impl FnOnce(oneshot::Sender<Result<T>>) -> ProbeMessage,
    ) -> Result<T> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(message(tx))
            .await
            .map_err(|_| Error::internal("sysinfo actor closed"))?;
        rx.await
            .unwrap_or_else(|_| Err(Error::internal("sysinfo actor dropped the request")))
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SysinfoProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SysinfoProbe")
            .field("provider", &PROVIDER_SYSINFO)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CounterProbe for SysinfoProbe {
    async fn read_network_counters(&self) -> Result<InterfaceCounters> {
        self.request(ProbeMessage::ReadNetwork).await
    }

    async fn read_disk_counters(&self) -> Result<DiskCounters> {
        self.request(ProbeMessage::ReadDisk).await
    }

    async fn read_load_average(&self) -> Result<LoadAverage> {
        self.load_average_now()
    }

    fn provider_name(&self) -> &str {
        PROVIDER_SYSINFO
    }
}

impl HostStatsProbe for SysinfoProbe {
    fn memory_usage(&self) -> Result<MemoryUsage> {
        let mut system = self
            .memory
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        system.refresh_memory();
        let total = system.total_memory();
        if total == 0 {
            return Err(Error::probe("sysinfo reported no physical memory"));
        }
        Ok(MemoryUsage::new(total, system.available_memory()))
    }

    fn load_average_now(&self) -> Result<LoadAverage> {
        let load = System::load_average();
        Ok(LoadAverage::new(load.one, load.five, load.fifteen))
    }
}

struct ProbeActor {
    receiver: mpsc::Receiver<ProbeMessage>,
    networks: Networks,
    disks: Disks,
}

impl ProbeActor {
    fn new(receiver: mpsc::Receiver<ProbeMessage>) -> Self {
        Self {
            receiver,
            networks: Networks::new_with_refreshed_list(),
            disks: Disks::new_with_refreshed_list(),
        }
    }

    async fn run(&mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ProbeMessage::ReadNetwork(tx) => {
                    let _ = tx.send(Ok(self.network_counters()));
                }
                ProbeMessage::ReadDisk(tx) => {
                    let _ = tx.send(self.disk_counters());
                }
            }
        }
    }

    fn network_counters(&mut self) -> InterfaceCounters {
        self.networks.refresh(true);
        self.networks
            .iter()
            .map(|(name, data)| {
                (
                    name.clone(),
                    NetworkCounters::new(data.total_received(), data.total_transmitted()),
                )
            })
            .collect()
    }

    fn disk_counters(&mut self) -> Result<DiskCounters> {
        self.disks.refresh(true);
        if self.disks.list().is_empty() {
            return Err(Error::probe("No disk information available"));
        }
        Ok(self
            .disks
            .list()
            .iter()
            .map(|disk| {
                let usage = disk.usage();
                DiskCounters::new(usage.total_read_bytes, usage.total_written_bytes)
            })
            .sum())
    }
}
