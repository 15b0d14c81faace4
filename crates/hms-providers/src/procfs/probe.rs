//! procfs counter and host stats probe

use super::parsers::{parse_diskstats, parse_loadavg, parse_meminfo, parse_net_dev};
use crate::constants::{
    DEFAULT_PROCFS_ROOT, PROC_DISKSTATS, PROC_LOADAVG, PROC_MEMINFO, PROC_NET_DEV, PROVIDER_PROCFS,
};
use async_trait::async_trait;
use hms_domain::error::{Error, Result};
use hms_domain::ports::{CounterProbe, HostStatsProbe, InterfaceCounters};
use hms_domain::value_objects::{DiskCounters, LoadAverage, MemoryUsage};
use std::path::{Path, PathBuf};

/// Probe reading `/proc` directly
#[derive(Debug, Clone)]
pub struct ProcfsProbe {
    root: PathBuf,
}

impl ProcfsProbe {
    /// Probe over the real `/proc`
    pub fn new() -> Self {
        Self::with_root(DEFAULT_PROCFS_ROOT)
    }

    /// Probe over a procfs tree mounted elsewhere
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read(&self, relative: &str) -> Result<String> {
        let path = self.root.join(relative);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::probe_with_source(format!("reading {}", path.display()), e))
    }

    fn read_now(&self, relative: &str) -> Result<String> {
        let path = self.root.join(relative);
        std::fs::read_to_string(&path)
            .map_err(|e| Error::probe_with_source(format!("reading {}", path.display()), e))
    }
}

impl Default for ProcfsProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterProbe for ProcfsProbe {
    async fn read_network_counters(&self) -> Result<InterfaceCounters> {
        parse_net_dev(&self.read(PROC_NET_DEV).await?)
    }

    async fn read_disk_counters(&self) -> Result<DiskCounters> {
        parse_diskstats(&self.read(PROC_DISKSTATS).await?)
    }

    async fn read_load_average(&self) -> Result<LoadAverage> {
        parse_loadavg(&self.read(PROC_LOADAVG).await?)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_PROCFS
    }
}

impl HostStatsProbe for ProcfsProbe {
    fn memory_usage(&self) -> Result<MemoryUsage> {
        parse_meminfo(&self.read_now(PROC_MEMINFO)?)
    }

    fn load_average_now(&self) -> Result<LoadAverage> {
        parse_loadavg(&self.read_now(PROC_LOADAVG)?)
    }
}
