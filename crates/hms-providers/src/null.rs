//! Null Probes
//!
//! Stand-ins that report an idle host with no interfaces, disks or memory.
//! Selected with `provider = "null"` for dry runs, and used by tests that need
//! a running pipeline without touching the OS.

use async_trait::async_trait;
use hms_domain::error::Result;
use hms_domain::ports::{CounterProbe, HostStatsProbe, InterfaceCounters, InterfaceResolver};
use hms_domain::value_objects::{DiskCounters, LoadAverage, MemoryUsage};
use std::sync::Arc;

use crate::constants::PROVIDER_NULL;

/// Counter probe that always reports zero
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCounterProbe;

impl NullCounterProbe {
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self)
    }
}

#[async_trait]
impl CounterProbe for NullCounterProbe {
    async fn read_network_counters(&self) -> Result<InterfaceCounters> {
        Ok(InterfaceCounters::new())
    }

    async fn read_disk_counters(&self) -> Result<DiskCounters> {
        Ok(DiskCounters::default())
    }

    async fn read_load_average(&self) -> Result<LoadAverage> {
        Ok(LoadAverage::default())
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NULL
    }
}

/// Host stats that report no memory and no load
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHostStats;

impl NullHostStats {
    pub fn new() -> Self {
        Self
    }
}

impl HostStatsProbe for NullHostStats {
    fn memory_usage(&self) -> Result<MemoryUsage> {
        Ok(MemoryUsage::default())
    }

    fn load_average_now(&self) -> Result<LoadAverage> {
        Ok(LoadAverage::default())
    }
}

/// Resolver that never knows the default interface
#[derive(Debug, Default, Clone, Copy)]
pub struct NullInterfaceResolver;

impl NullInterfaceResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InterfaceResolver for NullInterfaceResolver {
    async fn default_interface(&self) -> Option<String> {
        None
    }

    async fn interface_speed_mbps(&self, _interface: &str) -> Option<u64> {
        None
    }
}
