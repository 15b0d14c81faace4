//! Default-route interface resolution from the routing table and sysfs

use super::parsers::{parse_default_route, parse_link_speed};
use crate::constants::{DEFAULT_PROCFS_ROOT, DEFAULT_SYSFS_ROOT, PROC_NET_ROUTE, SYS_CLASS_NET};
use async_trait::async_trait;
use hms_domain::ports::InterfaceResolver;
use std::path::PathBuf;
use tracing::debug;

/// Resolves the default interface from `/proc/net/route` and its speed from
/// `/sys/class/net/<if>/speed`
#[derive(Debug, Clone)]
pub struct ProcfsInterfaceResolver {
    procfs_root: PathBuf,
    sysfs_root: PathBuf,
}

impl ProcfsInterfaceResolver {
    pub fn new() -> Self {
        Self::with_roots(DEFAULT_PROCFS_ROOT, DEFAULT_SYSFS_ROOT)
    }

    pub fn with_roots(procfs_root: impl Into<PathBuf>, sysfs_root: impl Into<PathBuf>) -> Self {
        Self {
            procfs_root: procfs_root.into(),
            sysfs_root: sysfs_root.into(),
        }
    }
}

impl Default for ProcfsInterfaceResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InterfaceResolver for ProcfsInterfaceResolver {
    async fn default_interface(&self) -> Option<String> {
        let path = self.procfs_root.join(PROC_NET_ROUTE);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => parse_default_route(&content),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Routing table unavailable");
                None
            }
        }
    }

    async fn interface_speed_mbps(&self, interface: &str) -> Option<u64> {
        // Interface names never contain '/', but the name ends up in a path
        if interface.is_empty() || interface.contains('/') || interface.starts_with('.') {
            return None;
        }
        let path = self
            .sysfs_root
            .join(SYS_CLASS_NET)
            .join(interface)
            .join("speed");
        // Reading speed of a down or virtual link fails with EINVAL
        let content = tokio::fs::read_to_string(&path).await.ok()?;
        parse_link_speed(&content)
    }
}
