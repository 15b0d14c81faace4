//! Provider bootstrap
//!
//! Turns a `ProbeConfig` into the set of port implementations the
//! application layer runs on.

use crate::config::{ProbeConfig, ProbeProvider};
use crate::error_ext::ErrorContext;
use hms_domain::error::Result;
use hms_domain::ports::{Clock, CounterProbe, HostStatsProbe, InterfaceResolver};
use hms_providers::constants::PROC_NET_DEV;
use hms_providers::{
    NullCounterProbe, NullHostStats, NullInterfaceResolver, ProcfsInterfaceResolver, ProcfsProbe,
    SysinfoProbe, SystemClock,
};
use std::sync::Arc;
use tracing::debug;

/// Port implementations shared by every component of one runtime
#[derive(Clone)]
pub struct Providers {
    pub counters: Arc<dyn CounterProbe>,
    pub host: Arc<dyn HostStatsProbe>,
    pub resolver: Arc<dyn InterfaceResolver>,
    pub clock: Arc<dyn Clock>,
}

impl Providers {
    /// Build the configured providers
    ///
    /// The sysinfo probe spawns its actor task, so this must run inside a
    /// Tokio runtime. The procfs probe is checked once up front so a wrong
    /// root fails at startup rather than on every tick.
    pub fn from_config(config: &ProbeConfig) -> Result<Self> {
        let resolver: Arc<dyn InterfaceResolver> = match config.provider {
            ProbeProvider::Null => Arc::new(NullInterfaceResolver::new()),
            ProbeProvider::Sysinfo | ProbeProvider::Procfs => Arc::new(
                ProcfsInterfaceResolver::with_roots(&config.procfs_root, &config.sysfs_root),
            ),
        };

        let providers = match config.provider {
            ProbeProvider::Sysinfo => {
                let probe = SysinfoProbe::new_shared();
                Self::new(probe.clone(), probe, resolver)
            }
            ProbeProvider::Procfs => {
                let net_dev = config.procfs_root.join(PROC_NET_DEV);
                std::fs::metadata(&net_dev).probe_context(format!(
                    "procfs root {} is not usable",
                    config.procfs_root.display()
                ))?;
                let probe = Arc::new(ProcfsProbe::with_root(&config.procfs_root));
                Self::new(probe.clone(), probe, resolver)
            }
            ProbeProvider::Null => Self::new(
                Arc::new(NullCounterProbe::new()),
                Arc::new(NullHostStats::new()),
                resolver,
            ),
        };

        debug!(provider = %config.provider, "Probe providers ready");
        Ok(providers)
    }

    /// Assemble providers with the system clock
    pub fn new(
        counters: Arc<dyn CounterProbe>,
        host: Arc<dyn HostStatsProbe>,
        resolver: Arc<dyn InterfaceResolver>,
    ) -> Self {
        Self {
            counters,
            host,
            resolver,
            clock: SystemClock::new_shared(),
        }
    }

    /// Replace the clock
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

impl std::fmt::Debug for Providers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Providers")
            .field("counters", &self.counters.provider_name())
            .finish_non_exhaustive()
    }
}
