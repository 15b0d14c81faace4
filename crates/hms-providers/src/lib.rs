//! # Host Metrics Sampler - Provider Implementations
//!
//! Concrete implementations of the probe ports defined in `hms-domain`.
//! Everything that touches the operating system lives here.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Counters | `CounterProbe` | Sysinfo, Procfs, Null |
//! | Host stats | `HostStatsProbe` | Sysinfo, Procfs, Null |
//! | Interfaces | `InterfaceResolver` | Procfs (route table + sysfs), Null |
//! | Time | `Clock` | System |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! hms-providers = { version = "0.1", default-features = false, features = ["probe-procfs"] }
//! ```

pub use hms_domain::error::{Error, Result};
pub use hms_domain::ports::{Clock, CounterProbe, HostStatsProbe, InterfaceResolver};

/// Provider-specific constants
pub mod constants;

/// Wall clock
pub mod clock;

/// No-op probes for dry runs and tests
pub mod null;

/// Linux `/proc` and `/sys` probes with typed parsers
#[cfg(feature = "probe-procfs")]
pub mod procfs;

/// Cross-platform probe backed by the `sysinfo` crate
#[cfg(feature = "probe-sysinfo")]
pub mod system;

pub use clock::SystemClock;
pub use null::{NullCounterProbe, NullHostStats, NullInterfaceResolver};
#[cfg(feature = "probe-procfs")]
pub use procfs::{ProcfsInterfaceResolver, ProcfsProbe};
#[cfg(feature = "probe-sysinfo")]
pub use system::SysinfoProbe;
