//! # Host Metrics Sampler
//!
//! Periodically samples CPU load, memory, disk I/O and network throughput,
//! keeps a bounded history of each, and answers snapshot and percentile
//! queries without waiting on the OS.
//!
//! ## Example
//!
//! ```ignore
//! use hms::infrastructure::{ConfigLoader, MetricsRuntime};
//!
//! let config = ConfigLoader::new().load()?;
//! let runtime = MetricsRuntime::start(&config).await?;
//! let snapshot = runtime.snapshot();
//! println!("{}", serde_json::to_string_pretty(&snapshot)?);
//! runtime.shutdown().await;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Samples, counters, rates, ports and the error type
//! - `application` - Samplers, collector, store and query services
//! - `providers` - sysinfo, procfs and null probes
//! - `infrastructure` - Configuration, logging and runtime lifecycle
//! - `cli` - The `hms` command line

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use hms_domain::*;
}

/// Application layer - the sampling pipeline
pub mod application {
    pub use hms_application::*;
}

/// Probe implementations
pub mod providers {
    pub use hms_providers::*;
}

/// Infrastructure layer - config, logging and lifecycle
pub mod infrastructure {
    pub use hms_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use cli::{Cli, Command, run};
pub use infrastructure::{AppConfig, ConfigLoader, MetricsRuntime};
