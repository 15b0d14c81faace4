//! Domain Port Interfaces
//!
//! Contracts the application layer depends on and the providers crate
//! implements.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`CounterProbe`] | Cumulative network/disk counters and load averages (may be slow, may fail) |
//! | [`HostStatsProbe`] | Cheap synchronous memory and load reads for the non-blocking paths |
//! | [`InterfaceResolver`] | Default network interface and its link speed |
//! | [`Clock`] | Wall-clock milliseconds for timestamps and throttling |

/// Wall-clock port
pub mod clock;
/// Host probe ports
pub mod probes;
/// Network interface resolution port
pub mod resolver;

pub use clock::Clock;
pub use probes::{CounterProbe, HostStatsProbe, InterfaceCounters};
pub use resolver::InterfaceResolver;
