//! Stateful samplers
//!
//! Each sampler owns its own state and is its only writer. Readers get the
//! latest value without waiting on a probe.

pub mod disk;
pub mod instant;
pub mod network;

pub use disk::DiskIoSampler;
pub use instant::InstantRateEstimator;
pub use network::{NetworkRateSampler, NetworkReading, is_loopback, select_counters};
