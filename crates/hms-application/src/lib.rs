//! Application Layer - Host Metrics Sampler
//!
//! The sampling and aggregation pipeline. Probes feed rate estimation and
//! smoothing, samplers keep the latest readings, the collector writes them into
//! bounded histories, and readers get snapshots without ever waiting on a probe.
//!
//! ## Data flow
//!
//! ```text
//! CounterProbe ──► NetworkRateSampler ──┐
//!              ──► DiskIoSampler ───────┼──► MetricsCollector ──► MetricsStore ──► SnapshotAssembler
//!              ──► InstantRateEstimator ┘                                      └─► CapacityService
//! ```
//!
//! ## Modules
//!
//! - `domain_services`: pure building blocks (history buffer, rates, EMA, percentiles)
//! - `samplers`: stateful samplers that own their own state
//! - `use_cases`: collector, snapshot, capacity and startup seeding
//! - `store`: the explicit home of every history buffer
//! - `scheduler`: cancellable periodic tasks
//!
//! ## Dependencies
//!
//! This crate depends only on `hms-domain` plus async/logging libraries.

pub mod domain_services;
pub mod samplers;
pub mod scheduler;
pub mod store;
pub mod use_cases;

pub use domain_services::*;
pub use samplers::*;
pub use scheduler::PeriodicTask;
pub use store::MetricsStore;
pub use use_cases::*;
