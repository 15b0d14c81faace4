//! Use cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`MetricsCollector`] | Two-phase write of one sample per kind per tick |
//! | [`SnapshotAssembler`] | Non-blocking read of every history |
//! | [`CapacityService`] | Network percentiles and link capacity |
//! | [`StartupSeeder`] | Heuristic placeholder at startup and its replacement |

pub mod capacity;
pub mod collector;
pub mod seeding;
pub mod snapshot;

pub use capacity::CapacityService;
pub use collector::MetricsCollector;
pub use seeding::StartupSeeder;
pub use snapshot::SnapshotAssembler;
