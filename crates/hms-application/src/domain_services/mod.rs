//! Pure building blocks of the pipeline
//!
//! Nothing here touches the OS, a clock or a lock; every function is
//! deterministic in its inputs.

pub mod history;
pub mod percentile;
pub mod rate;

pub use history::HistoryBuffer;
pub use percentile::{nearest_rank, network_percentile};
pub use rate::{
    counter_rate, disk_rate, elapsed_seconds, ema, network_rate, smooth_network,
};
