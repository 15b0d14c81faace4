//! Domain layer constants
//!
//! Sampling defaults shared by the application and infrastructure layers.
//! Provider-specific constants (sector size, procfs paths) live in
//! `hms_providers::constants`.

// ============================================================================
// HISTORY CONSTANTS
// ============================================================================

/// Number of samples retained per metric kind
pub const HISTORY_CAPACITY: usize = 60;

// ============================================================================
// RATE AND SMOOTHING CONSTANTS
// ============================================================================

/// Lower bound on elapsed seconds between two counter reads
pub const RATE_MIN_ELAPSED_SECS: f64 = 0.001;

/// Weight of the newest raw rate in the exponential moving average
pub const EMA_ALPHA: f64 = 0.4;

// ============================================================================
// CADENCE CONSTANTS
// ============================================================================

/// Collector tick period in milliseconds
pub const COLLECT_INTERVAL_MS: u64 = 1000;

/// Network sampler tick period in milliseconds
pub const NETWORK_SAMPLE_INTERVAL_MS: u64 = 1000;

/// Minimum spacing between two disk probes in milliseconds
pub const DISK_SAMPLE_INTERVAL_MS: u64 = 5000;

/// Delay between the two reads of an instant rate estimate in milliseconds
pub const INSTANT_SAMPLE_DELAY_MS: u64 = 350;

/// Delay before the collector cadence starts in milliseconds
pub const COLLECTOR_START_DELAY_MS: u64 = 2000;

// ============================================================================
// STARTUP SEED CONSTANTS
// ============================================================================

/// Floor for the heuristic startup placeholder (100 KiB/s)
pub const HEURISTIC_MIN_BYTES_PER_SEC: u64 = 100 * 1024;

/// Share of the default interface's link speed used for the startup placeholder
pub const HEURISTIC_LINK_SHARE: f64 = 0.01;

/// Instant estimates taken while replacing the startup placeholder
pub const SEED_ATTEMPTS: usize = 3;

/// Pause between startup instant estimates in milliseconds
pub const SEED_PAUSE_MS: u64 = 120;

// ============================================================================
// PERCENTILE AND CAPACITY CONSTANTS
// ============================================================================

/// Default number of recent network samples considered by percentile queries
pub const PERCENTILE_DEFAULT_WINDOW: usize = 60;

/// Default percentile for capacity queries
pub const PERCENTILE_DEFAULT: u8 = 95;

/// Smallest accepted percentile
pub const PERCENTILE_MIN: u8 = 1;

/// Largest accepted percentile
pub const PERCENTILE_MAX: u8 = 99;

/// Fraction of nominal link speed treated as usable capacity
pub const LINK_CAPACITY_SAFETY_FACTOR: f64 = 0.9;
