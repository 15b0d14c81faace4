//! Rate estimation and exponential smoothing
//!
//! Rates come from differencing two cumulative counter reads. A counter that
//! appears to go backwards (interface reset, wraparound) yields a rate of zero,
//! never a negative one.

use hms_domain::constants::RATE_MIN_ELAPSED_SECS;
use hms_domain::value_objects::{
    CounterSnapshot, DiskCounters, DiskRate, NetworkCounters, NetworkRate, TimestampMs,
};

/// Seconds between two reads, never less than `RATE_MIN_ELAPSED_SECS`
pub fn elapsed_seconds(previous: TimestampMs, current: TimestampMs) -> f64 {
    let secs = current.saturating_sub(previous) as f64 / 1000.0;
    secs.max(RATE_MIN_ELAPSED_SECS)
}

/// Per-second rate of one counter, rounded and clamped at zero
pub fn counter_rate(previous: u64, current: u64, elapsed_secs: f64) -> u64 {
    let delta = current as f64 - previous as f64;
    let elapsed = elapsed_secs.max(RATE_MIN_ELAPSED_SECS);
    // `as u64` saturates, so an absurd delta cannot wrap
    (delta / elapsed).round().max(0.0) as u64
}

/// Network rate between two counter snapshots
pub fn network_rate(
    previous: &CounterSnapshot<NetworkCounters>,
    current: &CounterSnapshot<NetworkCounters>,
) -> NetworkRate {
    let elapsed = elapsed_seconds(previous.timestamp, current.timestamp);
    NetworkRate::new(
        counter_rate(previous.counters.received, current.counters.received, elapsed),
        counter_rate(previous.counters.sent, current.counters.sent, elapsed),
    )
}

/// Disk rate between two counter snapshots
pub fn disk_rate(
    previous: &CounterSnapshot<DiskCounters>,
    current: &CounterSnapshot<DiskCounters>,
) -> DiskRate {
    let elapsed = elapsed_seconds(previous.timestamp, current.timestamp);
    DiskRate::new(
        counter_rate(previous.counters.read, current.counters.read, elapsed),
        counter_rate(previous.counters.write, current.counters.write, elapsed),
    )
}

/// One EMA step. Without a previous value the raw value passes through.
///
/// `alpha` is clamped into `[0, 1]`.
pub fn ema(raw: u64, previous: Option<u64>, alpha: f64) -> u64 {
    let Some(previous) = previous else {
        return raw;
    };
    let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
    (alpha * raw as f64 + (1.0 - alpha) * previous as f64).round() as u64
}

/// EMA applied to each direction independently
pub fn smooth_network(raw: NetworkRate, previous: Option<NetworkRate>, alpha: f64) -> NetworkRate {
    NetworkRate::new(
        ema(raw.received, previous.map(|p| p.received), alpha),
        ema(raw.sent, previous.map(|p| p.sent), alpha),
    )
}
