//! Clock Port

use crate::value_objects::TimestampMs;

/// Source of wall-clock time in epoch milliseconds
///
/// Samplers stamp samples and make throttle decisions through this port so
/// tests can drive time explicitly.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> TimestampMs;
}
