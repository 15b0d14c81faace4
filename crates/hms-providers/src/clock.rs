//! System clock

use chrono::Utc;
use hms_domain::ports::Clock;
use hms_domain::value_objects::TimestampMs;
use std::sync::Arc;

/// Wall-clock time from the operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self)
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> TimestampMs {
        Utc::now().timestamp_millis()
    }
}
