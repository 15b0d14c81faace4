//! Cumulative counters and derived rates

use super::samples::TimestampMs;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Cumulative bytes received and sent on an interface since boot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkCounters {
    /// Total bytes received
    pub received: u64,
    /// Total bytes sent
    pub sent: u64,
}

impl NetworkCounters {
    /// Create a counter pair
    pub fn new(received: u64, sent: u64) -> Self {
        Self { received, sent }
    }
}

impl Add for NetworkCounters {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            received: self.received.saturating_add(other.received),
            sent: self.sent.saturating_add(other.sent),
        }
    }
}

impl Sum for NetworkCounters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Cumulative bytes read from and written to block devices since boot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiskCounters {
    /// Total bytes read
    pub read: u64,
    /// Total bytes written
    pub write: u64,
}

impl DiskCounters {
    /// Create a counter pair
    pub fn new(read: u64, write: u64) -> Self {
        Self { read, write }
    }
}

impl Add for DiskCounters {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            read: self.read.saturating_add(other.read),
            write: self.write.saturating_add(other.write),
        }
    }
}

impl Sum for DiskCounters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Counters together with the instant they were read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot<C> {
    /// The cumulative counters
    pub counters: C,
    /// When the counters were read
    pub timestamp: TimestampMs,
}

impl<C> CounterSnapshot<C> {
    /// Pair counters with their read time
    pub fn new(counters: C, timestamp: TimestampMs) -> Self {
        Self {
            counters,
            timestamp,
        }
    }
}

/// Network throughput in bytes per second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkRate {
    /// Bytes received per second
    pub received: u64,
    /// Bytes sent per second
    pub sent: u64,
}

impl NetworkRate {
    /// Create a rate pair
    pub fn new(received: u64, sent: u64) -> Self {
        Self { received, sent }
    }

    /// Both directions are zero
    pub fn is_zero(&self) -> bool {
        self.received == 0 && self.sent == 0
    }

    /// Combined bytes per second in both directions
    pub fn total(&self) -> u64 {
        self.received.saturating_add(self.sent)
    }
}

/// Disk throughput in bytes per second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiskRate {
    /// Bytes read per second
    pub read: u64,
    /// Bytes written per second
    pub write: u64,
}

impl DiskRate {
    /// Create a rate pair
    pub fn new(read: u64, write: u64) -> Self {
        Self { read, write }
    }
}
