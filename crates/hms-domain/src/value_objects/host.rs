//! Direct host readings

use serde::{Deserialize, Serialize};

/// 1, 5 and 15 minute load averages as reported by the OS
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadAverage {
    /// One minute load average
    pub one_min: f64,
    /// Five minute load average
    pub five_min: f64,
    /// Fifteen minute load average
    pub fifteen_min: f64,
}

impl LoadAverage {
    /// Create a load average reading
    pub fn new(one_min: f64, five_min: f64, fifteen_min: f64) -> Self {
        Self {
            one_min,
            five_min,
            fifteen_min,
        }
    }
}

/// Physical memory totals in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoryUsage {
    /// Total installed memory
    pub total: u64,
    /// Memory available to new allocations
    pub free: u64,
}

impl MemoryUsage {
    /// Create a memory reading
    pub fn new(total: u64, free: u64) -> Self {
        Self { total, free }
    }

    /// Bytes in use (`total - free`, never negative)
    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.free)
    }

    /// Whole-number percentage of memory in use, 0 when total is unknown
    pub fn percent_used(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.used() as f64 / self.total as f64) * 100.0).round() as u32
    }
}
