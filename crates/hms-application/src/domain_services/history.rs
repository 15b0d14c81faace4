//! Bounded history buffer
//!
//! Fixed-capacity FIFO. Pushing past capacity evicts from the head, so the
//! buffer always holds the most recent `capacity` entries in push order.

use std::collections::VecDeque;

/// Fixed-capacity FIFO sample store
#[derive(Debug, Clone)]
pub struct HistoryBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> HistoryBuffer<T> {
    /// Create an empty buffer; a capacity of 0 is raised to 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append to the tail, returning the entry evicted from the head, if any
    pub fn push(&mut self, item: T) -> Option<T> {
        self.entries.push_back(item);
        let mut evicted = None;
        while self.entries.len() > self.capacity {
            evicted = self.entries.pop_front();
        }
        evicted
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Most recent entry, or `T::default()` when empty
    pub fn latest_or_default(&self) -> T
    where
        T: Default,
    {
        self.latest().cloned().unwrap_or_default()
    }

    /// Ordered copy of the contents, most recent last
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }

    /// Copy of the last `n` entries (fewer if not yet available), most recent last
    pub fn tail(&self, n: usize) -> Vec<T> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).cloned().collect()
    }

    /// Keep only entries matching the predicate; returns how many were removed
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(keep);
        before - self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
