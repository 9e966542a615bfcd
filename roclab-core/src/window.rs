//! Bounded FIFO window of the most recent observations.
//!
//! Oldest-first ordering. Pushing into a full window evicts the oldest value
//! before the new one is appended, so the length never exceeds the capacity.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceWindow {
    values: VecDeque<f64>,
    capacity: usize,
}

impl PriceWindow {
    /// Create an empty window holding at most `capacity` values.
    ///
    /// `capacity` must be >= 1; `RocCalculator::new` enforces this.
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `value`, returning the evicted oldest value if the window was full.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        let evicted = if self.is_full() {
            self.values.pop_front()
        } else {
            None
        };
        self.values.push_back(value);
        evicted
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Iterate buffered values oldest-first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.values.iter().copied()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
