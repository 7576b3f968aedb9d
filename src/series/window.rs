use std::collections::VecDeque;

/// Number of recent observations kept per metric
pub const MAX_ENTRIES: usize = 1000;

/// Fixed-capacity buffer of the most recent observations, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow {
    values: VecDeque<f64>,
    capacity: usize,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        RollingWindow {
            values: VecDeque::with_capacity(capacity.min(MAX_ENTRIES)),
            capacity,
        }
    }

    /// Append a value, evicting the oldest one when full
    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        while self.values.len() >= self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent value
    pub fn last(&self) -> Option<f64> {
        self.values.back().copied()
    }

    /// Mean of the whole window
    pub fn mean(&self) -> Option<f64> {
        self.tail_mean(self.values.len())
    }

    /// Mean of the last `n` values (or all of them if fewer are held)
    pub fn tail_mean(&self, n: usize) -> Option<f64> {
        if self.values.is_empty() || n == 0 {
            return None;
        }

        let n = n.min(self.values.len());
        let sum: f64 = self.values.iter().rev().take(n).sum();
        Some(sum / n as f64)
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }

    /// Copy of the window in chronological order
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new(MAX_ENTRIES)
    }
}
