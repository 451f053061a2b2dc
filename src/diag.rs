//! Capacity-bounded diagnostics buffer
//!
//! Components that want a trail of recent pass summaries get one of these
//! handed in explicitly, instead of appending to a process-wide buffer.
//! Eviction is oldest-first at a fixed capacity.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct DiagnosticsBuffer {
    capacity: usize,
    entries: VecDeque<String>,
}

impl DiagnosticsBuffer {
    /// Create a buffer holding at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an entry, evicting the oldest when full
    pub fn record(&mut self, entry: impl Into<String>) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.into());
    }

    /// Entries oldest-first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Current number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for DiagnosticsBuffer {
    fn default() -> Self {
        Self::new(32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut buffer = DiagnosticsBuffer::new(4);
        buffer.record("first");
        buffer.record("second");
        assert_eq!(buffer.entries().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let mut buffer = DiagnosticsBuffer::new(2);
        buffer.record("a");
        buffer.record("b");
        buffer.record("c");
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.entries().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut buffer = DiagnosticsBuffer::new(0);
        buffer.record("only");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut buffer = DiagnosticsBuffer::new(2);
        buffer.record("a");
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
