//! FIFO Strategy Module
//!
//! Evicts keys in insertion order, ignoring reads.

use std::collections::{HashSet, VecDeque};

use super::EvictionStrategy;

// == FIFO Strategy ==
/// Tracks insertion order for FIFO eviction.
///
/// - Front = Oldest insertion
/// - Back = Newest insertion
#[derive(Debug, Default)]
pub struct FifoStrategy {
    queue: VecDeque<String>,
    members: HashSet<String>,
}

impl FifoStrategy {
    /// Creates a new empty FIFO strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys from oldest to newest insertion.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }
}

impl EvictionStrategy for FifoStrategy {
    /// Queues an untracked key. Re-adding keeps its original position.
    fn on_add(&mut self, key: &str) {
        if self.members.insert(key.to_string()) {
            self.queue.push_back(key.to_string());
        }
    }

    fn on_access(&mut self, _key: &str) {}

    fn on_remove(&mut self, key: &str) {
        if self.members.remove(key) {
            self.queue.retain(|k| k != key);
        }
    }

    fn evict(&mut self) -> Option<String> {
        let key = self.queue.pop_front()?;
        self.members.remove(&key);
        Some(key)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, key: &str) -> bool {
        self.members.contains(key)
    }

    fn name(&self) -> &'static str {
        "fifo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_evicts_in_insertion_order() {
        let mut fifo = FifoStrategy::new();
        fifo.on_add("key1");
        fifo.on_add("key2");
        fifo.on_add("key3");

        fifo.on_access("key1");
        fifo.on_access("key2");

        assert_eq!(fifo.evict(), Some("key1".to_string()));
        assert_eq!(fifo.evict(), Some("key2".to_string()));
        assert_eq!(fifo.evict(), Some("key3".to_string()));
        assert_eq!(fifo.evict(), None);
    }

    #[test]
    fn test_fifo_re_add_keeps_position() {
        let mut fifo = FifoStrategy::new();
        fifo.on_add("a");
        fifo.on_add("b");
        fifo.on_add("a");

        assert_eq!(fifo.len(), 2);
        assert_eq!(fifo.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_fifo_remove_purges_queue() {
        let mut fifo = FifoStrategy::new();
        fifo.on_add("a");
        fifo.on_add("b");

        fifo.on_remove("a");
        fifo.on_remove("missing");

        assert!(!fifo.contains("a"));
        assert_eq!(fifo.len(), 1);
        assert_eq!(fifo.evict(), Some("b".to_string()));
    }

    #[test]
    fn test_fifo_removed_key_requeues_at_back() {
        let mut fifo = FifoStrategy::new();
        fifo.on_add("a");
        fifo.on_add("b");
        fifo.on_remove("a");
        fifo.on_add("a");

        assert_eq!(fifo.evict(), Some("b".to_string()));
        assert_eq!(fifo.evict(), Some("a".to_string()));
    }
}
