//! LRU Strategy Module
//!
//! Implements Least Recently Used ordering for cache eviction.

use std::collections::HashMap;

use super::EvictionStrategy;

#[derive(Debug)]
struct Node {
    key: String,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU Strategy ==
/// Tracks access order for LRU eviction.
///
/// Keys live in a doubly-linked list threaded through a slab of nodes:
/// - Head = Least recently used
/// - Tail = Most recently used
///
/// `index` maps each key to its slot, so touching and unlinking are O(1).
#[derive(Debug, Default)]
pub struct LruStrategy {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    index: HashMap<String, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl LruStrategy {
    // == Constructor ==
    /// Creates a new empty LRU strategy.
    pub fn new() -> Self {
        Self::default()
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.head.map(|idx| self.node(idx).key.as_str())
    }

    /// Keys from least to most recently used.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::with_capacity(self.index.len());
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.node(idx);
            keys.push(node.key.as_str());
            cursor = node.next;
        }
        keys
    }

    fn node(&self, idx: usize) -> &Node {
        self.slots[idx].as_ref().expect("linked slot is occupied")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        self.slots[idx].as_mut().expect("linked slot is occupied")
    }

    fn alloc(&mut self, key: String) -> usize {
        let node = Node {
            key,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> String {
        let node = self.slots[idx].take().expect("released slot is occupied");
        self.free.push(idx);
        node.key
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.tail = prev,
        }

        let node = self.node_mut(idx);
        node.prev = None;
        node.next = None;
    }

    fn push_back(&mut self, idx: usize) {
        let old_tail = self.tail;
        {
            let node = self.node_mut(idx);
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(t) => self.node_mut(t).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }
}

impl EvictionStrategy for LruStrategy {
    // == On Add ==
    /// Tracks a new key as most recently used; a tracked key is touched instead.
    fn on_add(&mut self, key: &str) {
        if self.index.contains_key(key) {
            self.on_access(key);
            return;
        }
        let idx = self.alloc(key.to_string());
        self.push_back(idx);
        self.index.insert(key.to_string(), idx);
    }

    // == On Access ==
    /// Moves a tracked key to the most recently used end.
    fn on_access(&mut self, key: &str) {
        if let Some(&idx) = self.index.get(key) {
            if self.tail != Some(idx) {
                self.unlink(idx);
                self.push_back(idx);
            }
        }
    }

    fn on_remove(&mut self, key: &str) {
        if let Some(idx) = self.index.remove(key) {
            self.unlink(idx);
            self.release(idx);
        }
    }

    // == Evict ==
    /// Removes and returns the least recently used key.
    fn evict(&mut self) -> Option<String> {
        let idx = self.head?;
        self.unlink(idx);
        let key = self.release(idx);
        self.index.remove(&key);
        Some(key)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    fn name(&self) -> &'static str {
        "lru"
    }
}
