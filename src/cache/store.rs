//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with a pluggable eviction strategy.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheStats, EvictionPolicy, EvictionStrategy};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Fixed-capacity cache storage that delegates ordering decisions to a strategy.
///
/// The store owns every entry. The strategy only tracks keys and names victims;
/// the store removes them. Both always agree on the set of live keys.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Eviction ordering
    strategy: Box<dyn EvictionStrategy>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore using one of the built-in policies.
    ///
    /// # Errors
    /// `CacheError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Result<Self> {
        Self::with_strategy(capacity, policy.build())
    }

    /// Creates a new CacheStore around any strategy implementation.
    pub fn with_strategy(capacity: usize, strategy: Box<dyn EvictionStrategy>) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            strategy,
            stats: CacheStats::new(capacity),
            capacity,
        })
    }

    // == Add ==
    /// Inserts or replaces a value.
    ///
    /// Replacing an existing key never grows the store. Inserting a new key into a
    /// full store evicts exactly one entry first, plus any entries left over
    /// capacity by an earlier strategy desync.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_for_insert(&key);
        }

        self.entries.insert(key.clone(), CacheEntry::new(value.into()));
        self.strategy.on_add(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key, recording the access with the strategy.
    ///
    /// Returns `None` for absent keys.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let Some(entry) = self.entries.get_mut(key) else {
            self.stats.record_miss();
            debug!(key, "Cache miss");
            return None;
        };

        entry.touch();
        let value = entry.value().to_string();
        self.strategy.on_access(key);
        self.stats.record_hit();
        debug!(key, "Cache hit");
        Some(value)
    }

    // == Remove ==
    /// Removes an entry by key. Absent keys are ignored.
    ///
    /// Returns true if an entry was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_none() {
            return false;
        }
        self.strategy.on_remove(key);
        self.stats.set_total_entries(self.entries.len());
        true
    }

    // == Evict ==
    /// Evicts one entry and returns its key.
    ///
    /// The strategy picks the victim. Victims that are no longer stored are
    /// discarded until a stored one is found. If the strategy runs dry, an entry
    /// it never tracked is evicted instead. Returns `None` when neither exists.
    pub fn evict(&mut self) -> Option<String> {
        self.evict_tracked().or_else(|| self.evict_untracked())
    }

    fn evict_tracked(&mut self) -> Option<String> {
        while let Some(victim) = self.strategy.evict() {
            if self.entries.remove(&victim).is_some() {
                self.stats.record_eviction();
                self.stats.set_total_entries(self.entries.len());
                debug!(key = %victim, policy = self.strategy.name(), "Evicted entry");
                return Some(victim);
            }
            warn!(
                key = %victim,
                policy = self.strategy.name(),
                "Discarding eviction candidate missing from storage"
            );
        }
        None
    }

    fn evict_untracked(&mut self) -> Option<String> {
        let orphan = self
            .entries
            .keys()
            .find(|key| !self.strategy.contains(key))
            .cloned()?;
        self.entries.remove(&orphan);
        self.stats.record_eviction();
        self.stats.set_total_entries(self.entries.len());
        warn!(
            key = %orphan,
            policy = self.strategy.name(),
            "Evicted entry the strategy was not tracking"
        );
        Some(orphan)
    }

    fn evict_for_insert(&mut self, incoming: &str) {
        if self.evict_tracked().is_none() {
            self.stats.record_desync();
            warn!(
                incoming,
                size = self.entries.len(),
                capacity = self.capacity,
                policy = self.strategy.name(),
                "Store is full but the eviction strategy has no victim"
            );
        }

        // Only reachable after a desync left the store over capacity
        while self.entries.len() >= self.capacity {
            if self.evict().is_none() {
                warn!(
                    incoming,
                    size = self.entries.len(),
                    capacity = self.capacity,
                    "No entry can be evicted; inserting over capacity"
                );
                return;
            }
        }
    }

    /// Returns the stored entry without recording an access.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Checks if a key is stored, without recording an access.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over stored keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    // == Consistency ==
    /// Returns true if the strategy tracks exactly the stored keys.
    pub fn is_consistent(&self) -> bool {
        self.strategy.len() == self.entries.len()
            && self.entries.keys().all(|key| self.strategy.contains(key))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Name of the configured eviction policy.
    pub fn policy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
