//! Shared Cache Module
//!
//! Thread-safe handle over a [`CacheStore`] for concurrent callers.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CacheStats, CacheStore, EvictionPolicy, EvictionStrategy};
use crate::error::Result;

// == Cache Trait ==
/// The operations callers use to interact with a cache.
pub trait Cache: Send + Sync {
    /// Inserts or replaces a value, evicting one entry if the cache is full.
    fn add(&self, key: &str, value: &str);

    /// Returns the value for `key`, or `None` if it is not cached.
    fn get(&self, key: &str) -> Option<String>;

    /// Removes `key` if present. Returns true if something was removed.
    fn remove(&self, key: &str) -> bool;

    /// Current number of cached entries.
    fn count(&self) -> usize;
}

// == Shared Cache ==
/// Cloneable, thread-safe cache handle.
///
/// A single lock spans the whole store, so the capacity check, the eviction and
/// the insert of `add` happen as one step. Lookups take the same lock because
/// they update ordering metadata.
#[derive(Debug, Clone)]
pub struct SharedCache {
    inner: Arc<Mutex<CacheStore>>,
}

impl SharedCache {
    /// Creates a shared cache using one of the built-in policies.
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Result<Self> {
        CacheStore::new(capacity, policy).map(Self::from_store)
    }

    /// Creates a shared cache around any strategy implementation.
    pub fn with_strategy(capacity: usize, strategy: Box<dyn EvictionStrategy>) -> Result<Self> {
        CacheStore::with_strategy(capacity, strategy).map(Self::from_store)
    }

    /// Wraps an existing store.
    pub fn from_store(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Forces one eviction, returning the evicted key.
    pub fn evict(&self) -> Option<String> {
        self.inner.lock().evict()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn policy_name(&self) -> &'static str {
        self.inner.lock().policy_name()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Returns true if the strategy tracks exactly the stored keys.
    pub fn is_consistent(&self) -> bool {
        self.inner.lock().is_consistent()
    }
}

impl Cache for SharedCache {
    fn add(&self, key: &str, value: &str) {
        self.inner.lock().add(key, value);
    }

    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key)
    }

    fn remove(&self, key: &str) -> bool {
        self.inner.lock().remove(key)
    }

    fn count(&self) -> usize {
        self.inner.lock().len()
    }
}
