//! Eviction Module
//!
//! The strategy abstraction consulted by the cache store, plus the built-in policies.
//!
//! A strategy tracks ordering metadata for the keys the store holds and names the
//! next victim. It never sees the stored values: `evict` returns a key and the
//! store removes it.

use std::fmt;
use std::str::FromStr;

use crate::error::CacheError;

mod fifo;
mod lru;

pub use fifo::FifoStrategy;
pub use lru::LruStrategy;

// == Eviction Strategy ==
/// Ordering policy plugged into a [`CacheStore`](crate::cache::CacheStore).
///
/// New policies are added by implementing this trait; the store does not change.
pub trait EvictionStrategy: Send + fmt::Debug {
    /// A key was inserted or replaced. Must not create duplicate tracking.
    fn on_add(&mut self, key: &str);

    /// A stored key was read.
    fn on_access(&mut self, key: &str);

    /// A key left the store outside of eviction.
    fn on_remove(&mut self, _key: &str) {}

    /// Stops tracking and returns the next victim, or `None` when nothing is tracked.
    fn evict(&mut self) -> Option<String>;

    /// Number of tracked keys.
    fn len(&self) -> usize;

    /// Returns true if no keys are tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if a key is being tracked.
    fn contains(&self, key: &str) -> bool;

    /// Short policy name for logging.
    fn name(&self) -> &'static str;
}

// == Eviction Policy ==
/// The built-in policies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Least recently used
    #[default]
    Lru,
    /// First in, first out
    Fifo,
}

impl EvictionPolicy {
    /// Creates a fresh strategy for this policy.
    pub fn build(self) -> Box<dyn EvictionStrategy> {
        match self {
            EvictionPolicy::Lru => Box::new(LruStrategy::new()),
            EvictionPolicy::Fifo => Box::new(FifoStrategy::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EvictionPolicy::Lru => "lru",
            EvictionPolicy::Fifo => "fifo",
        }
    }
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(EvictionPolicy::Lru),
            "fifo" => Ok(EvictionPolicy::Fifo),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("lru".parse::<EvictionPolicy>(), Ok(EvictionPolicy::Lru));
        assert_eq!("FIFO".parse::<EvictionPolicy>(), Ok(EvictionPolicy::Fifo));
        assert_eq!(" Lru ".parse::<EvictionPolicy>(), Ok(EvictionPolicy::Lru));
        assert_eq!(
            "lfu".parse::<EvictionPolicy>(),
            Err(CacheError::UnknownPolicy("lfu".to_string()))
        );
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in [EvictionPolicy::Lru, EvictionPolicy::Fifo] {
            assert_eq!(policy.to_string().parse::<EvictionPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_policy_build() {
        assert_eq!(EvictionPolicy::Lru.build().name(), "lru");
        assert_eq!(EvictionPolicy::Fifo.build().name(), "fifo");
        assert!(EvictionPolicy::default().build().is_empty());
    }

    #[test]
    fn test_evict_empty_strategies() {
        for policy in [EvictionPolicy::Lru, EvictionPolicy::Fifo] {
            let mut strategy = policy.build();
            assert_eq!(strategy.evict(), None);
            assert!(strategy.is_empty());
        }
    }
}
