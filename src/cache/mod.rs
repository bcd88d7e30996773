//! Cache Module
//!
//! Provides a fixed-capacity in-memory cache with pluggable eviction strategies.

mod entry;
mod eviction;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use eviction::{EvictionPolicy, EvictionStrategy, FifoStrategy, LruStrategy};
pub use shared::{Cache, SharedCache};
pub use stats::CacheStats;
pub use store::CacheStore;
