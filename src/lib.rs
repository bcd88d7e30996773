//! Policy Cache - A fixed-capacity in-memory cache
//!
//! Provides a thread-safe key-value cache with pluggable LRU and FIFO eviction,
//! plus a read-through loader for populating it from a remote API.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod models;

pub use cache::{Cache, CacheStore, EvictionPolicy, EvictionStrategy, SharedCache};
pub use config::Config;
pub use loader::{fetch_through, Lookup};
