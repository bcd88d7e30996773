//! Configuration Module
//!
//! Handles loading the cache and demo settings from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{EvictionPolicy, SharedCache};
use crate::error::Result;

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Eviction policy used when the cache is full
    pub policy: EvictionPolicy,
    /// Base URL of the people resource, ids are appended to it
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
    /// Ids `1..=fetch_count` are fetched in the first pass
    pub fetch_count: u32,
    /// Ids `1..=refetch_count` are fetched again to show cache hits
    pub refetch_count: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 5)
    /// - `EVICTION_POLICY` - `lru` or `fifo` (default: lru)
    /// - `API_BASE_URL` - People endpoint (default: https://swapi.dev/api/people/)
    /// - `REQUEST_TIMEOUT` - Request timeout in seconds (default: 10)
    /// - `FETCH_COUNT` - Ids fetched in the first pass (default: 10)
    /// - `REFETCH_COUNT` - Ids fetched again afterwards (default: 3)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.capacity),
            policy: parse_var("EVICTION_POLICY").unwrap_or(defaults.policy),
            api_base_url: env::var("API_BASE_URL").unwrap_or(defaults.api_base_url),
            request_timeout: parse_var("REQUEST_TIMEOUT").unwrap_or(defaults.request_timeout),
            fetch_count: parse_var("FETCH_COUNT").unwrap_or(defaults.fetch_count),
            refetch_count: parse_var("REFETCH_COUNT").unwrap_or(defaults.refetch_count),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Builds the configured cache.
    ///
    /// # Errors
    /// `CacheError::InvalidCapacity` if the configured capacity is zero.
    pub fn build_cache(&self) -> Result<SharedCache> {
        SharedCache::new(self.capacity, self.policy)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 5,
            policy: EvictionPolicy::Lru,
            api_base_url: "https://swapi.dev/api/people/".to_string(),
            request_timeout: 10,
            fetch_count: 10,
            refetch_count: 3,
        }
    }
}
