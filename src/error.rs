//! Error types for the cache and its data-fetch collaborator
//!
//! Provides unified error handling using thiserror. Lookups of absent keys
//! are not errors; they surface as `None`.

use reqwest::StatusCode;
use thiserror::Error;

// == Cache Error Enum ==
/// Configuration errors raised while building a cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity must be at least one entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Eviction policy name did not match a known policy
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),
}

// == Fetch Error Enum ==
/// Failures of the data-fetch collaborator.
///
/// These propagate to whoever called the fetcher and never alter cache state.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, body read)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Requested URL
        url: String,
    },
}

// == Result Type Alias ==
/// Convenience Result type for cache construction.
pub type Result<T> = std::result::Result<T, CacheError>;
