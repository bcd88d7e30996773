//! Data Fetch Module
//!
//! The collaborator that produces payloads on a cache miss. The cache itself
//! never depends on this module.

use std::future::Future;

use crate::error::FetchError;

mod swapi;

pub use swapi::SwapiClient;

// == Data Fetcher ==
/// Fetches a text payload by identifier.
pub trait DataFetcher: Send + Sync {
    /// Fetches the payload for `id`.
    fn fetch(&self, id: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}
