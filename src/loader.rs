//! Read-Through Loader
//!
//! Serves lookups from the cache and falls back to a [`DataFetcher`] on a miss.

use tracing::{debug, info};

use crate::cache::Cache;
use crate::error::FetchError;
use crate::fetch::DataFetcher;

/// Where a read-through value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Served from the cache
    Hit(String),
    /// Fetched and then cached
    Miss(String),
}

impl Lookup {
    pub fn value(&self) -> &str {
        match self {
            Lookup::Hit(value) | Lookup::Miss(value) => value,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Lookup::Hit(value) | Lookup::Miss(value) => value,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Lookup::Hit(_))
    }
}

// == Fetch Through ==
/// Returns the cached payload for `id`, fetching and caching it on a miss.
///
/// Fetch failures are returned as-is and leave the cache untouched.
pub async fn fetch_through<C, F>(cache: &C, fetcher: &F, id: &str) -> Result<Lookup, FetchError>
where
    C: Cache + ?Sized,
    F: DataFetcher,
{
    if let Some(value) = cache.get(id) {
        debug!(id, "Served from cache");
        return Ok(Lookup::Hit(value));
    }

    info!(id, "Cache miss, fetching");
    let value = fetcher.fetch(id).await?;
    cache.add(id, &value);
    Ok(Lookup::Miss(value))
}
