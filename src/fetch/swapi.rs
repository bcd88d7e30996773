//! Star Wars API Client
//!
//! HTTP implementation of [`DataFetcher`] backed by reqwest.

use std::time::Duration;

use tracing::debug;

use crate::error::FetchError;
use crate::fetch::DataFetcher;

// == Swapi Client ==
/// Fetches resources as `{base_url}{id}/`.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    // == Constructor ==
    /// Creates a client rooted at `base_url` with a per-request timeout.
    ///
    /// A missing trailing slash on `base_url` is added.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// URL of the resource for `id`.
    pub fn url_for(&self, id: &str) -> String {
        format!("{}{}/", self.base_url, id)
    }
}

impl DataFetcher for SwapiClient {
    async fn fetch(&self, id: &str) -> Result<String, FetchError> {
        let url = self.url_for(id);
        debug!(%url, "Fetching resource");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let client =
            SwapiClient::new("https://swapi.dev/api/people/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url_for("1"), "https://swapi.dev/api/people/1/");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client =
            SwapiClient::new("http://localhost:8080/people", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url_for("42"), "http://localhost:8080/people/42/");
    }

    #[tokio::test]
    async fn test_fetch_connection_error() {
        // Port 9 (discard) on loopback is closed in test environments
        let client = SwapiClient::new("http://127.0.0.1:9/", Duration::from_secs(2)).unwrap();

        let result = client.fetch("1").await;
        assert!(matches!(result, Err(FetchError::Request(_))));
    }
}
