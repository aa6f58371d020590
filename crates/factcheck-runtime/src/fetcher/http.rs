//! Blocking HTTP implementation of the fetch capability.

use tracing::debug;

use super::{FetchError, Fetcher, FETCH_TIMEOUT};

/// Fetches the fact source over HTTP with a fixed request timeout.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the standard timeout.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching fact");

        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        response
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}
