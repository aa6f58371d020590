//! Fetch capability for the fact source.
//!
//! Fetching is a single blocking call returning the raw response body.
//! The trait exists so the checker can be exercised against stub
//! fetchers in tests; [`HttpFetcher`] is the production implementation.

use std::time::Duration;

use thiserror::Error;

mod http;

pub use http::HttpFetcher;

/// Request timeout for the fact source.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(3);

/// Errors on the way from the fact source to extracted fact text.
///
/// Transport and structural failures are distinct kinds so the caller
/// can render a specific diagnostic for each.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request itself failed: network, timeout, protocol.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body is not the expected JSON shape.
    #[error("cannot parse the response body: {0}")]
    Malformed(String),

    /// The payload parsed but carries no `fact` field.
    #[error("the fact field doesn't exist. The original JSON is: {payload}")]
    MissingField { payload: String },
}

/// A capability that fetches a URL and returns the raw body.
pub trait Fetcher: Send + Sync {
    /// Fetch the provided url.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
