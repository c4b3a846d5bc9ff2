//! Remote document fetching.
//!
//! The checker only sees the [`Fetcher`] trait, so tests can serve documents
//! without a network. [`HttpFetcher`] is the production implementation.

pub mod http;

pub use http::{parse_url, HttpFetcher, DEFAULT_TIMEOUT};

use crate::error::Result;

/// Raw response to a GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl FetchResponse {
    /// Whether the status is exactly 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Performs GET requests.
///
/// Implementations return any HTTP status as a response; only transport
/// failures (connection, timeout, invalid URL) are errors.
pub trait Fetcher {
    /// Fetch `url`.
    fn get(&self, url: &str) -> Result<FetchResponse>;
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn get(&self, url: &str) -> Result<FetchResponse> {
        (**self).get(url)
    }
}
