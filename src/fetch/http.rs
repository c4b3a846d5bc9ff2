//! HTTP document fetching.
//!
//! Wraps a blocking reqwest client and sorts transport failures into the
//! fetch error kinds of [`EipError`].

use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

use super::{FetchResponse, Fetcher};
use crate::error::{EipError, Result};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches documents over HTTP/HTTPS.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher with the default 30-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("leap-eip/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| EipError::Other(anyhow::anyhow!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<FetchResponse> {
        let parsed = parse_url(url)?;
        tracing::debug!("GET {}", parsed);

        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(|e| classify(url, e))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| classify(url, e))?;

        Ok(FetchResponse { status, body })
    }
}

/// Parse `url` and require an http(s) scheme with a host.
pub fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| EipError::FetchInvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(EipError::FetchInvalidUrl {
            url: url.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(EipError::FetchInvalidUrl {
            url: url.to_string(),
            message: "missing host".into(),
        });
    }
    Ok(parsed)
}

fn classify(url: &str, err: reqwest::Error) -> EipError {
    if err.is_timeout() {
        EipError::FetchTimeout {
            url: url.to_string(),
        }
    } else if err.is_builder() {
        EipError::FetchInvalidUrl {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if let Some(status) = err.status() {
        EipError::FetchHttp {
            url: url.to_string(),
            status: status.as_u16(),
        }
    } else {
        EipError::FetchConnection {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
