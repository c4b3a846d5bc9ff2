//! Error types for EIP configuration checks.
//!
//! This module defines [`EipError`], the error type returned by every
//! check step, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each precondition failure has its own variant so callers can match on
//!   the kind instead of the message
//! - Transport failures are split into connection, timeout, HTTP status and
//!   invalid URL so a caller can choose between retrying and aborting
//! - Local I/O failures are passed through unchanged via [`EipError::Io`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for EIP configuration checks.
#[derive(Debug, Error)]
pub enum EipError {
    /// The EIP config does not name a default provider.
    #[error("No default provider is configured")]
    MissingDefaultProvider,

    /// The EIP configuration is incomplete or inconsistent.
    #[error("Incomplete EIP configuration: {message}")]
    Configuration { message: String },

    /// Could not reach the remote host.
    #[error("Connection failed fetching {url}: {message}")]
    FetchConnection { url: String, message: String },

    /// The remote host did not answer in time.
    #[error("Timed out fetching {url}")]
    FetchTimeout { url: String },

    /// The remote host answered with something other than 200.
    #[error("HTTP {status} fetching {url}")]
    FetchHttp { url: String, status: u16 },

    /// The URL built for a provider document is not a valid URL.
    #[error("Invalid URL '{url}': {message}")]
    FetchInvalidUrl { url: String, message: String },

    /// A fetched document is not a JSON object of the expected shape.
    #[error("Invalid document from {url}: {message}")]
    InvalidDocument { url: String, message: String },

    /// A document on disk could not be parsed.
    #[error("Failed to parse {path}: {message}")]
    DocumentParse { path: PathBuf, message: String },

    /// The per-user configuration directory could not be determined.
    #[error("Could not resolve configuration path: {message}")]
    PathResolution { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EipError {
    /// Stable identifier for this kind of failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingDefaultProvider => "missing-default-provider",
            Self::Configuration { .. } => "eip-configuration",
            Self::FetchConnection { .. } => "fetch-connection",
            Self::FetchTimeout { .. } => "fetch-timeout",
            Self::FetchHttp { .. } => "fetch-http",
            Self::FetchInvalidUrl { .. } => "fetch-invalid-url",
            Self::InvalidDocument { .. } => "invalid-document",
            Self::DocumentParse { .. } => "document-parse",
            Self::PathResolution { .. } => "path-resolution",
            Self::Io(_) => "io",
            Self::Other(_) => "other",
        }
    }

    /// Whether re-running the failed step later may succeed without any
    /// change to the local configuration.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::FetchConnection { .. } | Self::FetchTimeout { .. } => true,
            Self::FetchHttp { status, .. } => {
                *status >= 500 || *status == 408 || *status == 429
            }
            _ => false,
        }
    }

    /// Whether the failure happened while talking to the provider.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::FetchConnection { .. }
                | Self::FetchTimeout { .. }
                | Self::FetchHttp { .. }
                | Self::FetchInvalidUrl { .. }
                | Self::InvalidDocument { .. }
        )
    }
}

/// Result type alias for EIP operations.
pub type Result<T> = std::result::Result<T, EipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_default_provider_message() {
        let err = EipError::MissingDefaultProvider;
        assert!(err.to_string().contains("default provider"));
        assert_eq!(err.kind(), "missing-default-provider");
    }

    #[test]
    fn configuration_error_displays_message() {
        let err = EipError::Configuration {
            message: "provider is null".into(),
        };
        assert!(err.to_string().contains("provider is null"));
    }

    #[test]
    fn fetch_http_displays_status_and_url() {
        let err = EipError::FetchHttp {
            url: "https://example.org/provider.json".into(),
            status: 404,
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("https://example.org/provider.json"));
    }

    #[test]
    fn document_parse_displays_path() {
        let err = EipError::DocumentParse {
            path: PathBuf::from("/home/u/.config/leap/eip.json"),
            message: "expected value".into(),
        };
        assert!(err.to_string().contains("eip.json"));
    }

    #[test]
    fn connection_and_timeout_are_retryable() {
        let conn = EipError::FetchConnection {
            url: "https://a".into(),
            message: "refused".into(),
        };
        let timeout = EipError::FetchTimeout {
            url: "https://a".into(),
        };
        assert!(conn.is_retryable());
        assert!(timeout.is_retryable());
    }

    #[test]
    fn server_errors_are_retryable_client_errors_are_not() {
        let server = EipError::FetchHttp {
            url: "https://a".into(),
            status: 503,
        };
        let throttled = EipError::FetchHttp {
            url: "https://a".into(),
            status: 429,
        };
        let missing = EipError::FetchHttp {
            url: "https://a".into(),
            status: 404,
        };
        assert!(server.is_retryable());
        assert!(throttled.is_retryable());
        assert!(!missing.is_retryable());
    }

    #[test]
    fn invalid_url_is_not_retryable() {
        let err = EipError::FetchInvalidUrl {
            url: "https://".into(),
            message: "empty host".into(),
        };
        assert!(!err.is_retryable());
        assert!(err.is_fetch_error());
        assert_eq!(err.kind(), "fetch-invalid-url");
    }

    #[test]
    fn validation_errors_are_not_fetch_errors() {
        assert!(!EipError::MissingDefaultProvider.is_fetch_error());
        assert!(!EipError::Configuration {
            message: "x".into()
        }
        .is_fetch_error());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: EipError = io_err.into();
        assert!(matches!(err, EipError::Io(_)));
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(EipError::MissingDefaultProvider)
        }
        assert!(returns_error().is_err());
    }
}
