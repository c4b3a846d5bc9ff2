//! leap-eip - EIP configuration checker for LEAP VPN clients.
//!
//! Before an encrypted tunnel can be brought up, the client must hold a
//! local EIP configuration that names a default provider, that provider's
//! definition document, and its service document listing gateways. The
//! checker establishes each of these in order, fetching what is missing.
//!
//! # Modules
//!
//! - [`checks`] - The check steps, the checker and the step runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Documents, defaults and on-disk layout
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - HTTP retrieval of provider documents
//! - [`probe`] - Gateway reachability probes
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use leap_eip::checks::check_is_there_default_provider;
//! use leap_eip::EipError;
//! use serde_json::json;
//!
//! let err = check_is_there_default_provider(&json!({"provider": null})).unwrap_err();
//! assert!(matches!(err, EipError::MissingDefaultProvider));
//! ```
//!
//! For checks against a served provider, see the integration tests.

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod probe;
pub mod ui;

pub use error::{EipError, Result};
