//! EIP configuration checks.
//!
//! A check run moves through a fixed sequence of steps:
//!
//! ```text
//! UNVERIFIED -> HAS_LOCAL_CONFIG -> HAS_DEFAULT_PROVIDER
//!            -> HAS_DEFINITION -> HAS_SERVICE_CONFIG -> COMPLETE
//! ```
//!
//! Every step is idempotent. The first failing step ends the run and its
//! error is returned as is; retrying means calling [`run_all`] again.
//!
//! # Example
//!
//! ```
//! use leap_eip::checks::{check_complete_eip_config, check_is_there_default_provider};
//! use serde_json::json;
//!
//! assert!(check_is_there_default_provider(&json!({})).is_err());
//! assert!(check_complete_eip_config(&json!({"provider": "example.org"})).is_ok());
//! ```

pub mod checker;
pub mod runner;
pub mod validate;

pub use checker::{ConfigChecker, FetchPolicy};
pub use runner::{run_all, CheckState, CheckStep, EipChecks};
pub use validate::{
    check_complete_eip_config, check_is_there_default_provider, provider_domain, ProviderEntry,
    ProviderSelection,
};
