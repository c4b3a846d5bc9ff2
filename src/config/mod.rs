//! Configuration documents, locations and storage.
//!
//! - Built-in constants in [`defaults`]
//! - Per-user file locations in [`paths`]
//! - The local EIP config in [`eip`]
//! - Remote documents in [`provider`] and [`service`]
//! - JSON file storage in [`store`]
//!
//! # Example
//!
//! ```
//! use leap_eip::config::{ConfigPaths, Defaults, EipConfig};
//!
//! let paths = ConfigPaths::with_base("/tmp/leap");
//! let config = EipConfig::from_defaults(&Defaults::default(), &paths).unwrap();
//! assert_eq!(config.provider_domain(), Some("testprovider.example.org"));
//! ```

pub mod defaults;
pub mod eip;
pub mod paths;
pub mod provider;
pub mod service;
pub mod store;

pub use defaults::{
    default_provider_definition, Defaults, DEFAULT_PROVIDER, DEFINITION_EXPECTED_PATH,
    EIP_SERVICE_EXPECTED_PATH,
};
pub use eip::EipConfig;
pub use paths::{is_provider_domain, ConfigPaths};
pub use provider::ProviderDefinition;
pub use service::{Gateway, ServiceConfig};
pub use store::JsonStore;
