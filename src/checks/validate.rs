//! Provider gates.
//!
//! Both gates look only at the `provider` entry of a configuration. They
//! accept anything implementing [`ProviderSelection`]: the typed
//! [`EipConfig`], or a raw JSON mapping as read from disk.

use serde_json::{Map, Value};

use crate::config::{is_provider_domain, EipConfig};
use crate::error::{EipError, Result};

/// What a configuration holds under its `provider` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderEntry<'a> {
    /// The key is not there (or the mapping is empty).
    Absent,
    /// The key is there with a null value.
    Null,
    /// An empty or whitespace-only string.
    Blank,
    /// Something other than a string.
    NotAString,
    /// A string that is not a plain host name, such as `../x` or `a/b`.
    Malformed(&'a str),
    /// A usable provider domain.
    Domain(&'a str),
}

impl<'a> ProviderEntry<'a> {
    /// Classify a string value.
    fn from_str_value(value: &'a str) -> Self {
        let domain = value.trim();
        if domain.is_empty() {
            Self::Blank
        } else if is_provider_domain(domain) {
            Self::Domain(domain)
        } else {
            Self::Malformed(domain)
        }
    }
}

/// A configuration that can name a default provider.
pub trait ProviderSelection {
    /// Inspect the `provider` entry.
    fn provider_entry(&self) -> ProviderEntry<'_>;
}

impl ProviderSelection for EipConfig {
    fn provider_entry(&self) -> ProviderEntry<'_> {
        match self.provider.as_deref() {
            None => ProviderEntry::Null,
            Some(p) => ProviderEntry::from_str_value(p),
        }
    }
}

impl ProviderSelection for Map<String, Value> {
    fn provider_entry(&self) -> ProviderEntry<'_> {
        match self.get("provider") {
            None => ProviderEntry::Absent,
            Some(Value::Null) => ProviderEntry::Null,
            Some(Value::String(p)) => ProviderEntry::from_str_value(p),
            Some(_) => ProviderEntry::NotAString,
        }
    }
}

impl ProviderSelection for Value {
    fn provider_entry(&self) -> ProviderEntry<'_> {
        match self.as_object() {
            Some(map) => map.provider_entry(),
            None => ProviderEntry::Absent,
        }
    }
}

/// The provider domain named by `config`.
///
/// Fails with [`EipError::MissingDefaultProvider`] unless the entry is a
/// non-blank string, and with [`EipError::Configuration`] when that string
/// is not a plain host name.
pub fn provider_domain<C: ProviderSelection + ?Sized>(config: &C) -> Result<&str> {
    match config.provider_entry() {
        ProviderEntry::Domain(domain) => Ok(domain),
        ProviderEntry::Malformed(value) => Err(malformed(value)),
        _ => Err(EipError::MissingDefaultProvider),
    }
}

fn malformed(value: &str) -> EipError {
    EipError::Configuration {
        message: format!("'provider' value {:?} is not a valid domain", value),
    }
}

/// Check that `config` names a default provider.
///
/// Returns `true` on success so callers can use it as a confirmation.
pub fn check_is_there_default_provider<C>(config: &C) -> Result<bool>
where
    C: ProviderSelection + ?Sized,
{
    provider_domain(config).map(|_| true)
}

/// Final completeness gate for an EIP configuration.
pub fn check_complete_eip_config<C: ProviderSelection + ?Sized>(config: &C) -> Result<()> {
    let message = match config.provider_entry() {
        ProviderEntry::Domain(_) => return Ok(()),
        ProviderEntry::Malformed(value) => return Err(malformed(value)),
        ProviderEntry::Absent => "the 'provider' key is missing",
        ProviderEntry::Null => "'provider' is null",
        ProviderEntry::Blank => "'provider' is empty",
        ProviderEntry::NotAString => "'provider' is not a string",
    };
    Err(EipError::Configuration {
        message: message.to_string(),
    })
}
