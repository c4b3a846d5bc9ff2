//! Provider definition document (`provider.json`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Typed view of a provider definition.
///
/// Only used to validate what the provider serves. The cached file is the
/// document exactly as it was fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderDefinition {
    #[serde(default)]
    pub domain: Option<String>,

    /// Base URL of the provider API.
    #[serde(default)]
    pub api_uri: Option<String>,

    #[serde(default)]
    pub api_version: Option<String>,

    #[serde(default)]
    pub ca_cert_uri: Option<String>,

    #[serde(default)]
    pub ca_cert_fingerprint: Option<String>,

    /// Localized names keyed by language code.
    #[serde(default)]
    pub display_name: BTreeMap<String, String>,

    #[serde(default)]
    pub description: BTreeMap<String, String>,

    #[serde(default)]
    pub enrollment_policy: Option<String>,

    #[serde(default)]
    pub serial: Option<u64>,

    /// Services offered, e.g. `["eip"]`.
    #[serde(default)]
    pub services: Vec<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProviderDefinition {
    /// Whether the provider advertises the EIP service.
    pub fn offers_eip(&self) -> bool {
        self.services.iter().any(|s| s == "eip")
    }

    /// Display name in `lang`, falling back to English, then the domain.
    pub fn name(&self, lang: &str) -> Option<&str> {
        self.display_name
            .get(lang)
            .or_else(|| self.display_name.get("en"))
            .map(String::as_str)
            .or(self.domain.as_deref())
    }
}
