//! Built-in constants shared by the checks.
//!
//! [`Defaults`] is an immutable value handed to the checker when it is
//! built. Nothing here is global state; tests construct their own.

use serde_json::{json, Value};

/// Domain of the provider selected when no config exists yet.
pub const DEFAULT_PROVIDER: &str = "testprovider.example.org";

/// Path of the definition document relative to the provider's base URL.
pub const DEFINITION_EXPECTED_PATH: &str = "provider.json";

/// Path of the service document relative to the provider's API URL.
pub const EIP_SERVICE_EXPECTED_PATH: &str = "1/config/eip-service.json";

/// Constants the checker needs to build default documents and URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    /// Provider written into a freshly created EIP config.
    pub provider: String,
    /// Definition document path, relative to the provider base URL.
    pub definition_path: String,
    /// Service document path, relative to the provider API URL.
    pub service_path: String,
    /// Overrides both `https://<domain>` and the definition's `api_uri`.
    pub base_url: Option<String>,
    /// Transport written into a fresh EIP config.
    pub transport: String,
    /// OpenVPN protocol written into a fresh EIP config.
    pub openvpn_protocol: String,
    /// OpenVPN port written into a fresh EIP config.
    pub openvpn_port: u16,
    /// Gateway preferred when connecting.
    pub primary_gateway: String,
    /// Gateway used when the primary is unavailable.
    pub secondary_gateway: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            definition_path: DEFINITION_EXPECTED_PATH.to_string(),
            service_path: EIP_SERVICE_EXPECTED_PATH.to_string(),
            base_url: None,
            transport: "openvpn".to_string(),
            openvpn_protocol: "tcp".to_string(),
            openvpn_port: 80,
            primary_gateway: "usa_west".to_string(),
            secondary_gateway: Some("france".to_string()),
        }
    }
}

impl Defaults {
    /// Replace the provider base URL (staging servers, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Replace the default provider domain.
    pub fn with_provider(mut self, domain: impl Into<String>) -> Self {
        self.provider = domain.into();
        self
    }

    /// Base URL for `domain`, without a trailing slash.
    pub fn provider_base_url(&self, domain: &str) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}", domain),
        }
    }

    /// Where the definition document of `domain` is served.
    pub fn definition_url(&self, domain: &str) -> String {
        join_url(&self.provider_base_url(domain), &self.definition_path)
    }

    /// Where the service document is served.
    ///
    /// `api_uri` comes from the provider definition when one is cached.
    pub fn service_url(&self, domain: &str, api_uri: Option<&str>) -> String {
        let base = match (&self.base_url, api_uri) {
            (None, Some(api)) if !api.trim().is_empty() => api.trim_end_matches('/').to_string(),
            _ => self.provider_base_url(domain),
        };
        join_url(&base, &self.service_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Definition document of the built-in test provider.
pub fn default_provider_definition() -> Value {
    json!({
        "api_uri": "https://api.testprovider.example.org/",
        "api_version": "0.1.0",
        "ca_cert_fingerprint": "8aab80ae4326fd30721689db813733783fe0bd7e",
        "ca_cert_uri": "https://testprovider.example.org/cacert.pem",
        "description": {"en": "This is a test provider"},
        "display_name": {"en": "Test Provider"},
        "domain": DEFAULT_PROVIDER,
        "enrollment_policy": "open",
        "public_key": "cb7dbd679f911e85bc2e51bd44afd7308ee19c21",
        "serial": 1,
        "services": ["eip"],
        "version": "0.1.0"
    })
}
