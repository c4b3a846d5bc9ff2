//! The top-level EIP config document (`eip.json`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::defaults::Defaults;
use super::paths::{is_provider_domain, ConfigPaths};
use crate::error::{EipError, Result};

/// Local EIP configuration.
///
/// Recognized keys are typed fields. Anything else found in the file is
/// kept in [`EipConfig::extra`] and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EipConfig {
    /// Domain of the selected default provider.
    #[serde(default)]
    pub provider: Option<String>,

    #[serde(default = "default_transport")]
    pub transport: String,

    #[serde(default = "default_protocol")]
    pub openvpn_protocol: String,

    #[serde(default = "default_port")]
    pub openvpn_port: u16,

    /// Absolute path of the provider CA certificate.
    #[serde(default)]
    pub openvpn_ca_certificate: PathBuf,

    /// Absolute path of the client certificate.
    #[serde(default)]
    pub openvpn_client_certificate: PathBuf,

    #[serde(default = "default_true")]
    pub connect_on_login: bool,

    #[serde(default = "default_true")]
    pub block_cleartext_traffic: bool,

    #[serde(default = "default_primary_gateway")]
    pub primary_gateway: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_gateway: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_password: Option<String>,

    /// Unrecognized keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_transport() -> String {
    Defaults::default().transport
}

fn default_protocol() -> String {
    Defaults::default().openvpn_protocol
}

fn default_port() -> u16 {
    Defaults::default().openvpn_port
}

fn default_primary_gateway() -> String {
    Defaults::default().primary_gateway
}

fn default_true() -> bool {
    true
}

impl EipConfig {
    /// Build the built-in default config.
    ///
    /// Certificate paths are resolved now, against `paths`, and stored as
    /// absolute paths.
    pub fn from_defaults(defaults: &Defaults, paths: &ConfigPaths) -> Result<Self> {
        let provider = defaults.provider.clone();
        if !is_provider_domain(&provider) {
            return Err(EipError::Configuration {
                message: format!("default provider {:?} is not a valid domain", provider),
            });
        }
        Ok(Self {
            openvpn_ca_certificate: ConfigPaths::absolute(&paths.provider_ca_file(&provider))?,
            openvpn_client_certificate: ConfigPaths::absolute(
                &paths.client_cert_file(&provider),
            )?,
            provider: Some(provider),
            transport: defaults.transport.clone(),
            openvpn_protocol: defaults.openvpn_protocol.clone(),
            openvpn_port: defaults.openvpn_port,
            connect_on_login: true,
            block_cleartext_traffic: true,
            primary_gateway: defaults.primary_gateway.clone(),
            secondary_gateway: defaults.secondary_gateway.clone(),
            management_password: None,
            extra: Map::new(),
        })
    }

    /// Parse a loaded document.
    ///
    /// `path` is only used for error reporting. Missing certificate paths
    /// are filled in from `paths` when a provider is set.
    pub fn from_value(value: &Value, path: &Path, paths: &ConfigPaths) -> Result<Self> {
        if !value.is_object() {
            return Err(EipError::DocumentParse {
                path: path.to_path_buf(),
                message: "expected a JSON object".into(),
            });
        }
        let mut config = Self::deserialize(value).map_err(|e| EipError::DocumentParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.fill_certificate_paths(paths)?;
        Ok(config)
    }

    /// Serialize to a JSON value for the document store.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| EipError::Other(e.into()))
    }

    /// The provider domain, if one is set and is a plain host name.
    pub fn provider_domain(&self) -> Option<&str> {
        self.provider
            .as_deref()
            .map(str::trim)
            .filter(|p| is_provider_domain(p))
    }

    fn fill_certificate_paths(&mut self, paths: &ConfigPaths) -> Result<()> {
        let Some(domain) = self.provider_domain().map(str::to_string) else {
            return Ok(());
        };
        if self.openvpn_ca_certificate.as_os_str().is_empty() {
            self.openvpn_ca_certificate = ConfigPaths::absolute(&paths.provider_ca_file(&domain))?;
        }
        if self.openvpn_client_certificate.as_os_str().is_empty() {
            self.openvpn_client_certificate =
                ConfigPaths::absolute(&paths.client_cert_file(&domain))?;
        }
        Ok(())
    }
}
