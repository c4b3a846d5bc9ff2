//! Service document (`eip-service.json`): the provider's gateway list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Typed view of a provider's EIP service document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub serial: Option<u64>,

    /// Providers publish this as either a number or a string.
    #[serde(default)]
    pub version: Option<Value>,

    /// Transports, ports and protocols offered across gateways.
    #[serde(default)]
    pub capabilities: Option<Value>,

    #[serde(default)]
    pub gateways: Vec<Gateway>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One gateway entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gateway {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub ip_address: Option<String>,

    /// Older documents list addresses here instead of `host`/`ip_address`.
    #[serde(default)]
    pub hosts: Vec<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub country_code: Option<String>,

    #[serde(default)]
    pub capabilities: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Gateway {
    /// Addresses usable for reachability probes, preferring the IP address.
    pub fn addresses(&self) -> Vec<&str> {
        let mut out = Vec::new();
        if let Some(ip) = self.ip_address.as_deref() {
            out.push(ip);
        }
        if let Some(host) = self.host.as_deref() {
            out.push(host);
        }
        out.extend(self.hosts.iter().map(String::as_str));
        out
    }
}

impl ServiceConfig {
    /// First address of every gateway, in document order, without duplicates.
    pub fn gateway_hosts(&self) -> Vec<String> {
        let mut hosts: Vec<String> = Vec::new();
        for gateway in &self.gateways {
            if let Some(addr) = gateway.addresses().first() {
                if !hosts.iter().any(|h| h == addr) {
                    hosts.push((*addr).to_string());
                }
            }
        }
        hosts
    }
}
