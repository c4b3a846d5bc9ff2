//! Per-user configuration paths.
//!
//! Everything lives under a single root (`~/.config/leap` on Linux):
//!
//! ```text
//! <root>/eip.json
//! <root>/providers/<domain>/provider.json
//! <root>/providers/<domain>/eip-service.json
//! <root>/providers/<domain>/keys/client/openvpn.pem
//! <root>/providers/<domain>/keys/ca/cacert.pem
//! ```

use std::path::{Path, PathBuf};

use crate::error::{EipError, Result};

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "leap";

/// File name of the top-level EIP config.
pub const EIP_CONFIG_FILE: &str = "eip.json";

/// File name of a cached provider definition.
pub const DEFINITION_FILE: &str = "provider.json";

/// File name of a cached service (gateway list) document.
pub const SERVICE_FILE: &str = "eip-service.json";

/// Whether `domain` can name a directory under `providers/`.
///
/// Accepts plain host names only: ASCII letters, digits, `-`, `_` and `.`,
/// not starting with `.` or `-`, and without empty labels.
pub fn is_provider_domain(domain: &str) -> bool {
    !domain.is_empty()
        && !domain.starts_with(['.', '-'])
        && !domain.contains("..")
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Resolved configuration locations for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    root: PathBuf,
}

impl ConfigPaths {
    /// Resolve the platform config directory.
    pub fn new() -> Result<Self> {
        let root = dirs::config_dir()
            .ok_or_else(|| EipError::PathResolution {
                message: "could not determine the user config directory".into(),
            })?
            .join(APP_DIR);
        Ok(Self { root })
    }

    /// Use `base` as the root directory (for tests and `--config-dir`).
    pub fn with_base(base: impl AsRef<Path>) -> Self {
        Self {
            root: base.as_ref().to_path_buf(),
        }
    }

    /// The root configuration directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the top-level EIP config.
    pub fn eip_config_file(&self) -> PathBuf {
        self.root.join(EIP_CONFIG_FILE)
    }

    /// Directory holding everything cached for `domain`.
    ///
    /// Callers check `domain` with [`is_provider_domain`] first.
    pub fn provider_dir(&self, domain: &str) -> PathBuf {
        self.root.join("providers").join(domain)
    }

    /// Where the definition document for `domain` is cached.
    pub fn definition_file(&self, domain: &str) -> PathBuf {
        self.provider_dir(domain).join(DEFINITION_FILE)
    }

    /// Where the service document for `domain` is cached.
    pub fn service_file(&self, domain: &str) -> PathBuf {
        self.provider_dir(domain).join(SERVICE_FILE)
    }

    /// Expected location of the OpenVPN client certificate.
    pub fn client_cert_file(&self, domain: &str) -> PathBuf {
        self.provider_dir(domain)
            .join("keys")
            .join("client")
            .join("openvpn.pem")
    }

    /// Expected location of the provider CA certificate.
    pub fn provider_ca_file(&self, domain: &str) -> PathBuf {
        self.provider_dir(domain)
            .join("keys")
            .join("ca")
            .join("cacert.pem")
    }

    /// Make `path` absolute against the current directory if it is relative.
    ///
    /// Certificate paths are written to disk in this form.
    pub fn absolute(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        Ok(std::env::current_dir()?.join(path))
    }
}
