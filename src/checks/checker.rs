//! The configuration checker.
//!
//! [`ConfigChecker`] verifies, and where it can repairs, the three documents
//! an EIP session needs: the local EIP config, the provider definition and
//! the provider's service document.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

use super::runner::{run_steps, CheckState, EipChecks};
use super::validate::{self, ProviderSelection};
use crate::config::{
    ConfigPaths, Defaults, EipConfig, JsonStore, ProviderDefinition, ServiceConfig,
};
use crate::error::{EipError, Result};
use crate::fetch::Fetcher;
use crate::probe::{GatewayProbe, SystemPing};

/// When remote documents are downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Download only when nothing usable is cached.
    #[default]
    IfMissing,
    /// Always download and overwrite the cache.
    Always,
    /// Never download; a missing cache is an error.
    Never,
}

/// Verifies and repairs the EIP configuration of one user.
///
/// # Example
///
/// ```no_run
/// use leap_eip::checks::ConfigChecker;
/// use leap_eip::config::{ConfigPaths, Defaults};
/// use leap_eip::fetch::HttpFetcher;
///
/// let mut checker = ConfigChecker::new(
///     ConfigPaths::new().unwrap(),
///     Defaults::default(),
///     HttpFetcher::new().unwrap(),
/// );
/// let state = checker.run_all().unwrap();
/// assert!(state.is_complete());
/// ```
pub struct ConfigChecker {
    paths: ConfigPaths,
    defaults: Defaults,
    store: JsonStore,
    fetcher: Box<dyn Fetcher>,
    probe: Box<dyn GatewayProbe>,
    policy: FetchPolicy,
    eipconfig: Option<EipConfig>,
    definition: Option<ProviderDefinition>,
    service: Option<ServiceConfig>,
    state: CheckState,
}

impl ConfigChecker {
    /// Create a checker that fetches through `fetcher` and probes gateways
    /// with the system `ping`.
    pub fn new(paths: ConfigPaths, defaults: Defaults, fetcher: impl Fetcher + 'static) -> Self {
        Self {
            paths,
            defaults,
            store: JsonStore::new(),
            fetcher: Box::new(fetcher),
            probe: Box::new(SystemPing::default()),
            policy: FetchPolicy::default(),
            eipconfig: None,
            definition: None,
            service: None,
            state: CheckState::Unverified,
        }
    }

    /// Replace the gateway probe.
    pub fn with_probe(mut self, probe: impl GatewayProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Set when remote documents are downloaded.
    pub fn with_fetch_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn fetch_policy(&self) -> FetchPolicy {
        self.policy
    }

    /// State reached by the last [`ConfigChecker::run_all`].
    pub fn state(&self) -> CheckState {
        self.state
    }

    /// Definition loaded or fetched during this session.
    pub fn definition(&self) -> Option<&ProviderDefinition> {
        self.definition.as_ref()
    }

    /// Service document loaded or fetched during this session.
    pub fn service_config(&self) -> Option<&ServiceConfig> {
        self.service.as_ref()
    }

    /// The EIP config in memory.
    ///
    /// Loaded from disk on first use when the file exists, otherwise built
    /// from defaults without writing anything.
    pub fn eipconfig(&mut self) -> Result<&EipConfig> {
        let config = match self.eipconfig.take() {
            Some(config) => config,
            None => {
                let path = self.paths.eip_config_file();
                if self.store.exists(&path) {
                    self.load_eipconfig(&path)?
                } else {
                    EipConfig::from_defaults(&self.defaults, &self.paths)?
                }
            }
        };
        Ok(self.eipconfig.insert(config))
    }

    /// Drop the in-memory EIP config so the next access re-reads the file.
    pub fn reload_eipconfig(&mut self) -> Result<&EipConfig> {
        self.eipconfig = None;
        self.eipconfig()
    }

    /// Run every check step against this checker.
    ///
    /// Also records the reached state, see [`ConfigChecker::state`].
    pub fn run_all(&mut self) -> Result<CheckState> {
        match run_steps(self) {
            Ok(state) => {
                self.state = state;
                tracing::info!("EIP configuration is {}", state);
                Ok(state)
            }
            Err((step, err)) => {
                self.state = CheckState::Failed(step);
                Err(err)
            }
        }
    }

    /// Make sure the definition of the provider named in `config` is cached.
    pub fn fetch_definition_for<C>(&mut self, config: &C) -> Result<()>
    where
        C: ProviderSelection + ?Sized,
    {
        let domain = validate::provider_domain(config)?.to_string();
        let path = self.paths.definition_file(&domain);
        let url = self.definition_url(&domain);

        let definition: ProviderDefinition =
            self.ensure_cached("provider definition", &domain, &path, &url, |def| {
                check_definition_domain(def, &domain)
            })?;

        if !definition.offers_eip() {
            tracing::warn!("Provider {} does not list the eip service", domain);
        }
        self.definition = Some(definition);
        Ok(())
    }

    /// Make sure the service document of the provider named in `config` is
    /// cached.
    pub fn fetch_eip_service_config_for<C>(&mut self, config: &C) -> Result<()>
    where
        C: ProviderSelection + ?Sized,
    {
        let domain = validate::provider_domain(config)?.to_string();
        let path = self.paths.service_file(&domain);
        let url = self.service_url(&domain);

        let service: ServiceConfig =
            self.ensure_cached("service config", &domain, &path, &url, |_| Ok(()))?;

        if service.gateways.is_empty() {
            tracing::warn!("Provider {} lists no gateways", domain);
        }
        self.service = Some(service);
        Ok(())
    }

    /// URL the definition of `domain` is downloaded from.
    pub fn definition_url(&self, domain: &str) -> String {
        self.defaults.definition_url(domain)
    }

    /// URL the service document of `domain` is downloaded from.
    ///
    /// Uses the `api_uri` of the known definition, if any.
    pub fn service_url(&self, domain: &str) -> String {
        let api_uri = self.api_uri_for(domain);
        self.defaults.service_url(domain, api_uri.as_deref())
    }

    /// Probe a gateway. Never changes any configuration.
    pub fn ping_gateway(&self, host: &str) -> bool {
        let reachable = self.probe.ping(host);
        tracing::debug!(
            "Gateway {} is {}",
            host,
            if reachable { "reachable" } else { "unreachable" }
        );
        reachable
    }

    /// Gateway hosts of the default provider, from the cached service
    /// document.
    pub fn gateway_hosts(&mut self) -> Result<Vec<String>> {
        if let Some(service) = &self.service {
            return Ok(service.gateway_hosts());
        }
        let domain = validate::provider_domain(self.eipconfig()?)?.to_string();
        let path = self.paths.service_file(&domain);
        if !self.store.exists(&path) {
            return Ok(Vec::new());
        }
        let service: ServiceConfig = self.load_cached(&path)?;
        let hosts = service.gateway_hosts();
        self.service = Some(service);
        Ok(hosts)
    }

    fn load_eipconfig(&self, path: &Path) -> Result<EipConfig> {
        let value = self.store.load(path)?;
        EipConfig::from_value(&value, path, &self.paths)
    }

    /// `api_uri` of the cached definition, if any.
    fn api_uri_for(&self, domain: &str) -> Option<String> {
        if let Some(def) = &self.definition {
            if def
                .domain
                .as_deref()
                .map_or(true, |d| d.eq_ignore_ascii_case(domain))
            {
                return def.api_uri.clone();
            }
        }
        let path = self.paths.definition_file(domain);
        if !self.store.exists(&path) {
            return None;
        }
        self.load_cached::<ProviderDefinition>(&path)
            .ok()
            .and_then(|def| def.api_uri)
    }

    fn load_cached<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let value = self.store.load(path)?;
        T::deserialize(&value).map_err(|e| EipError::DocumentParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Return the cached document at `path`, downloading it from `url`
    /// when the fetch policy asks for it.
    ///
    /// A downloaded document is saved exactly as served.
    fn ensure_cached<T, V>(
        &self,
        what: &str,
        domain: &str,
        path: &Path,
        url: &str,
        validate: V,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        V: Fn(&T) -> std::result::Result<(), String>,
    {
        if self.policy != FetchPolicy::Always && self.store.exists(path) {
            match self.load_cached::<T>(path) {
                Ok(doc) => {
                    tracing::debug!("Using cached {} for {}", what, domain);
                    return Ok(doc);
                }
                Err(err) if self.policy == FetchPolicy::Never => return Err(err),
                Err(err) => {
                    tracing::warn!("Cached {} for {} is unusable: {}", what, domain, err);
                }
            }
        }

        if self.policy == FetchPolicy::Never {
            return Err(EipError::Configuration {
                message: format!("no cached {} for {} and downloads are disabled", what, domain),
            });
        }

        let document = self.download(url)?;
        let typed = T::deserialize(&document)
            .map_err(|e| e.to_string())
            .and_then(|doc| validate(&doc).map(|_| doc))
            .map_err(|message| EipError::InvalidDocument {
                url: url.to_string(),
                message,
            })?;

        self.store.save(path, &document)?;
        tracing::info!("Fetched {} for {} from {}", what, domain, url);
        Ok(typed)
    }

    /// GET `url` and parse the body as a JSON object.
    fn download(&self, url: &str) -> Result<Value> {
        let response = self.fetcher.get(url)?;
        if !response.is_ok() {
            return Err(EipError::FetchHttp {
                url: url.to_string(),
                status: response.status,
            });
        }

        let document: Value =
            serde_json::from_str(&response.body).map_err(|e| EipError::InvalidDocument {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        if !document.is_object() {
            return Err(EipError::InvalidDocument {
                url: url.to_string(),
                message: "expected a JSON object".into(),
            });
        }
        Ok(document)
    }
}

fn check_definition_domain(
    definition: &ProviderDefinition,
    domain: &str,
) -> std::result::Result<(), String> {
    match definition.domain.as_deref() {
        Some(served) if !served.eq_ignore_ascii_case(domain) => Err(format!(
            "definition is for '{}', expected '{}'",
            served, domain
        )),
        _ => Ok(()),
    }
}

impl EipChecks for ConfigChecker {
    fn check_default_eipconfig(&mut self) -> Result<()> {
        let path = self.paths.eip_config_file();
        if self.store.exists(&path) {
            tracing::debug!("EIP config present at {}", path.display());
            let config = self.load_eipconfig(&path)?;
            self.eipconfig = Some(config);
            return Ok(());
        }

        let config = EipConfig::from_defaults(&self.defaults, &self.paths)?;
        self.store.save(&path, &config.to_value()?)?;
        tracing::info!("Wrote default EIP config to {}", path.display());
        self.eipconfig = Some(config);
        Ok(())
    }

    fn check_is_there_default_provider(&mut self) -> Result<bool> {
        validate::check_is_there_default_provider(self.eipconfig()?)
    }

    fn fetch_definition(&mut self) -> Result<()> {
        let config = self.eipconfig()?.clone();
        self.fetch_definition_for(&config)
    }

    fn fetch_eip_service_config(&mut self) -> Result<()> {
        let config = self.eipconfig()?.clone();
        self.fetch_eip_service_config_for(&config)
    }

    fn check_complete_eip_config(&mut self) -> Result<()> {
        validate::check_complete_eip_config(self.eipconfig()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::runner::CheckStep;
    use crate::config::default_provider_definition;
    use crate::fetch::FetchResponse;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    const BASE: &str = "https://testprovider.example.org";

    /// Serves canned responses and records requested URLs.
    #[derive(Clone, Default)]
    struct StubFetcher {
        responses: HashMap<String, (u16, String)>,
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl StubFetcher {
        fn serve(mut self, url: &str, status: u16, body: &Value) -> Self {
            self.responses
                .insert(url.to_string(), (status, body.to_string()));
            self
        }

        fn serve_raw(mut self, url: &str, status: u16, body: &str) -> Self {
            self.responses
                .insert(url.to_string(), (status, body.to_string()));
            self
        }
    }

    impl Fetcher for StubFetcher {
        fn get(&self, url: &str) -> Result<FetchResponse> {
            self.requests.borrow_mut().push(url.to_string());
            match self.responses.get(url) {
                Some((status, body)) => Ok(FetchResponse {
                    status: *status,
                    body: body.clone(),
                }),
                None => Err(EipError::FetchConnection {
                    url: url.to_string(),
                    message: "connection refused".into(),
                }),
            }
        }
    }

    struct FixedProbe(bool);

    impl GatewayProbe for FixedProbe {
        fn ping(&self, _host: &str) -> bool {
            self.0
        }
    }

    fn service_document() -> Value {
        json!({
            "serial": 1,
            "version": "0.1.0",
            "capabilities": {"transport": ["openvpn"], "ports": ["80", "53"]},
            "gateways": [
                {"country_code": "us", "label": {"en": "west"}, "hosts": ["1.2.3.4", "1.2.3.5"]}
            ]
        })
    }

    fn sample_config() -> Value {
        json!({
            "provider": "testprovider.example.org",
            "transport": "openvpn",
            "openvpn_protocol": "tcp",
            "openvpn_port": 80,
            "connect_on_login": true,
            "block_cleartext_traffic": true,
            "primary_gateway": "turkey",
            "secondary_gateway": "france"
        })
    }

    fn full_stub() -> StubFetcher {
        StubFetcher::default()
            .serve(
                &format!("{}/provider.json", BASE),
                200,
                &default_provider_definition(),
            )
            .serve(
                "https://api.testprovider.example.org/1/config/eip-service.json",
                200,
                &service_document(),
            )
    }

    fn checker(temp: &TempDir, fetcher: StubFetcher) -> ConfigChecker {
        ConfigChecker::new(
            ConfigPaths::with_base(temp.path()),
            Defaults::default(),
            fetcher,
        )
        .with_probe(FixedProbe(true))
    }

    #[test]
    fn check_default_eipconfig_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, StubFetcher::default());
        let path = checker.paths().eip_config_file();
        assert!(!path.exists());

        checker.check_default_eipconfig().unwrap();

        let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let provider_dir = temp.path().join("providers").join("testprovider.example.org");
        let expected = json!({
            "provider": "testprovider.example.org",
            "transport": "openvpn",
            "openvpn_protocol": "tcp",
            "openvpn_port": 80,
            "openvpn_ca_certificate": provider_dir.join("keys/ca/cacert.pem"),
            "openvpn_client_certificate": provider_dir.join("keys/client/openvpn.pem"),
            "connect_on_login": true,
            "block_cleartext_traffic": true,
            "primary_gateway": "usa_west",
            "secondary_gateway": "france"
        });
        assert_eq!(on_disk, expected);
    }

    #[test]
    fn check_default_eipconfig_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, StubFetcher::default());
        let path = checker.paths().eip_config_file();

        checker.check_default_eipconfig().unwrap();
        let first = fs::read_to_string(&path).unwrap();
        checker.check_default_eipconfig().unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn check_default_eipconfig_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, StubFetcher::default());
        let path = checker.paths().eip_config_file();
        let mut config = sample_config();
        config["provider"] = json!("riseup.net");
        fs::write(&path, config.to_string()).unwrap();

        checker.check_default_eipconfig().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), config.to_string());
        assert_eq!(checker.eipconfig().unwrap().provider_domain(), Some("riseup.net"));
    }

    #[test]
    fn check_default_eipconfig_reports_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, StubFetcher::default());
        fs::write(checker.paths().eip_config_file(), "{ nope").unwrap();

        let err = checker.check_default_eipconfig().unwrap_err();

        assert!(matches!(err, EipError::DocumentParse { .. }));
    }

    #[test]
    fn default_provider_from_loaded_config() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, StubFetcher::default());
        let path = checker.paths().eip_config_file();

        let mut config = sample_config();
        config["provider"] = Value::Null;
        fs::write(&path, config.to_string()).unwrap();
        checker.reload_eipconfig().unwrap();
        assert!(matches!(
            checker.check_is_there_default_provider(),
            Err(EipError::MissingDefaultProvider)
        ));

        fs::write(&path, sample_config().to_string()).unwrap();
        checker.reload_eipconfig().unwrap();
        assert!(checker.check_is_there_default_provider().unwrap());
    }

    #[test]
    fn fetch_definition_saves_served_document() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, full_stub());

        checker.fetch_definition_for(&sample_config()).unwrap();

        let path = temp
            .path()
            .join("providers/testprovider.example.org/provider.json");
        let on_disk: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(on_disk, default_provider_definition());
        assert!(checker.definition().unwrap().offers_eip());
    }

    #[test]
    fn fetch_definition_uses_cache() {
        let temp = TempDir::new().unwrap();
        let stub = full_stub();
        let requests = stub.requests.clone();
        let mut checker = checker(&temp, stub);

        checker.fetch_definition_for(&sample_config()).unwrap();
        checker.fetch_definition_for(&sample_config()).unwrap();

        assert_eq!(requests.borrow().len(), 1);
    }

    #[test]
    fn fetch_definition_always_refetches() {
        let temp = TempDir::new().unwrap();
        let stub = full_stub();
        let requests = stub.requests.clone();
        let mut checker = checker(&temp, stub).with_fetch_policy(FetchPolicy::Always);

        checker.fetch_definition_for(&sample_config()).unwrap();
        checker.fetch_definition_for(&sample_config()).unwrap();

        assert_eq!(requests.borrow().len(), 2);
    }

    #[test]
    fn fetch_definition_offline_without_cache_fails() {
        let temp = TempDir::new().unwrap();
        let stub = full_stub();
        let requests = stub.requests.clone();
        let mut checker = checker(&temp, stub).with_fetch_policy(FetchPolicy::Never);

        let err = checker.fetch_definition_for(&sample_config()).unwrap_err();

        assert!(matches!(err, EipError::Configuration { .. }));
        assert!(requests.borrow().is_empty());
    }

    #[test]
    fn fetch_definition_refetches_corrupt_cache() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, full_stub());
        let path = checker.paths().definition_file("testprovider.example.org");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "garbage").unwrap();

        checker.fetch_definition_for(&sample_config()).unwrap();

        let on_disk: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(on_disk, default_provider_definition());
    }

    #[test]
    fn fetch_definition_non_200_is_http_error() {
        let temp = TempDir::new().unwrap();
        let stub = StubFetcher::default().serve_raw(
            &format!("{}/provider.json", BASE),
            404,
            "not found",
        );
        let mut checker = checker(&temp, stub);

        let err = checker.fetch_definition_for(&sample_config()).unwrap_err();

        assert!(matches!(err, EipError::FetchHttp { status: 404, .. }));
        assert!(!checker
            .paths()
            .definition_file("testprovider.example.org")
            .exists());
    }

    #[test]
    fn fetch_definition_rejects_non_json_body() {
        let temp = TempDir::new().unwrap();
        let stub = StubFetcher::default().serve_raw(
            &format!("{}/provider.json", BASE),
            200,
            "<html>hello</html>",
        );
        let mut checker = checker(&temp, stub);

        let err = checker.fetch_definition_for(&sample_config()).unwrap_err();

        assert!(matches!(err, EipError::InvalidDocument { .. }));
    }

    #[test]
    fn fetch_definition_rejects_json_array() {
        let temp = TempDir::new().unwrap();
        let stub = StubFetcher::default().serve(
            &format!("{}/provider.json", BASE),
            200,
            &json!(["eip"]),
        );
        let mut checker = checker(&temp, stub);

        let err = checker.fetch_definition_for(&sample_config()).unwrap_err();

        assert!(matches!(err, EipError::InvalidDocument { .. }));
    }

    #[test]
    fn fetch_definition_rejects_other_providers_definition() {
        let temp = TempDir::new().unwrap();
        let mut definition = default_provider_definition();
        definition["domain"] = json!("evil.example.com");
        let stub =
            StubFetcher::default().serve(&format!("{}/provider.json", BASE), 200, &definition);
        let mut checker = checker(&temp, stub);

        let err = checker.fetch_definition_for(&sample_config()).unwrap_err();

        assert!(matches!(err, EipError::InvalidDocument { .. }));
    }

    #[test]
    fn fetch_definition_connection_error_propagates() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, StubFetcher::default());

        let err = checker.fetch_definition_for(&sample_config()).unwrap_err();

        assert!(matches!(err, EipError::FetchConnection { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn fetch_definition_needs_provider() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, full_stub());

        let err = checker.fetch_definition_for(&json!({})).unwrap_err();

        assert!(matches!(err, EipError::MissingDefaultProvider));
    }

    #[test]
    fn fetch_service_config_uses_definition_api_uri() {
        let temp = TempDir::new().unwrap();
        let stub = full_stub();
        let requests = stub.requests.clone();
        let mut checker = checker(&temp, stub);

        checker.fetch_definition_for(&sample_config()).unwrap();
        checker.fetch_eip_service_config_for(&sample_config()).unwrap();

        assert_eq!(
            requests.borrow().last().unwrap(),
            "https://api.testprovider.example.org/1/config/eip-service.json"
        );
        let path = checker.paths().service_file("testprovider.example.org");
        let on_disk: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(on_disk, service_document());
    }

    #[test]
    fn fetch_service_config_without_definition_uses_domain() {
        let temp = TempDir::new().unwrap();
        let stub = StubFetcher::default().serve(
            &format!("{}/1/config/eip-service.json", BASE),
            200,
            &service_document(),
        );
        let mut checker = checker(&temp, stub);

        checker.fetch_eip_service_config_for(&sample_config()).unwrap();

        assert_eq!(checker.service_config().unwrap().gateways.len(), 1);
    }

    #[test]
    fn run_all_reaches_complete() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, full_stub());

        let state = checker.run_all().unwrap();

        assert_eq!(state, CheckState::Complete);
        assert_eq!(checker.state(), CheckState::Complete);
        assert!(checker
            .paths()
            .definition_file("testprovider.example.org")
            .exists());
        assert!(checker
            .paths()
            .service_file("testprovider.example.org")
            .exists());
    }

    #[test]
    fn run_all_records_failed_step() {
        let temp = TempDir::new().unwrap();
        let stub = StubFetcher::default().serve(
            &format!("{}/provider.json", BASE),
            200,
            &default_provider_definition(),
        );
        let mut checker = checker(&temp, stub);

        let err = checker.run_all().unwrap_err();

        assert!(matches!(err, EipError::FetchConnection { .. }));
        assert_eq!(checker.state(), CheckState::Failed(CheckStep::ServiceConfig));
    }

    #[test]
    fn run_all_fails_on_missing_provider() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, full_stub());
        let mut config = sample_config();
        config["provider"] = Value::Null;
        fs::write(checker.paths().eip_config_file(), config.to_string()).unwrap();

        let err = checker.run_all().unwrap_err();

        assert!(matches!(err, EipError::MissingDefaultProvider));
        assert_eq!(
            checker.state(),
            CheckState::Failed(CheckStep::DefaultProvider)
        );
    }

    #[test]
    fn gateway_hosts_from_cached_service() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, full_stub());
        checker.run_all().unwrap();

        let mut fresh = ConfigChecker::new(
            ConfigPaths::with_base(temp.path()),
            Defaults::default(),
            StubFetcher::default(),
        );
        assert_eq!(fresh.gateway_hosts().unwrap(), vec!["1.2.3.4"]);
    }

    #[test]
    fn gateway_hosts_empty_without_cache() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, StubFetcher::default());
        assert!(checker.gateway_hosts().unwrap().is_empty());
    }

    #[test]
    fn ping_gateway_delegates_to_probe() {
        let temp = TempDir::new().unwrap();
        let up = checker(&temp, StubFetcher::default());
        assert!(up.ping_gateway("1.2.3.4"));

        let down = checker(&temp, StubFetcher::default()).with_probe(FixedProbe(false));
        assert!(!down.ping_gateway("1.2.3.4"));
    }

    #[test]
    fn eipconfig_without_file_does_not_write() {
        let temp = TempDir::new().unwrap();
        let mut checker = checker(&temp, StubFetcher::default());

        let config = checker.eipconfig().unwrap();

        assert_eq!(config.provider_domain(), Some("testprovider.example.org"));
        assert!(!temp.path().join("eip.json").exists());
    }
}
