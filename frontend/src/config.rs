use std::sync::OnceLock;

use log::{debug, info, warn};
use shared::{ResolvedEndpoint, Result};

#[cfg(target_arch = "wasm32")]
use shared::ConfigError;

/// Supplies the hostname the page believes it is running on.
pub trait HostnameSource {
    fn hostname(&self) -> String;
}

/// Hostname known ahead of time, e.g. when embedding outside a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHostname(pub String);

impl FixedHostname {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self(hostname.into())
    }
}

impl HostnameSource for FixedHostname {
    fn hostname(&self) -> String {
        self.0.clone()
    }
}

/// Reads `window.location.hostname`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLocation;

#[cfg(target_arch = "wasm32")]
impl BrowserLocation {
    pub fn read(&self) -> Result<String> {
        let window = web_sys::window()
            .ok_or_else(|| ConfigError::Unavailable("window not found".to_string()))?;
        window
            .location()
            .hostname()
            .map_err(|e| ConfigError::Unavailable(format!("location.hostname failed: {:?}", e)))
    }
}

#[cfg(target_arch = "wasm32")]
impl HostnameSource for BrowserLocation {
    fn hostname(&self) -> String {
        hostname_or_empty(self.read())
    }
}

/// No fallback host: an unavailable hostname resolves as empty
pub fn hostname_or_empty(read: Result<String>) -> String {
    read.unwrap_or_else(|err| {
        warn!("{}; resolving with an empty hostname", err);
        String::new()
    })
}

/// Resolves the API base URL from an explicit hostname source.
pub fn resolve_api_url_from<S: HostnameSource + ?Sized>(source: &S) -> String {
    let url = ResolvedEndpoint::from_hostname(source.hostname()).url();
    debug!("Resolved API url: {}", url);
    url
}

/// Resolves the API base URL from the browser's current hostname.
#[cfg(target_arch = "wasm32")]
pub fn resolve_api_url() -> String {
    resolve_api_url_from(&BrowserLocation)
}

/// Frontend configuration, computed once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    endpoint: ResolvedEndpoint,
    api_url: String,
}

impl Config {
    pub fn from_source<S: HostnameSource + ?Sized>(source: &S) -> Self {
        Self::from_endpoint(ResolvedEndpoint::from_hostname(source.hostname()))
    }

    /// Fails with a `ConfigError` instead of building a URL from a malformed hostname.
    pub fn try_from_source<S: HostnameSource + ?Sized>(source: &S) -> Result<Self> {
        ResolvedEndpoint::try_from_hostname(source.hostname()).map(Self::from_endpoint)
    }

    fn from_endpoint(endpoint: ResolvedEndpoint) -> Self {
        let api_url = endpoint.url();
        Self { endpoint, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn endpoint(&self) -> &ResolvedEndpoint {
        &self.endpoint
    }

    /// Joins an API path onto the resolved base URL
    pub fn url_for(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with('/') {
            format!("{}{}", self.api_url, path)
        } else {
            format!("{}/{}", self.api_url, path)
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Resolves the process-wide configuration on first call.
///
/// Later calls return the stored instance without consulting `source` again.
pub fn init<S: HostnameSource + ?Sized>(source: &S) -> &'static Config {
    CONFIG.get_or_init(|| {
        let config = Config::from_source(source);
        info!("API endpoint configured: {}", config.api_url());
        config
    })
}

pub fn get() -> Option<&'static Config> {
    CONFIG.get()
}
