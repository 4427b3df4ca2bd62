use std::fmt;
use std::net::Ipv4Addr;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Scheme used for every resolved endpoint
pub const DEFAULT_SCHEME: &str = "http";

/// Port the backend API listens on
pub const DEFAULT_PORT: u16 = 8000;

/// Longest hostname accepted by strict resolution (RFC 1123)
pub const MAX_HOSTNAME_LEN: usize = 253;

lazy_static! {
    // Dot-separated RFC 1123 labels; dotted IPv4 literals match too
    static ref HOSTNAME_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$"
    ).unwrap();
}

/// Base URL of the backend API, derived from the page's own hostname.
///
/// Renders as `scheme://host:port` with no path, query or fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedEndpoint {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl ResolvedEndpoint {
    /// Builds the endpoint from an ambient hostname, taken verbatim.
    ///
    /// No escaping, normalisation or IPv6 bracketing is applied, and an empty
    /// or malformed hostname is carried straight into the URL.
    pub fn from_hostname(hostname: impl Into<String>) -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: hostname.into(),
            port: DEFAULT_PORT,
        }
    }

    /// Like [`ResolvedEndpoint::from_hostname`] but rejects hostnames that
    /// would produce an invalid URL.
    pub fn try_from_hostname(hostname: impl Into<String>) -> Result<Self> {
        let hostname = hostname.into();
        validate_hostname(&hostname)?;
        Ok(Self::from_hostname(hostname))
    }

    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResolvedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// Checks a hostname against the RFC 1123 character set and length limits
pub fn validate_hostname(hostname: &str) -> Result<()> {
    if hostname.is_empty() {
        return Err(ConfigError::EmptyHostname);
    }
    if hostname.len() > MAX_HOSTNAME_LEN {
        return Err(ConfigError::HostnameTooLong { len: hostname.len() });
    }
    if !HOSTNAME_REGEX.is_match(hostname) {
        debug!("Rejecting hostname {:?}", hostname);
        return Err(ConfigError::InvalidHostname(hostname.to_string()));
    }
    // All-numeric names are only valid as a dotted-quad IPv4 literal
    let all_numeric = hostname
        .split('.')
        .all(|label| label.bytes().all(|b| b.is_ascii_digit()));
    if all_numeric && hostname.parse::<Ipv4Addr>().is_err() {
        debug!("Rejecting numeric hostname {:?}", hostname);
        return Err(ConfigError::InvalidHostname(hostname.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use test_case::test_case;

    #[rstest]
    #[case("localhost", "http://localhost:8000")]
    #[case("192.168.1.10", "http://192.168.1.10:8000")]
    #[case("example.com", "http://example.com:8000")]
    #[case("", "http://:8000")]
    fn test_endpoint_rendering(#[case] host: &str, #[case] expected: &str) {
        let endpoint = ResolvedEndpoint::from_hostname(host);
        assert_eq!(endpoint.url(), expected);
    }

    #[test]
    fn test_endpoint_fields() {
        let endpoint = ResolvedEndpoint::from_hostname("example.com");
        assert_eq!(endpoint.scheme, "http");
        assert_eq!(endpoint.host, "example.com");
        assert_eq!(endpoint.port, 8000);
    }

    #[test]
    fn test_malformed_hostname_is_carried_verbatim() {
        let endpoint = ResolvedEndpoint::from_hostname("bad host/with path");
        assert_eq!(endpoint.url(), "http://bad host/with path:8000");

        let ipv6 = ResolvedEndpoint::from_hostname("::1");
        assert_eq!(ipv6.url(), "http://::1:8000");
    }

    #[test]
    fn test_endpoint_serialization() {
        let endpoint = ResolvedEndpoint::from_hostname("localhost");
        let json = serde_json::to_value(&endpoint).unwrap();
        assert_eq!(json["scheme"], "http");
        assert_eq!(json["host"], "localhost");
        assert_eq!(json["port"], 8000);
    }

    #[test_case("localhost" ; "single label")]
    #[test_case("192.168.1.10" ; "ipv4 literal")]
    #[test_case("example.com" ; "domain")]
    #[test_case("api-1.internal.example.org" ; "hyphenated subdomain")]
    #[test_case("255.255.255.255" ; "ipv4 upper bound")]
    #[test_case("10.0.0.1" ; "private ipv4")]
    #[test_case("123.example.com" ; "numeric leading label")]
    fn test_valid_hostnames(host: &str) {
        assert!(validate_hostname(host).is_ok());
        assert_eq!(
            ResolvedEndpoint::try_from_hostname(host).unwrap(),
            ResolvedEndpoint::from_hostname(host)
        );
    }

    #[test_case("bad_host" ; "underscore")]
    #[test_case("bad host" ; "space")]
    #[test_case("-leading.example.com" ; "leading hyphen")]
    #[test_case("trailing-.example.com" ; "trailing hyphen")]
    #[test_case("http://example.com" ; "embedded scheme")]
    #[test_case("example.com:8000" ; "embedded port")]
    #[test_case("example..com" ; "empty label")]
    #[test_case("999.999.999.999" ; "octet out of range")]
    #[test_case("256.0.0.1" ; "first octet out of range")]
    #[test_case("1.2.3" ; "short ipv4")]
    #[test_case("1.2.3.4.5" ; "long ipv4")]
    #[test_case("8000" ; "bare number")]
    fn test_invalid_hostnames(host: &str) {
        assert_eq!(
            validate_hostname(host),
            Err(ConfigError::InvalidHostname(host.to_string()))
        );
    }

    #[test]
    fn test_empty_hostname_rejected() {
        assert_eq!(validate_hostname(""), Err(ConfigError::EmptyHostname));
        assert_eq!(
            ResolvedEndpoint::try_from_hostname(""),
            Err(ConfigError::EmptyHostname)
        );
    }

    #[test]
    fn test_overlong_hostname_rejected() {
        let label = "a".repeat(50);
        let host = vec![label; 6].join(".");
        assert_eq!(host.len(), 305);
        assert_eq!(
            validate_hostname(&host),
            Err(ConfigError::HostnameTooLong { len: 305 })
        );
    }

    #[test_log::test]
    fn test_rejection_is_logged() {
        assert!(validate_hostname("no_underscores").is_err());
    }

    proptest! {
        #[test]
        fn prop_url_is_scheme_host_port(host in "[a-z0-9.-]{1,64}") {
            let endpoint = ResolvedEndpoint::from_hostname(host.clone());
            prop_assert_eq!(endpoint.url(), format!("http://{}:8000", host));
        }

        #[test]
        fn prop_resolution_is_deterministic(host in "\\PC{0,40}") {
            prop_assert_eq!(
                ResolvedEndpoint::from_hostname(host.clone()),
                ResolvedEndpoint::from_hostname(host)
            );
        }
    }
}
