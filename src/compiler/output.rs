//! Compiled stream configuration.
//!
//! Everything a template renderer needs to emit one stream server, its
//! upstreams and its health-check match block. Values are fully defaulted;
//! the renderer never has to guess.
//!
//! Field and list order is part of the contract: a reload is triggered
//! when two successive values differ, so nothing here is built from
//! unordered collections.

use serde::Serialize;

use crate::observability::Diagnostics;

/// Root output of one compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportServerConfig {
    pub server: StreamServer,
    pub upstreams: Vec<StreamUpstream>,
    #[serde(rename = "match")]
    pub health_check_match: Option<Match>,
    pub stream_snippets: Vec<String>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamServer {
    pub tls_passthrough: bool,
    /// Socket the passthrough front door forwards to. Empty otherwise.
    pub unix_socket: String,
    pub port: u16,
    pub udp: bool,
    pub status_zone: String,
    pub proxy_requests: Option<u32>,
    pub proxy_responses: Option<u32>,
    pub proxy_pass: String,
    pub name: String,
    pub namespace: String,
    pub proxy_connect_timeout: String,
    pub proxy_timeout: String,
    pub proxy_next_upstream: bool,
    pub proxy_next_upstream_timeout: String,
    pub proxy_next_upstream_tries: u32,
    pub health_check: Option<StreamHealthCheck>,
    pub server_snippets: Vec<String>,
    pub disable_ipv6: bool,
    pub ssl: StreamSsl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamUpstream {
    pub name: String,
    pub servers: Vec<StreamUpstreamServer>,
    /// Empty means the data plane's native default.
    pub load_balancing_method: String,
    /// Re-resolve server names at runtime.
    pub resolve: bool,
    pub upstream_labels: UpstreamLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamUpstreamServer {
    pub address: String,
    pub max_fails: u32,
    pub fail_timeout: String,
    /// 0 means unlimited.
    pub max_connections: u32,
}

/// Labels attached to upstream metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpstreamLabels {
    pub service: String,
    pub resource_type: String,
    pub resource_name: String,
    pub resource_namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamHealthCheck {
    pub enabled: bool,
    pub interval: String,
    pub jitter: String,
    pub timeout: String,
    pub port: u16,
    pub passes: u32,
    pub fails: u32,
    /// Name of the linked match block, empty if none.
    #[serde(rename = "match")]
    pub match_name: String,
}

/// Regex flavour of an expected health-check response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RegexModifier {
    /// Literal payload.
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "~")]
    CaseSensitive,
    #[serde(rename = "~*")]
    CaseInsensitive,
}

impl RegexModifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegexModifier::None => "",
            RegexModifier::CaseSensitive => "~",
            RegexModifier::CaseInsensitive => "~*",
        }
    }
}

/// Named expectation block referenced by a health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub name: String,
    pub send: String,
    pub expect_regex_modifier: RegexModifier,
    pub expect: String,
}

/// TLS termination settings. Always present; `enabled` tells the renderer
/// whether to use it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreamSsl {
    pub enabled: bool,
    pub certificate: String,
    pub certificate_key: String,
}

impl StreamSsl {
    pub fn disabled() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_modifier_serializes_as_prefix() {
        assert_eq!(serde_json::to_string(&RegexModifier::None).unwrap(), r#""""#);
        assert_eq!(serde_json::to_string(&RegexModifier::CaseSensitive).unwrap(), r#""~""#);
        assert_eq!(serde_json::to_string(&RegexModifier::CaseInsensitive).unwrap(), r#""~*""#);
        assert_eq!(RegexModifier::CaseInsensitive.as_str(), "~*");
    }

    #[test]
    fn test_disabled_ssl_has_no_material() {
        let ssl = StreamSsl::disabled();
        assert!(!ssl.enabled);
        assert!(ssl.certificate.is_empty());
        assert!(ssl.certificate_key.is_empty());
    }
}
