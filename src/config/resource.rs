//! TransportServer resource model.
//!
//! The declarative input describing one TCP/UDP or TLS passthrough
//! listener, the upstreams it forwards to and the TLS material it uses.
//! Field names follow the resource's camelCase wire form so bundles can be
//! written straight from cluster manifests.
//!
//! Unset optional values stay `None`; defaults are applied during
//! compilation, never here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Listener name reserved for the shared TLS passthrough front door.
pub const TLS_PASSTHROUGH_LISTENER_NAME: &str = "tls-passthrough";

/// Identity of a resource inside the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct ResourceKey {
    pub namespace: String,
    pub name: String,
}

impl ResourceKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// A stream proxy resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransportServer {
    pub metadata: ResourceKey,
    pub spec: TransportServerSpec,
}

impl TransportServer {
    pub fn key(&self) -> &ResourceKey {
        &self.metadata
    }

    /// True when the resource sits behind the shared passthrough listener.
    pub fn is_tls_passthrough(&self) -> bool {
        self.spec.listener.name == TLS_PASSTHROUGH_LISTENER_NAME
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportServerSpec {
    pub listener: Listener,

    /// Host used to route passthrough traffic. Ignored otherwise.
    pub host: String,

    pub tls: Option<Tls>,

    pub upstreams: Vec<Upstream>,

    pub upstream_parameters: Option<UpstreamParameters>,

    pub session_parameters: Option<SessionParameters>,

    pub action: Action,

    /// Raw text appended to the generated server block.
    pub server_snippets: String,

    /// Raw text appended to the enclosing stream block.
    pub stream_snippets: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Listener {
    pub name: String,
    /// "TCP" or "UDP".
    pub protocol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tls {
    /// Name of a secret in the resource's namespace.
    pub secret: String,
}

/// Names the upstream that receives the listener's traffic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Action {
    pub pass: String,
}

/// A declared upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Upstream {
    pub name: String,
    pub service: String,
    pub port: u16,
    pub fail_timeout: Option<String>,
    pub max_fails: Option<u32>,
    pub max_conns: Option<u32>,
    pub health_check: Option<HealthCheck>,
    /// Empty means "controller default".
    pub load_balancing_method: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthCheck {
    pub enabled: Option<bool>,
    pub timeout: Option<String>,
    pub jitter: Option<String>,
    pub interval: Option<String>,
    /// 0 probes the backend's own port.
    pub port: u16,
    pub passes: Option<u32>,
    pub fails: Option<u32>,
    #[serde(rename = "match")]
    pub expectation: Option<Match>,
}

/// Probe payload and expected response for content-aware health checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Match {
    pub send: String,
    /// Literal payload, or a regex when prefixed with `~` / `~*`.
    pub expect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpstreamParameters {
    pub udp_requests: Option<u32>,
    pub udp_responses: Option<u32>,
    pub connect_timeout: Option<String>,
    pub next_upstream: Option<bool>,
    pub next_upstream_timeout: Option<String>,
    pub next_upstream_tries: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionParameters {
    pub timeout: Option<String>,
}
