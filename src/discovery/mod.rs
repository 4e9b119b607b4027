//! Resolved cluster state consumed by the compiler.
//!
//! # Data Flow
//! ```text
//! Cluster watchers (outside this crate)
//!     → resolve Services/Endpoints/Secrets
//!     → ResolvedState snapshot (or any type implementing the traits below)
//!     → compiler reads it, never writes it
//! ```
//!
//! # Design Decisions
//! - Lookups are traits so callers can back them with live caches
//! - `ResolvedState` is a plain value snapshot for files and tests
//! - String keys use the controller's "ns/svc:port" and "ns/name" forms

pub mod secrets;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

pub use secrets::{SecretReference, SecretSource, SECRET_TYPE_TLS};

/// Key of a resolved endpoint list. Subselectors are not supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointsKey<'a> {
    pub namespace: &'a str,
    pub service: &'a str,
    pub port: u16,
}

impl fmt::Display for EndpointsKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.namespace, self.service, self.port)
    }
}

/// Ordered backend addresses per service port.
pub trait EndpointSource {
    /// `None` when the service port is unknown, `Some(&[])` when it is known
    /// to have no ready endpoints. Order is preserved into the output.
    fn endpoints(&self, key: &EndpointsKey<'_>) -> Option<&[String]>;
}

/// Which services are of type ExternalName.
pub trait ExternalNameIndex {
    fn is_external_name(&self, namespace: &str, service: &str) -> bool;
}

/// In-memory snapshot of everything a resource references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolvedState {
    /// "ns/svc:port" → backend addresses.
    pub endpoints: BTreeMap<String, Vec<String>>,

    /// "ns/svc" of every ExternalName service.
    pub external_name_services: BTreeSet<String>,

    /// "ns/name" → resolved secret.
    pub secrets: BTreeMap<String, SecretReference>,
}

impl ResolvedState {
    pub fn with_endpoints(mut self, namespace: &str, service: &str, port: u16, addrs: &[&str]) -> Self {
        let key = EndpointsKey { namespace, service, port };
        self.endpoints
            .insert(key.to_string(), addrs.iter().map(|a| a.to_string()).collect());
        self
    }

    pub fn with_external_name(mut self, namespace: &str, service: &str) -> Self {
        self.external_name_services.insert(format!("{}/{}", namespace, service));
        self
    }

    pub fn with_secret(mut self, namespace: &str, name: &str, secret: SecretReference) -> Self {
        self.secrets.insert(format!("{}/{}", namespace, name), secret);
        self
    }
}

impl EndpointSource for ResolvedState {
    fn endpoints(&self, key: &EndpointsKey<'_>) -> Option<&[String]> {
        self.endpoints.get(&key.to_string()).map(Vec::as_slice)
    }
}

impl ExternalNameIndex for ResolvedState {
    fn is_external_name(&self, namespace: &str, service: &str) -> bool {
        self.external_name_services
            .contains(&format!("{}/{}", namespace, service))
    }
}

impl SecretSource for ResolvedState {
    fn secret(&self, namespace: &str, name: &str) -> Option<&SecretReference> {
        self.secrets.get(&format!("{}/{}", namespace, name))
    }
}
