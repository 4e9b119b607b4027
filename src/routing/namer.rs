//! Upstream naming.
//!
//! # Responsibilities
//! - Turn a resource-local upstream name into a configuration-wide one
//! - Guarantee distinct resources never produce the same name
//!
//! # Design Decisions
//! - Namespaces, resource names and upstream names are DNS labels and
//!   cannot contain `_`, so `_` is a safe separator
//! - Deterministic: the prefix is derived from identity only

use crate::config::ResourceKey;

/// Maps resource-local upstream names to globally unique ones.
pub trait UpstreamNaming: Send + Sync + std::fmt::Debug {
    fn name_for(&self, upstream: &str) -> String;
}

/// Namer bound to one TransportServer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamNamer {
    prefix: String,
}

impl UpstreamNamer {
    pub fn for_transport_server(key: &ResourceKey) -> Self {
        Self {
            prefix: format!("ts_{}_{}", key.namespace, key.name),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl UpstreamNaming for UpstreamNamer {
    fn name_for(&self, upstream: &str) -> String {
        format!("{}_{}", self.prefix, upstream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_for_upstream() {
        let namer = UpstreamNamer::for_transport_server(&ResourceKey::new("default", "dns"));
        assert_eq!(namer.prefix(), "ts_default_dns");
        assert_eq!(namer.name_for("dns-app"), "ts_default_dns_dns-app");
    }

    #[test]
    fn test_names_differ_across_namespaces() {
        let a = UpstreamNamer::for_transport_server(&ResourceKey::new("team-a", "dns"));
        let b = UpstreamNamer::for_transport_server(&ResourceKey::new("team-b", "dns"));
        assert_ne!(a.name_for("app"), b.name_for("app"));
    }

    #[test]
    fn test_naming_is_deterministic() {
        let key = ResourceKey::new("default", "dns");
        let first = UpstreamNamer::for_transport_server(&key).name_for("app");
        let second = UpstreamNamer::for_transport_server(&key).name_for("app");
        assert_eq!(first, second);
    }
}
