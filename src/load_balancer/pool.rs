//! Upstream pool assembly.
//!
//! # Responsibilities
//! - Build one stream upstream per declared upstream, in declared order
//! - Look up endpoints and ExternalName status for each backing service
//! - Drop ExternalName endpoints when no resolver is configured

use crate::compiler::output::{StreamUpstream, UpstreamLabels};
use crate::config::{CompilerConfig, TransportServer};
use crate::discovery::{EndpointSource, EndpointsKey, ExternalNameIndex};
use crate::load_balancer::backend::build_servers;
use crate::load_balancer::method::resolve_load_balancing_method;
use crate::observability::Diagnostics;
use crate::routing::UpstreamNaming;

/// Resource type label on upstreams generated from TransportServers.
pub const TRANSPORT_SERVER_RESOURCE_TYPE: &str = "transportserver";

/// Build all upstreams of a TransportServer.
pub fn build_upstreams(
    ts: &TransportServer,
    namer: &dyn UpstreamNaming,
    endpoints: &dyn EndpointSource,
    external_names: &dyn ExternalNameIndex,
    config: &CompilerConfig,
) -> (Vec<StreamUpstream>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let key = ts.key();
    let mut upstreams = Vec::with_capacity(ts.spec.upstreams.len());

    for u in &ts.spec.upstreams {
        let endpoints_key = EndpointsKey {
            namespace: &key.namespace,
            service: &u.service,
            port: u.port,
        };
        let mut resolved: &[String] = endpoints.endpoints(&endpoints_key).unwrap_or_default();

        let is_external_name = external_names.is_external_name(&key.namespace, &u.service);
        if is_external_name && !config.resolver_configured {
            diagnostics.add(
                key,
                format!(
                    "Type ExternalName service {} in upstream {} will be ignored. \
                     To use ExternalName services, a resolver must be configured in the ConfigMap",
                    u.service, u.name
                ),
            );
            resolved = &[];
        }

        let name = namer.name_for(&u.name);
        tracing::debug!(
            resource = %key,
            upstream = %name,
            endpoints = resolved.len(),
            external_name = is_external_name,
            "Building stream upstream"
        );

        upstreams.push(StreamUpstream {
            name,
            servers: build_servers(u, resolved, config.plus),
            load_balancing_method: resolve_load_balancing_method(&u.load_balancing_method),
            resolve: is_external_name,
            upstream_labels: UpstreamLabels {
                service: u.service.clone(),
                resource_type: TRANSPORT_SERVER_RESOURCE_TYPE.to_string(),
                resource_name: key.name.clone(),
                resource_namespace: key.namespace.clone(),
            },
        });
    }

    (upstreams, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ResourceKey, Upstream};
    use crate::discovery::ResolvedState;
    use crate::load_balancer::backend::NON_EXISTING_UNIX_SOCKET;
    use crate::routing::UpstreamNamer;

    fn transport_server() -> TransportServer {
        let mut ts = TransportServer::default();
        ts.metadata = ResourceKey::new("default", "tcp-server");
        ts.spec.upstreams = vec![
            Upstream {
                name: "app".into(),
                service: "app-svc".into(),
                port: 5001,
                ..Default::default()
            },
            Upstream {
                name: "ext".into(),
                service: "ext-svc".into(),
                port: 443,
                load_balancing_method: "round_robin".into(),
                ..Default::default()
            },
        ];
        ts
    }

    fn build(ts: &TransportServer, state: &ResolvedState, config: &CompilerConfig) -> (Vec<StreamUpstream>, Diagnostics) {
        let namer = UpstreamNamer::for_transport_server(ts.key());
        build_upstreams(ts, &namer, state, state, config)
    }

    #[test]
    fn test_upstreams_follow_declared_order() {
        let ts = transport_server();
        let state = ResolvedState::default()
            .with_endpoints("default", "app-svc", 5001, &["10.0.0.1:5001", "10.0.0.2:5001"])
            .with_endpoints("default", "ext-svc", 443, &["10.0.1.1:443"]);

        let (upstreams, diags) = build(&ts, &state, &CompilerConfig::default());

        assert!(diags.is_empty());
        let names: Vec<_> = upstreams.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["ts_default_tcp-server_app", "ts_default_tcp-server_ext"]);
        assert_eq!(upstreams[0].servers.len(), 2);
        assert_eq!(upstreams[0].load_balancing_method, "random two least_conn");
        assert_eq!(upstreams[1].load_balancing_method, "");
        assert_eq!(
            upstreams[0].upstream_labels,
            UpstreamLabels {
                service: "app-svc".into(),
                resource_type: "transportserver".into(),
                resource_name: "tcp-server".into(),
                resource_namespace: "default".into(),
            }
        );
    }

    #[test]
    fn test_external_name_without_resolver() {
        let ts = transport_server();
        let state = ResolvedState::default()
            .with_endpoints("default", "ext-svc", 443, &["example.com:443"])
            .with_external_name("default", "ext-svc");
        let config = CompilerConfig {
            plus: true,
            ..Default::default()
        };

        let (upstreams, diags) = build(&ts, &state, &config);

        assert!(upstreams[1].servers.is_empty());
        assert!(upstreams[1].resolve);
        assert_eq!(diags.len(), 1);
        let message = &diags.iter().next().unwrap().message;
        assert!(message.contains("ext-svc"));
        assert!(message.contains("upstream ext"));
    }

    #[test]
    fn test_external_name_without_resolver_gets_placeholder() {
        let ts = transport_server();
        let state = ResolvedState::default()
            .with_endpoints("default", "ext-svc", 443, &["example.com:443"])
            .with_external_name("default", "ext-svc");

        let (upstreams, diags) = build(&ts, &state, &CompilerConfig::default());

        assert_eq!(upstreams[1].servers.len(), 1);
        assert_eq!(upstreams[1].servers[0].address, NON_EXISTING_UNIX_SOCKET);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_external_name_with_resolver() {
        let ts = transport_server();
        let state = ResolvedState::default()
            .with_endpoints("default", "ext-svc", 443, &["example.com:443"])
            .with_external_name("default", "ext-svc");
        let config = CompilerConfig {
            resolver_configured: true,
            ..Default::default()
        };

        let (upstreams, diags) = build(&ts, &state, &config);

        assert!(diags.is_empty());
        assert!(upstreams[1].resolve);
        assert_eq!(upstreams[1].servers[0].address, "example.com:443");
        assert!(!upstreams[0].resolve);
    }

    #[test]
    fn test_unknown_service_is_treated_as_empty() {
        let ts = transport_server();
        let (upstreams, _) = build(&ts, &ResolvedState::default(), &CompilerConfig::default());
        for u in &upstreams {
            assert_eq!(u.servers.len(), 1);
            assert_eq!(u.servers[0].address, NON_EXISTING_UNIX_SOCKET);
        }
    }
}
