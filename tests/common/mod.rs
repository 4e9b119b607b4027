//! Shared fixtures for integration tests.

use stream_config::config::{
    HealthCheck, Match, ResourceKey, Tls, TransportServer, Upstream, UpstreamParameters,
    TLS_PASSTHROUGH_LISTENER_NAME,
};
use stream_config::discovery::SecretReference;
use stream_config::ResolvedState;

/// A TCP TransportServer with two upstreams; "web" receives traffic and
/// has an enabled health check with a regex expectation.
pub fn tcp_transport_server() -> TransportServer {
    let mut ts = TransportServer::default();
    ts.metadata = ResourceKey::new("default", "tcp-server");
    ts.spec.listener.name = "tcp-ip".into();
    ts.spec.listener.protocol = "TCP".into();
    ts.spec.action.pass = "web".into();
    ts.spec.upstreams = vec![
        Upstream {
            name: "web".into(),
            service: "web-svc".into(),
            port: 8080,
            max_fails: Some(3),
            fail_timeout: Some("40s".into()),
            health_check: Some(HealthCheck {
                enabled: Some(true),
                interval: Some("10s".into()),
                passes: Some(2),
                expectation: Some(Match {
                    send: "GET / HTTP/1.0\\r\\n\\r\\n".into(),
                    expect: "~*200 OK".into(),
                }),
                ..Default::default()
            }),
            ..Default::default()
        },
        Upstream {
            name: "backup".into(),
            service: "backup-svc".into(),
            port: 9090,
            load_balancing_method: "least_conn".into(),
            ..Default::default()
        },
    ];
    ts
}

/// Passthrough variant of the TCP fixture.
pub fn passthrough_transport_server() -> TransportServer {
    let mut ts = tcp_transport_server();
    ts.metadata = ResourceKey::new("prod", "secure-app");
    ts.spec.listener.name = TLS_PASSTHROUGH_LISTENER_NAME.into();
    ts.spec.listener.protocol = "TLS_PASSTHROUGH".into();
    ts.spec.host = "app.example.com".into();
    ts
}

pub fn with_tls(mut ts: TransportServer, secret: &str) -> TransportServer {
    ts.spec.tls = Some(Tls { secret: secret.into() });
    ts
}

#[allow(dead_code)]
pub fn with_upstream_parameters(mut ts: TransportServer, params: UpstreamParameters) -> TransportServer {
    ts.spec.upstream_parameters = Some(params);
    ts
}

/// Endpoints for both fixture upstreams in `namespace`.
pub fn resolved_state(namespace: &str) -> ResolvedState {
    ResolvedState::default()
        .with_endpoints(namespace, "web-svc", 8080, &["10.0.0.2:8080", "10.0.0.1:8080", "10.0.0.3:8080"])
        .with_endpoints(namespace, "backup-svc", 9090, &["10.0.1.1:9090"])
        .with_secret(namespace, "tls-secret", SecretReference::tls(format!("/etc/nginx/secrets/{}-tls-secret", namespace)))
}
