//! TransportServer compilation.
//!
//! # Data Flow
//! ```text
//! TransportServer + listener port + resolved state + settings
//!     → routing::namer (one namer per resource)
//!     → load_balancer::build_upstreams   ─┐
//!     → health::build_health_check        ├─ independent, diagnostics merged
//!     → net::build_ssl                   ─┘
//!     → resilience (timeouts, next-upstream)
//!     → net::listener (UDP, passthrough, status zone, socket)
//!     → TransportServerConfig (immutable, includes diagnostics)
//! ```
//!
//! # Design Decisions
//! - Compilation never fails; bad input degrades single features
//! - Pure function of its inputs: identical inputs give equal outputs,
//!   including list order, so callers can diff results to skip reloads
//! - No shared state; resources can be compiled on any thread

pub mod output;

use crate::config::{CompilerConfig, TransportServer};
use crate::discovery::{EndpointSource, ExternalNameIndex, SecretSource};
use crate::health::build_health_check;
use crate::load_balancer::build_upstreams;
use crate::net::{build_ssl, ListenerSettings};
use crate::observability::Diagnostics;
use crate::resilience::{NextUpstream, Timeouts};
use crate::routing::{UpstreamNamer, UpstreamNaming};

pub use output::TransportServerConfig;
use output::StreamServer;

/// Compile one TransportServer into its stream configuration.
///
/// `resolved` answers endpoint, ExternalName and secret lookups for
/// everything the resource references.
pub fn compile_transport_server<R>(
    ts: &TransportServer,
    listener_port: u16,
    resolved: &R,
    config: &CompilerConfig,
) -> TransportServerConfig
where
    R: EndpointSource + ExternalNameIndex + SecretSource,
{
    let key = ts.key();
    let mut diagnostics = Diagnostics::new();

    let namer = UpstreamNamer::for_transport_server(key);
    let proxy_pass = namer.name_for(&ts.spec.action.pass);

    let (upstreams, w) = build_upstreams(ts, &namer, resolved, resolved, config);
    diagnostics.merge(w);

    let (health_check, health_match) = build_health_check(&ts.spec.action.pass, &proxy_pass, &ts.spec.upstreams);

    let (ssl, w) = build_ssl(key, ts.spec.tls.as_ref(), resolved);
    diagnostics.merge(w);

    let upstream_params = ts.spec.upstream_parameters.as_ref();
    let timeouts = Timeouts::resolve(upstream_params, ts.spec.session_parameters.as_ref());
    let next_upstream = NextUpstream::resolve(upstream_params);
    let listener = ListenerSettings::resolve(ts, listener_port);

    tracing::debug!(
        resource = %key,
        upstreams = upstreams.len(),
        health_check = health_check.is_some(),
        ssl = ssl.enabled,
        diagnostics = diagnostics.len(),
        "Compiled transport server"
    );

    TransportServerConfig {
        server: StreamServer {
            tls_passthrough: listener.tls_passthrough,
            unix_socket: listener.unix_socket,
            port: listener.port,
            udp: listener.udp,
            status_zone: listener.status_zone,
            proxy_requests: upstream_params.and_then(|p| p.udp_requests),
            proxy_responses: upstream_params.and_then(|p| p.udp_responses),
            proxy_pass,
            name: key.name.clone(),
            namespace: key.namespace.clone(),
            proxy_connect_timeout: timeouts.connect,
            proxy_timeout: timeouts.session,
            proxy_next_upstream: next_upstream.enabled,
            proxy_next_upstream_timeout: next_upstream.timeout,
            proxy_next_upstream_tries: next_upstream.tries,
            health_check,
            server_snippets: generate_snippets(config.enable_snippets, &ts.spec.server_snippets),
            disable_ipv6: config.disable_ipv6,
            ssl,
        },
        upstreams,
        health_check_match: health_match,
        stream_snippets: generate_snippets(config.enable_snippets, &ts.spec.stream_snippets),
        diagnostics,
    }
}

/// Split snippet text into lines. Disabled or empty snippets yield nothing.
pub fn generate_snippets(enabled: bool, snippets: &str) -> Vec<String> {
    if !enabled || snippets.is_empty() {
        return Vec::new();
    }
    snippets.split('\n').map(str::to_string).collect()
}
