//! Backend server entries.
//!
//! # Responsibilities
//! - Apply an upstream's failure and connection limits to every address
//! - Fill empty upstreams with a placeholder when the data plane needs one
//!
//! # Design Decisions
//! - Limits are resolved once per upstream and shared by all entries
//! - The placeholder is a socket that never exists, so traffic fails fast
//!   instead of reaching an unintended target

use crate::compiler::output::StreamUpstreamServer;
use crate::config::defaults::{int_with_default, time_with_default};
use crate::config::Upstream;

/// Address of the placeholder backend for upstreams without endpoints.
pub const NON_EXISTING_UNIX_SOCKET: &str = "unix:/var/lib/nginx/non-existing-unix-socket.sock";

pub const DEFAULT_MAX_FAILS: u32 = 1;
pub const DEFAULT_MAX_CONNS: u32 = 0;
pub const DEFAULT_FAIL_TIMEOUT: &str = "10s";

/// Per-server limits resolved from a declared upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLimits {
    pub max_fails: u32,
    pub max_connections: u32,
    pub fail_timeout: String,
}

impl ServerLimits {
    pub fn from_upstream(upstream: &Upstream) -> Self {
        Self {
            max_fails: int_with_default(upstream.max_fails, DEFAULT_MAX_FAILS),
            max_connections: int_with_default(upstream.max_conns, DEFAULT_MAX_CONNS),
            fail_timeout: time_with_default(upstream.fail_timeout.as_deref(), DEFAULT_FAIL_TIMEOUT),
        }
    }

    pub fn server(&self, address: &str) -> StreamUpstreamServer {
        StreamUpstreamServer {
            address: address.to_string(),
            max_fails: self.max_fails,
            fail_timeout: self.fail_timeout.clone(),
            max_connections: self.max_connections,
        }
    }

    /// Placeholder entry. Carries failure settings but no connection cap.
    pub fn placeholder(&self) -> StreamUpstreamServer {
        StreamUpstreamServer {
            address: NON_EXISTING_UNIX_SOCKET.to_string(),
            max_fails: self.max_fails,
            fail_timeout: self.fail_timeout.clone(),
            max_connections: 0,
        }
    }
}

/// Build server entries in endpoint order.
///
/// Without dynamic re-resolution (`plus == false`) an empty endpoint list
/// yields exactly one placeholder entry.
pub fn build_servers(upstream: &Upstream, endpoints: &[String], plus: bool) -> Vec<StreamUpstreamServer> {
    let limits = ServerLimits::from_upstream(upstream);

    let mut servers: Vec<StreamUpstreamServer> = endpoints.iter().map(|e| limits.server(e)).collect();

    if !plus && servers.is_empty() {
        servers.push(limits.placeholder());
    }

    servers
}
