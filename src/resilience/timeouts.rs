//! Timeout resolution.
//!
//! # Responsibilities
//! - Resolve the upstream connect timeout
//! - Resolve the idle session timeout
//!
//! # Design Decisions
//! - Missing parameter blocks behave exactly like empty values
//! - Values are passed through as duration strings; the data plane
//!   validates their syntax

use crate::config::defaults::time_with_default;
use crate::config::{SessionParameters, UpstreamParameters};

pub const DEFAULT_CONNECT_TIMEOUT: &str = "60s";
pub const DEFAULT_SESSION_TIMEOUT: &str = "10m";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: String,
    pub session: String,
}

impl Timeouts {
    pub fn resolve(upstream: Option<&UpstreamParameters>, session: Option<&SessionParameters>) -> Self {
        let connect = upstream.and_then(|p| p.connect_timeout.as_deref());
        let idle = session.and_then(|p| p.timeout.as_deref());

        Self {
            connect: time_with_default(connect, DEFAULT_CONNECT_TIMEOUT),
            session: time_with_default(idle, DEFAULT_SESSION_TIMEOUT),
        }
    }
}
