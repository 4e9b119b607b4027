//! Next-upstream retry policy.
//!
//! # Responsibilities
//! - Decide whether failed connections move on to the next server
//! - Resolve retry count and retry time budget
//!
//! # Design Decisions
//! - The enable flag gates the whole feature: stray tries/timeout values
//!   are ignored unless retries are explicitly enabled

use crate::config::defaults::{bool_with_default, time_with_default};
use crate::config::UpstreamParameters;

pub const DEFAULT_NEXT_UPSTREAM_TIMEOUT: &str = "0s";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextUpstream {
    pub enabled: bool,
    pub tries: u32,
    pub timeout: String,
}

impl NextUpstream {
    pub fn resolve(params: Option<&UpstreamParameters>) -> Self {
        let enabled = params
            .map(|p| bool_with_default(p.next_upstream, false))
            .unwrap_or(false);

        let (tries, timeout) = match params {
            Some(p) if enabled => (p.next_upstream_tries, p.next_upstream_timeout.as_deref()),
            _ => (0, None),
        };

        Self {
            enabled,
            tries,
            timeout: time_with_default(timeout, DEFAULT_NEXT_UPSTREAM_TIMEOUT),
        }
    }
}
