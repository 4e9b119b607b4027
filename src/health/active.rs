//! Active health-check stanza.
//!
//! # Responsibilities
//! - Find the upstream that receives the listener's traffic
//! - Overlay its declared health-check settings on the defaults
//! - Link a match block when an expectation is declared
//!
//! # Design Decisions
//! - Only the action target is checked; other upstreams are left alone
//! - A zero threshold means "not declared", never "threshold of zero"

use crate::compiler::output::{Match, StreamHealthCheck};
use crate::config::defaults::{bool_with_default, positive_int_with_default, time_with_default};
use crate::config::Upstream;
use crate::health::expect::{build_match, match_name};

pub const DEFAULT_TIMEOUT: &str = "5s";
pub const DEFAULT_JITTER: &str = "0s";
pub const DEFAULT_INTERVAL: &str = "5s";
pub const DEFAULT_PASSES: u32 = 1;
pub const DEFAULT_FAILS: u32 = 1;

impl Default for StreamHealthCheck {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout: DEFAULT_TIMEOUT.to_string(),
            jitter: DEFAULT_JITTER.to_string(),
            interval: DEFAULT_INTERVAL.to_string(),
            port: 0,
            passes: DEFAULT_PASSES,
            fails: DEFAULT_FAILS,
            match_name: String::new(),
        }
    }
}

/// Build the health check and match block for the action target.
///
/// `target` is the resource-local upstream name, `generated_name` the name
/// the namer gave it. Returns `(None, None)` when the target has no enabled
/// health check or is not declared.
pub fn build_health_check(
    target: &str,
    generated_name: &str,
    upstreams: &[Upstream],
) -> (Option<StreamHealthCheck>, Option<Match>) {
    let Some(upstream) = upstreams.iter().find(|u| u.name == target) else {
        return (None, None);
    };

    let Some(declared) = upstream.health_check.as_ref() else {
        return (None, None);
    };
    if !bool_with_default(declared.enabled, false) {
        return (None, None);
    }

    let defaults = StreamHealthCheck::default();
    let mut hc = StreamHealthCheck {
        enabled: true,
        interval: time_with_default(declared.interval.as_deref(), &defaults.interval),
        jitter: time_with_default(declared.jitter.as_deref(), &defaults.jitter),
        timeout: time_with_default(declared.timeout.as_deref(), &defaults.timeout),
        port: declared.port,
        passes: positive_int_with_default(declared.passes, defaults.passes),
        fails: positive_int_with_default(declared.fails, defaults.fails),
        match_name: String::new(),
    };

    let health_match = declared.expectation.as_ref().map(|expectation| {
        let name = match_name(generated_name);
        hc.match_name = name.clone();
        build_match(expectation, name)
    });

    (Some(hc), health_match)
}
