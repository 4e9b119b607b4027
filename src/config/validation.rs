//! Bundle validation.
//!
//! # Responsibilities
//! - Semantic checks on a loaded bundle (serde handles syntactic)
//! - Check referential integrity (action target names a declared upstream)
//! - Reject listener settings the compiler cannot interpret
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Bundle → Result<(), Vec<ValidationError>>
//! - Only used at the file boundary; compilation itself never rejects input

use std::collections::HashSet;

use thiserror::Error;

use crate::config::loader::Bundle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("resource name and namespace must be set")]
    MissingIdentity,

    #[error("listener protocol '{0}' must be TCP or UDP")]
    InvalidProtocol(String),

    #[error("action.pass '{0}' does not name a declared upstream")]
    UnknownActionTarget(String),

    #[error("upstream '{0}' is declared more than once")]
    DuplicateUpstream(String),

    #[error("TLS passthrough resources must set a host")]
    MissingPassthroughHost,

    #[error("listenerPort must be set for listener '{0}'")]
    MissingListenerPort(String),
}

pub fn validate_bundle(bundle: &Bundle) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let ts = &bundle.transport_server;

    if ts.metadata.name.is_empty() || ts.metadata.namespace.is_empty() {
        errors.push(ValidationError::MissingIdentity);
    }

    if ts.is_tls_passthrough() {
        if ts.spec.host.is_empty() {
            errors.push(ValidationError::MissingPassthroughHost);
        }
    } else {
        let protocol = &ts.spec.listener.protocol;
        if protocol != "TCP" && protocol != "UDP" {
            errors.push(ValidationError::InvalidProtocol(protocol.clone()));
        }
        if bundle.listener_port == 0 {
            errors.push(ValidationError::MissingListenerPort(ts.spec.listener.name.clone()));
        }
    }

    let mut seen = HashSet::new();
    for u in &ts.spec.upstreams {
        if !seen.insert(u.name.as_str()) {
            errors.push(ValidationError::DuplicateUpstream(u.name.clone()));
        }
    }

    if !seen.contains(ts.spec.action.pass.as_str()) {
        errors.push(ValidationError::UnknownActionTarget(ts.spec.action.pass.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
