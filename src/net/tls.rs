//! TLS termination settings.
//!
//! # Responsibilities
//! - Decide whether a listener terminates TLS
//! - Point certificate and key at the resolved secret file
//!
//! # Design Decisions
//! - Never fails: an unusable secret disables TLS and adds a diagnostic
//! - The stanza is always returned, disabled when there is nothing to use

use crate::compiler::output::StreamSsl;
use crate::config::{ResourceKey, Tls};
use crate::discovery::{SecretSource, SECRET_TYPE_TLS};
use crate::observability::Diagnostics;

/// Resolve the TLS stanza of a resource.
pub fn build_ssl(
    resource: &ResourceKey,
    tls: Option<&Tls>,
    secrets: &dyn SecretSource,
) -> (StreamSsl, Diagnostics) {
    let mut diagnostics = Diagnostics::new();

    let Some(tls) = tls else {
        return (StreamSsl::disabled(), diagnostics);
    };

    let Some(secret) = secrets.secret(&resource.namespace, &tls.secret) else {
        diagnostics.add(
            resource,
            format!(
                "TLS secret {} was not found. SSL termination will not be enabled for this server.",
                tls.secret
            ),
        );
        return (StreamSsl::disabled(), diagnostics);
    };

    // A type mismatch is reported in preference to the store's error.
    if let Some(secret_type) = secret.secret_type.as_deref() {
        if !secret_type.is_empty() && secret_type != SECRET_TYPE_TLS {
            diagnostics.add(
                resource,
                format!(
                    "TLS secret {} is of a wrong type '{}', must be '{}'. \
                     SSL termination will not be enabled for this server.",
                    tls.secret, secret_type, SECRET_TYPE_TLS
                ),
            );
            return (StreamSsl::disabled(), diagnostics);
        }
    }

    if let Some(err) = &secret.error {
        diagnostics.add(
            resource,
            format!(
                "TLS secret {} is invalid: {}. SSL termination will not be enabled for this server.",
                tls.secret, err
            ),
        );
        return (StreamSsl::disabled(), diagnostics);
    }

    (
        StreamSsl {
            enabled: true,
            certificate: secret.path.clone(),
            certificate_key: secret.path.clone(),
        },
        diagnostics,
    )
}
