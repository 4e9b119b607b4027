//! Secret references.
//!
//! The compiler never sees secret bytes. A watcher stores the material on
//! disk and hands over where it lives, what type the secret had and
//! whether it failed validation.

use serde::{Deserialize, Serialize};

/// Type tag of a secret holding a certificate and private key.
pub const SECRET_TYPE_TLS: &str = "kubernetes.io/tls";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SecretReference {
    /// File holding both certificate and key.
    pub path: String,

    /// Secret type, if the secret could be read at all.
    #[serde(rename = "type")]
    pub secret_type: Option<String>,

    /// Why the secret is unusable.
    pub error: Option<String>,
}

impl SecretReference {
    pub fn tls(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            secret_type: Some(SECRET_TYPE_TLS.to_string()),
            error: None,
        }
    }

    pub fn with_type(mut self, secret_type: impl Into<String>) -> Self {
        self.secret_type = Some(secret_type.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

pub trait SecretSource {
    fn secret(&self, namespace: &str, name: &str) -> Option<&SecretReference>;
}
