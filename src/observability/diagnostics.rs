//! Resource-scoped diagnostics.
//!
//! # Responsibilities
//! - Collect non-fatal messages about degraded features
//! - Keep them attached to the resource that caused them
//! - Merge results of independent generators in call order
//!
//! # Design Decisions
//! - Append-only; nothing here can fail or abort compilation
//! - Returned by value from each generator, never shared mutably

use std::fmt;

use serde::Serialize;

use crate::config::ResourceKey;

/// One diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub resource: ResourceKey,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.resource, self.message)
    }
}

/// Insertion-ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, resource: &ResourceKey, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(resource = %resource, "{}", message);
        self.entries.push(Diagnostic {
            resource: resource.clone(),
            message,
        });
    }

    /// Append everything from `other`, keeping its order.
    pub fn merge(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Messages attached to one resource, in insertion order.
    pub fn messages_for<'a>(&'a self, resource: &'a ResourceKey) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |d| &d.resource == resource)
            .map(|d| d.message.as_str())
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
