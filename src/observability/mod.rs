//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Generators (upstreams, TLS, health checks):
//!     → diagnostics.rs (resource-scoped warnings, returned with the config)
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → Status reporting (events/conditions on the resource)
//!     → Log aggregation (stderr, JSON or pretty)
//! ```
//!
//! # Design Decisions
//! - Diagnostics are data, not log lines; logging them is a side effect
//! - Structured logging (JSON) for machine parsing

pub mod diagnostics;
pub mod logging;

pub use diagnostics::{Diagnostic, Diagnostics};
