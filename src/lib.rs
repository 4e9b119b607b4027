//! Stream proxy configuration compiler.
//!
//! Turns a TransportServer resource plus resolved cluster state into a
//! fully defaulted stream configuration ready for rendering.

pub mod compiler;
pub mod config;
pub mod discovery;
pub mod health;
pub mod load_balancer;
pub mod net;
pub mod observability;
pub mod resilience;
pub mod routing;

pub use compiler::{compile_transport_server, TransportServerConfig};
pub use config::{Bundle, CompilerConfig, TransportServer};
pub use discovery::ResolvedState;
pub use observability::Diagnostics;
