//! Network-facing settings of a stream server.
//!
//! # Data Flow
//! ```text
//! TransportServer listener + host
//!     → listener.rs (UDP, passthrough, status zone, unix socket)
//!
//! TransportServer TLS reference + resolved secret
//!     → tls.rs (enabled or disabled stanza, diagnostics)
//! ```
//!
//! # Design Decisions
//! - Both are pure functions of the resource and resolved state
//! - TLS problems degrade the listener to plain TCP, never fail it

pub mod listener;
pub mod tls;

pub use listener::ListenerSettings;
pub use tls::build_ssl;
