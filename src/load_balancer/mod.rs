//! Upstream assembly subsystem.
//!
//! # Data Flow
//! ```text
//! Declared upstreams (in resource order)
//!     → pool.rs (endpoint lookup, ExternalName handling, labels)
//!     → backend.rs (per-server limits, placeholder for empty pools)
//!     → method.rs (load balancing directive)
//!     → Vec<StreamUpstream> + Diagnostics
//! ```
//!
//! # Design Decisions
//! - Declaration order and endpoint order are preserved verbatim
//! - Empty pools never fail compilation; they degrade to a placeholder
//! - ExternalName intent is recorded even when it cannot be honoured

pub mod backend;
pub mod method;
pub mod pool;

pub use pool::build_upstreams;
