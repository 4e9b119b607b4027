//! Resilience settings of a stream server.
//!
//! # Data Flow
//! ```text
//! upstreamParameters / sessionParameters (both optional)
//!     → timeouts.rs (connect timeout, idle session timeout)
//!     → retries.rs (next-upstream gate, tries, time budget)
//! ```
//!
//! # Design Decisions
//! - Every value has a named default; absent blocks are not errors
//! - Retries are opt-in as a whole

pub mod retries;
pub mod timeouts;

pub use retries::NextUpstream;
pub use timeouts::Timeouts;
