//! Health-check compilation.
//!
//! # Data Flow
//! ```text
//! Action target name + generated upstream name + declared upstreams
//!     → active.rs (find target, overlay settings on defaults)
//!     → expect.rs (parse expectation, build named match block)
//!     → (Option<StreamHealthCheck>, Option<Match>)
//! ```
//!
//! # Design Decisions
//! - Exactly one upstream is monitored: the one receiving traffic
//! - The match block name derives from the upstream's unique name,
//!   so match blocks never collide either
//! - Regex prefixes are an explicit, ordered table

pub mod active;
pub mod expect;

pub use active::build_health_check;
