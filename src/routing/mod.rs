//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! TransportServer identity (namespace, name)
//!     → namer.rs (prefix "ts_<namespace>_<name>")
//!     → upstream names, proxy_pass target, match block names
//! ```
//!
//! # Design Decisions
//! - One namer per resource, built once per compilation
//! - Naming is a pure function: same identity in, same names out
//! - Prefix embeds resource kind and namespace so names never collide
//!   across namespaces or with other resource kinds

pub mod namer;

pub use namer::{UpstreamNamer, UpstreamNaming};
