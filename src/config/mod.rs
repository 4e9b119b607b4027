//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → CompilerConfig (immutable, shared by every compilation)
//!
//! bundle file (TOML: resource + listener port + resolved state)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Bundle → compiler
//! ```
//!
//! # Design Decisions
//! - All settings have defaults to allow minimal files
//! - Resource fields keep "unset" distinct from "set to empty";
//!   defaults.rs is the single place that resolves them
//! - Validation separates syntactic (serde) from semantic checks

pub mod defaults;
pub mod loader;
pub mod resource;
pub mod schema;
pub mod validation;

pub use loader::{compile_bundles, BatchOutcome, Bundle, ConfigError, FileError};
pub use resource::{
    Action, HealthCheck, Listener, Match, ResourceKey, SessionParameters, Tls, TransportServer,
    TransportServerSpec, Upstream, UpstreamParameters, TLS_PASSTHROUGH_LISTENER_NAME,
};
pub use schema::{CompilerConfig, LogFormat, ObservabilityConfig};
