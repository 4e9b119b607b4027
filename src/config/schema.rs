//! Compiler settings schema.
//!
//! Settings that apply to every resource compiled by one controller
//! instance. All types derive Serde traits for deserialization from a
//! TOML settings file.

use serde::{Deserialize, Serialize};

/// Root settings for the stream configuration compiler.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompilerConfig {
    /// Data plane can re-resolve empty upstreams at runtime.
    /// When false, empty upstreams get a placeholder backend.
    pub plus: bool,

    /// A name resolver is configured, so ExternalName services are usable.
    pub resolver_configured: bool,

    /// Emit server and stream snippets from resources.
    pub enable_snippets: bool,

    /// Disable IPv6 listeners on generated servers.
    pub disable_ipv6: bool,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            plus: false,
            resolver_configured: false,
            enable_snippets: true,
            disable_ipv6: false,
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
