//! Settings and bundle loading from disk.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compiler::{compile_transport_server, TransportServerConfig};
use crate::config::resource::TransportServer;
use crate::config::schema::CompilerConfig;
use crate::config::validation::{validate_bundle, ValidationError};
use crate::discovery::ResolvedState;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// A loading failure tied to the file that caused it.
#[derive(Debug, Error)]
#[error("{}: {source}", path.display())]
pub struct FileError {
    pub path: PathBuf,
    #[source]
    pub source: ConfigError,
}

impl FileError {
    pub fn new(path: &Path, source: ConfigError) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A resource together with everything it references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Port of the listener named by the resource.
    #[serde(default)]
    pub listener_port: u16,

    pub transport_server: TransportServer,

    #[serde(default)]
    pub state: ResolvedState,
}

impl Bundle {
    pub fn compile(&self, config: &CompilerConfig) -> TransportServerConfig {
        compile_transport_server(&self.transport_server, self.listener_port, &self.state, config)
    }
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.transport_server.key(), f)
    }
}

/// Load compiler settings from a TOML file.
pub fn load_config(path: &Path) -> Result<CompilerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load a bundle from a TOML file and validate it.
pub fn load_bundle(path: &Path) -> Result<Bundle, ConfigError> {
    let content = fs::read_to_string(path)?;
    let bundle: Bundle = toml::from_str(&content)?;

    validate_bundle(&bundle).map_err(ConfigError::Validation)?;

    tracing::debug!(
        path = %path.display(),
        resource = %bundle,
        "Bundle loaded"
    );
    Ok(bundle)
}

/// Result of compiling a batch of bundle files.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Compiled configs of the bundles that loaded, in input order.
    pub compiled: Vec<TransportServerConfig>,
    pub failures: Vec<FileError>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Load and compile every bundle. A bundle that fails to load is
/// recorded and skipped; the rest are still compiled.
pub fn compile_bundles<P: AsRef<Path>>(paths: &[P], config: &CompilerConfig) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for path in paths {
        let path = path.as_ref();
        match load_bundle(path) {
            Ok(bundle) => outcome.compiled.push(bundle.compile(config)),
            Err(e) => {
                let err = FileError::new(path, e);
                tracing::error!(path = %path.display(), error = %err.source, "Skipping bundle");
                outcome.failures.push(err);
            }
        }
    }
    outcome
}
