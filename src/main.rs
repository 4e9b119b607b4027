//! Stream proxy configuration compiler (CLI).
//!
//! # Architecture Overview
//!
//! ```text
//!   bundle.toml ──▶ config::loader ──▶ config::validation
//!                                            │
//!                                            ▼
//!                 ┌──────────────────── compiler ─────────────────────┐
//!                 │  routing::namer ─▶ load_balancer (upstreams)      │
//!                 │                 ─▶ health (check + match)         │
//!                 │                 ─▶ net::tls (ssl)                 │
//!                 │  resilience (timeouts, retries), net::listener    │
//!                 └────────────────────────┬──────────────────────────┘
//!                                          ▼
//!              TransportServerConfig + Diagnostics ──▶ stdout (JSON)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use stream_config::config::loader::{compile_bundles, load_bundle, load_config, FileError};
use stream_config::observability::logging::init_logging;
use stream_config::CompilerConfig;

#[derive(Parser)]
#[command(name = "stream-config")]
#[command(about = "Compile TransportServer resources into stream proxy configuration", long_about = None)]
struct Cli {
    /// Compiler settings file (TOML). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile bundles and print the result as a JSON array
    Compile {
        /// Bundle files (TOML)
        #[arg(required = true)]
        bundles: Vec<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Load and validate bundles without compiling them
    Check {
        /// Bundle files (TOML)
        #[arg(required = true)]
        bundles: Vec<PathBuf>,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", FileError::new(path, e));
                return Ok(ExitCode::FAILURE);
            }
        },
        None => CompilerConfig::default(),
    };

    init_logging(&config.observability);

    tracing::info!(
        plus = config.plus,
        resolver_configured = config.resolver_configured,
        enable_snippets = config.enable_snippets,
        "stream-config v0.1.0 starting"
    );

    match cli.command {
        Commands::Compile { bundles, pretty } => {
            let outcome = compile_bundles(&bundles, &config);

            let out = if pretty {
                serde_json::to_string_pretty(&outcome.compiled)?
            } else {
                serde_json::to_string(&outcome.compiled)?
            };
            println!("{}", out);

            if outcome.is_success() {
                Ok(ExitCode::SUCCESS)
            } else {
                tracing::error!(failed = outcome.failures.len(), "Some bundles were not compiled");
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Check { bundles } => {
            let mut failed = false;
            for path in &bundles {
                match load_bundle(path) {
                    Ok(bundle) => {
                        tracing::info!(path = %path.display(), resource = %bundle, "Bundle is valid");
                    }
                    Err(e) => {
                        tracing::error!(path = %path.display(), error = %e, "Bundle is invalid");
                        failed = true;
                    }
                }
            }
            Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
    }
}
