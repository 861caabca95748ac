//! # depgate Library
//!
//! Shows the transitive dependency footprint of a Go package and asks for
//! confirmation before forwarding to `go get` and `dep ensure`.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types and errors
//! - [`logger`] - Structured logging
//! - [`dependency`] - Package tree, resolver and direct/indirect classification
//! - [`stats`] - Package popularity lookup
//! - [`display`] - Report rendering, prompts and spinners
//! - [`application`] - CLI interface, configuration and the install gate
//!
//! ## Quick Start
//!
//! ```no_run
//! depgate_lib::main().unwrap();
//! ```

pub mod application;
pub mod dependency;
pub mod display;
pub mod logger;
pub mod primitives;
pub mod stats;

// Re-export commonly used types for convenience
pub use anyhow::Result;
pub use application::{AppConfig, Cli, CliConfig, Outcome, execute_command, run_gate};
pub use dependency::{Classification, PackageNode, classify, total_count};
pub use logger::Logger;
pub use primitives::{ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};
pub use stats::{PackageStats, StatsLookup};

pub fn main() -> Result<()> {
    // Load configuration (env files, environment, CLI)
    let config = CliConfig::load()?;

    Logger::init(config.app_config.to_logger_config())?;
    tracing::debug!(args = ?config.args, "Starting depgate");

    execute_command(config)
}
