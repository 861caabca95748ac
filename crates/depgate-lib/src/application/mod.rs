//! Application layer modules
//!
//! CLI interface, configuration management, the command session and the
//! install gate itself.

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod loader;
pub mod session;
#[cfg(any(test, feature = "test-utils"))]
pub mod session_mocks;

pub use cli::{Cli, CliConfig};
pub use commands::{CommandError, Outcome, execute_command, package_from_args, run_gate};
pub use config::AppConfig;
pub use env::EnvironmentConfig;
pub use session::{CommandSession, ForwardingError, Session};
