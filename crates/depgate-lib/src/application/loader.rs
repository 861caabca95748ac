//! Configuration loading
//!
//! Coordinates loading configuration from env files, the environment and the
//! command line.

use crate::primitives::ConfigError;
use std::path::Path;
use tracing::debug;

use super::{cli::CliConfig, config::AppConfig, env::EnvironmentConfig};

/// Env files read at startup, most specific first
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load env files into the process environment, skipping missing ones
///
/// Variables already set are never overwritten, so earlier files win.
pub fn load_env_files<P: AsRef<Path>>(files: &[P]) -> Result<(), ConfigError> {
    for file in files {
        let file = file.as_ref();
        match dotenvy::from_filename(file) {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: file.display().to_string(),
                    source: e,
                });
            }
        }
    }

    Ok(())
}

impl AppConfig {
    /// Layer CLI values over defaults adjusted by the environment
    pub fn assemble(cli: AppConfig, env: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(intent) = env.color_intent() {
            config.color = intent;
        }
        config = config.merge_with(cli);
        config.validate()?;
        Ok(config)
    }
}

impl CliConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<Self, ConfigError> {
        // DEPGATE_* values from env files must be visible to clap
        load_env_files(&ENV_FILES)?;

        let env_config = EnvironmentConfig::load()?;
        let cli = CliConfig::parse_args();

        Ok(Self {
            app_config: AppConfig::assemble(cli.app_config, &env_config)?,
            args: cli.args,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
