//! Command session architecture
//!
//! Each invocation creates a session that owns its collaborators. Command
//! handlers only see the provider traits, so the flow can be exercised with
//! the mocks in `session_mocks`.

use crate::application::config::AppConfig;
use crate::dependency::{GoListResolver, TreeResolver};
use crate::display::{
    ConfirmError, DisplayProvider, LiveDisplayProvider, StyleManager, confirm_interactive,
    confirm_lines,
};
use crate::stats::{GoSearchClient, LookupError, StatsLookup};
use std::io::IsTerminal;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::debug;

/// Failures running a forwarded package-manager command
#[derive(Debug, Error)]
pub enum ForwardingError {
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Provider trait for running external package managers
pub trait ProcessProvider {
    /// Run `program subcommand args...` attached to the user's terminal
    fn forward(&self, program: &str, subcommand: &str, args: &[String])
    -> Result<(), ForwardingError>;
}

/// Provider trait for configuration access
pub trait ConfigProvider {
    fn app_config(&self) -> &AppConfig;
}

/// Provider trait for the yes/no gate
pub trait InteractiveProvider {
    fn confirm(&self, prompt: &str) -> Result<bool, ConfirmError>;
}

/// Session trait that both CommandSession and MockCommandSession implement
pub trait Session {
    fn display(&self) -> &dyn DisplayProvider;

    fn resolver(&self) -> &dyn TreeResolver;

    fn stats(&self) -> &dyn StatsLookup;

    fn process(&self) -> &dyn ProcessProvider;

    fn config(&self) -> &dyn ConfigProvider;

    fn interactive(&self) -> &dyn InteractiveProvider;
}

/// Live implementation of ProcessProvider
pub struct LiveProcessProvider;

impl ProcessProvider for LiveProcessProvider {
    fn forward(
        &self,
        program: &str,
        subcommand: &str,
        args: &[String],
    ) -> Result<(), ForwardingError> {
        debug!("Forwarding: {} {} {}", program, subcommand, args.join(" "));

        let status = Command::new(program)
            .arg(subcommand)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ForwardingError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ForwardingError::Failed {
                program: program.to_string(),
                status,
            });
        }

        Ok(())
    }
}

/// Live implementation of ConfigProvider
pub struct LiveConfigProvider {
    app_config: AppConfig,
}

impl LiveConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }
}

impl ConfigProvider for LiveConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }
}

/// Live implementation of InteractiveProvider
pub struct LiveInteractiveProvider {
    yes_mode: bool,
    color: bool,
}

impl LiveInteractiveProvider {
    pub fn new(yes_mode: bool, color: bool) -> Self {
        Self { yes_mode, color }
    }

    /// Check if we're in a TTY environment suitable for interactive prompts
    fn is_tty() -> bool {
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }
}

impl InteractiveProvider for LiveInteractiveProvider {
    fn confirm(&self, prompt: &str) -> Result<bool, ConfirmError> {
        if self.yes_mode {
            debug!("Confirmation skipped (--yes)");
            return Ok(true);
        }

        if Self::is_tty() {
            return confirm_interactive(prompt, self.color);
        }

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        confirm_lines(prompt, &mut stdin.lock(), &mut stdout.lock())
    }
}

/// CommandSession owns all collaborators for a single invocation
pub struct CommandSession {
    display_provider: LiveDisplayProvider,
    resolver: GoListResolver,
    stats_client: GoSearchClient,
    process_provider: LiveProcessProvider,
    config_provider: LiveConfigProvider,
    interactive_provider: LiveInteractiveProvider,
}

impl CommandSession {
    pub fn new(app_config: AppConfig) -> Result<Self, LookupError> {
        let color = app_config.color_enabled();
        let stats_client = GoSearchClient::new(
            app_config.stats_endpoint.clone(),
            app_config.net_timeout_duration(),
        )?;

        Ok(Self {
            display_provider: LiveDisplayProvider::new(StyleManager::new(color)),
            resolver: GoListResolver::new(app_config.go_bin.clone()),
            stats_client,
            process_provider: LiveProcessProvider,
            interactive_provider: LiveInteractiveProvider::new(app_config.yes, color),
            config_provider: LiveConfigProvider::new(app_config),
        })
    }
}

impl Session for CommandSession {
    fn display(&self) -> &dyn DisplayProvider {
        &self.display_provider
    }

    fn resolver(&self) -> &dyn TreeResolver {
        &self.resolver
    }

    fn stats(&self) -> &dyn StatsLookup {
        &self.stats_client
    }

    fn process(&self) -> &dyn ProcessProvider {
        &self.process_provider
    }

    fn config(&self) -> &dyn ConfigProvider {
        &self.config_provider
    }

    fn interactive(&self) -> &dyn InteractiveProvider {
        &self.interactive_provider
    }
}

#[cfg(test)]
mod tests {
    include!("session.test.rs");
}
