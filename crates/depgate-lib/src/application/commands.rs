//! Command execution
//!
//! The install gate: fetch the package, classify its dependency tree, report
//! and ask for confirmation when the footprint is large, then hand over to
//! `dep ensure`.

use crate::application::CliConfig;
use crate::application::session::{CommandSession, Session};
use crate::dependency::classify;
use crate::display::{confirmation_prompt, render_stats, render_summary};
use crate::primitives::LogContext;
use crate::{log_debug, log_info};
use anyhow::{Context, Result};
use thiserror::Error;

/// Status line printed before the fetch step
pub const FETCH_MESSAGE: &str = "Ensuring dependencies are on our GOPATH..";

/// Status line printed before the ensure step
pub const ENSURE_MESSAGE: &str = "Forwarding your request to `dep ensure` ..";

const FETCH_SUBCOMMAND: &str = "get";
const ENSURE_SUBCOMMAND: &str = "ensure";

/// Invocation errors detected before any external command runs
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("No package specified")]
    MissingPackage,
}

/// How a gate run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both package-manager steps ran
    Forwarded,
    /// The user declined after seeing the report
    Declined,
}

/// The package identifier is the first forwarded argument that is not a flag
pub fn package_from_args(args: &[String]) -> Option<&str> {
    args.iter()
        .map(String::as_str)
        .find(|arg| !arg.starts_with('-'))
}

/// Run the gate for a parsed command line
pub fn execute_command(config: CliConfig) -> Result<()> {
    let session = CommandSession::new(config.app_config)
        .context("Failed to set up the stats client")?;

    run_gate(&session, &config.args).map(|_| ())
}

/// Run the gate with a provided session (for testing)
pub fn run_gate(session: &dyn Session, args: &[String]) -> Result<Outcome> {
    let package = package_from_args(args)
        .ok_or(CommandError::MissingPackage)?
        .to_string();
    let display = session.display();
    let config = session.config().app_config();

    display.message(FETCH_MESSAGE);
    let fetched = session
        .process()
        .forward(&config.go_bin, FETCH_SUBCOMMAND, args);
    display.message("");
    fetched.with_context(|| format!("Failed to fetch {package}"))?;

    let spinner = display.spinner(&format!("Resolving dependencies of {package}"));
    let tree = session.resolver().resolve(&package);
    spinner.finish();
    let tree = tree.with_context(|| format!("Failed to resolve dependency tree of {package}"))?;

    let classification = classify(&tree);
    log_debug!(
        &format!(
            "{} direct, {} indirect dependencies",
            classification.direct.len(),
            classification.indirect.len()
        ),
        LogContext::for_package("classify", &package)
    );

    if classification.needs_report() {
        let styling = display.styling();
        display.lines(&render_summary(styling, &package, &classification));

        let stats = session
            .stats()
            .lookup(&package)
            .with_context(|| format!("Failed to look up stats for {package}"))?;
        display.message(&render_stats(styling, &stats));
        display.message("");

        let confirmed = session
            .interactive()
            .confirm(&confirmation_prompt(styling, &package))
            .context("Failed to read confirmation")?;

        if !confirmed {
            log_info!(
                "Installation declined",
                LogContext::for_package("confirm", &package)
            );
            return Ok(Outcome::Declined);
        }
    }

    display.message(ENSURE_MESSAGE);
    display.message("");
    session
        .process()
        .forward(&config.dep_bin, ENSURE_SUBCOMMAND, args)
        .with_context(|| format!("Failed to ensure dependencies for {package}"))?;

    Ok(Outcome::Forwarded)
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
