use crate::primitives::*;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance - ensures single initialization
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Logger implementation using tracing
#[derive(Debug)]
pub struct Logger;

impl Logger {
    /// Initialize the global logger
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Self::filter_directives(config.level)));

        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Pretty) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.ansi)
                .pretty()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(config.ansi)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Pretty) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(config.ansi)
                .pretty()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        GLOBAL_LOGGER
            .set(Logger)
            .map_err(|_| LoggerError::AlreadyInitialized)?;

        tracing::debug!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            "Logger initialized"
        );

        GLOBAL_LOGGER.get().ok_or(LoggerError::InitializationFailed {
            reason: "logger vanished after initialization".to_string(),
        })
    }

    /// Filter used when RUST_LOG is not set: depgate at the requested level,
    /// HTTP plumbing held at warn
    pub fn filter_directives(level: LogLevel) -> String {
        let level_str = level.as_directive();
        format!(
            "depgate={level_str},depgate_lib={level_str},hyper_util=warn,reqwest=warn,h2=warn,rustls=warn,{level_str}"
        )
    }

    /// Get reference to the global logger instance
    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    /// Log an info message with optional context
    pub fn info(&self, message: &str, context: Option<LogContext>) {
        if let Some(ctx) = context {
            tracing::info!(
                operation = %ctx.operation,
                package = ctx.package.as_deref(),
                "{}", message
            );
        } else {
            tracing::info!("{}", message);
        }
    }

    /// Log a debug message with optional context
    pub fn debug(&self, message: &str, context: Option<LogContext>) {
        if let Some(ctx) = context {
            tracing::debug!(
                operation = %ctx.operation,
                package = ctx.package.as_deref(),
                "{}", message
            );
        } else {
            tracing::debug!("{}", message);
        }
    }
}

/// Log through the global logger if available, fall back to tracing macros
#[macro_export]
macro_rules! log_info {
    ($msg:expr) => {
        if let Some(logger) = $crate::logger::Logger::global() {
            logger.info($msg, None);
        } else {
            tracing::info!("{}", $msg);
        }
    };
    ($msg:expr, $ctx:expr) => {
        if let Some(logger) = $crate::logger::Logger::global() {
            logger.info($msg, Some($ctx));
        } else {
            tracing::info!("{}", $msg);
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($msg:expr) => {
        if let Some(logger) = $crate::logger::Logger::global() {
            logger.debug($msg, None);
        } else {
            tracing::debug!("{}", $msg);
        }
    };
    ($msg:expr, $ctx:expr) => {
        if let Some(logger) = $crate::logger::Logger::global() {
            logger.debug($msg, Some($ctx));
        } else {
            tracing::debug!("{}", $msg);
        }
    };
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
