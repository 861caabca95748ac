//! depgate primitives - core types, errors, and coordination
//!
//! Shared types used across the crate: log configuration enums, color
//! intent, and the configuration/logger error types.

use clap::ValueEnum;
use std::str::FromStr;
use thiserror::Error;

mod shared;
use shared::impl_fromstr_for_value_enum;

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// TEXT
    /// alias: text, txt, plain
    Text,

    /// JSON
    /// alias: json
    Json,

    /// Multi-line, human oriented
    /// alias: pretty, yaml, yml
    Pretty,
}

/// Color output intent, resolved against the terminal at display time
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorIntent {
    Auto,
    Always,
    Never,
}

// ============================================================================
// LOGGER CONFIGURATION TYPES
// ============================================================================

/// Logger configuration derived from the application config
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub ansi: bool,
}

/// Context attached to log lines emitted for one step of the gate
#[derive(Debug, Clone)]
pub struct LogContext {
    pub operation: String,
    pub package: Option<String>,
}

impl LogContext {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            package: None,
        }
    }

    pub fn for_package(operation: &str, package: &str) -> Self {
        Self {
            operation: operation.to_string(),
            package: Some(package.to_string()),
        }
    }
}

// ============================================================================
// STRUCTURED ERROR TYPES
// ============================================================================

/// Application configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Failed to parse environment variables: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

/// Logger initialization errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to initialize tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

impl LogLevel {
    /// Convert verbosity level from AppConfig to LogLevel
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            4.. => LogLevel::Trace,
        }
    }

    /// Directive string understood by `EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl ColorIntent {
    /// Resolve the intent against whether the target stream supports color
    pub fn resolve(&self, terminal_supports_color: bool) -> bool {
        match self {
            ColorIntent::Always => true,
            ColorIntent::Never => false,
            ColorIntent::Auto => terminal_supports_color,
        }
    }
}

impl ValueEnum for LogFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Json, Self::Pretty]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Text => Some(
                clap::builder::PossibleValue::new("text")
                    .alias("txt")
                    .alias("plain"),
            ),
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Pretty => Some(
                clap::builder::PossibleValue::new("pretty")
                    .alias("yaml")
                    .alias("yml"),
            ),
        }
    }
}

impl ValueEnum for ColorIntent {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Auto, Self::Always, Self::Never]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Auto => Some(clap::builder::PossibleValue::new("auto")),
            Self::Always => Some(
                clap::builder::PossibleValue::new("always")
                    .alias("yes")
                    .alias("force"),
            ),
            Self::Never => Some(
                clap::builder::PossibleValue::new("never")
                    .alias("no")
                    .alias("none"),
            ),
        }
    }
}

// Generate FromStr implementations for all ValueEnum types
impl_fromstr_for_value_enum!(LogFormat, "invalid log format");
impl_fromstr_for_value_enum!(LogOutput, "invalid log output stream");
impl_fromstr_for_value_enum!(ColorIntent, "invalid color intent");

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
