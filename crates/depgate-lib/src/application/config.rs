//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use crate::stats::DEFAULT_STATS_ENDPOINT;
use clap::Parser;
use serde::Deserialize;
use std::time::Duration;

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
    pub const NET_TIMEOUT: &str = "30";
    pub const GO_BIN: &str = "go";
    pub const DEP_BIN: &str = "dep";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap_or(0)
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap_or(LogFormat::Text)
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap_or(LogOutput::Stderr)
    }

    pub fn color() -> ColorIntent {
        defaults::COLOR.parse().unwrap_or(ColorIntent::Auto)
    }

    pub fn net_timeout() -> u64 {
        defaults::NET_TIMEOUT.parse().unwrap_or(30)
    }

    pub fn stats_endpoint() -> String {
        DEFAULT_STATS_ENDPOINT.to_string()
    }

    pub fn go_bin() -> String {
        defaults::GO_BIN.to_string()
    }

    pub fn dep_bin() -> String {
        defaults::DEP_BIN.to_string()
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Skip the confirmation prompt and install regardless of footprint
    #[arg(short, long, env = "DEPGATE_YES")]
    #[serde(default)]
    pub yes: bool,

    /// Stats request timeout in seconds
    #[arg(long, env = "DEPGATE_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,

    /// Package stats API endpoint
    #[arg(long, env = "DEPGATE_STATS_ENDPOINT", default_value = DEFAULT_STATS_ENDPOINT)]
    #[serde(default = "default_fns::stats_endpoint")]
    pub stats_endpoint: String,

    /// Program used for `get` and package listing
    #[arg(long, env = "DEPGATE_GO_BIN", default_value = defaults::GO_BIN)]
    #[serde(default = "default_fns::go_bin")]
    pub go_bin: String,

    /// Program used for `ensure`
    #[arg(long, env = "DEPGATE_DEP_BIN", default_value = defaults::DEP_BIN)]
    #[serde(default = "default_fns::dep_bin")]
    pub dep_bin: String,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "DEPGATE_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "DEPGATE_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "DEPGATE_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "DEPGATE_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            yes: false,
            net_timeout: default_fns::net_timeout(),
            stats_endpoint: default_fns::stats_endpoint(),
            go_bin: default_fns::go_bin(),
            dep_bin: default_fns::dep_bin(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig, resolving color against the log stream
    pub fn to_logger_config(&self) -> LoggerConfig {
        let stream_supports_color = match self.log_output {
            LogOutput::Stderr => console::colors_enabled_stderr(),
            LogOutput::Stdout => console::colors_enabled(),
        };

        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi: self.color.resolve(stream_supports_color),
        }
    }

    /// Whether report output on stdout is styled
    pub fn color_enabled(&self) -> bool {
        self.color.resolve(console::colors_enabled())
    }

    pub fn net_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.net_timeout)
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.yes {
            self.yes = true;
        }

        // For primitive fields, take other if it's not the default
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }
        if other.net_timeout != default_fns::net_timeout() {
            self.net_timeout = other.net_timeout;
        }
        if other.stats_endpoint != default_fns::stats_endpoint() {
            self.stats_endpoint = other.stats_endpoint;
        }
        if other.go_bin != default_fns::go_bin() {
            self.go_bin = other.go_bin;
        }
        if other.dep_bin != default_fns::dep_bin() {
            self.dep_bin = other.dep_bin;
        }

        // For enums, detect if it's non-default
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.net_timeout == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "net timeout must be at least one second".to_string(),
            });
        }

        for (flag, value) in [
            ("go-bin", &self.go_bin),
            ("dep-bin", &self.dep_bin),
            ("stats-endpoint", &self.stats_endpoint),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    reason: format!("{flag} must not be empty"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
