use clap::Parser;

use super::config::AppConfig;

/// depgate - review a Go package's dependency footprint before installing it
#[derive(Debug, Clone, Parser)]
#[command(name = "depgate")]
#[command(about = "Show a package's dependency footprint before `go get` and `dep ensure`")]
#[command(version)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// Arguments forwarded unmodified to `go get` and `dep ensure`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub args: Vec<String>,
}

impl CliConfig {
    /// Parse the process arguments, exiting on `--help`, `--version` or
    /// usage errors
    pub fn parse_args() -> Self {
        Cli::parse().into()
    }

    /// Parse an explicit argument list
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Cli::try_parse_from(args)?.into())
    }
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            args: cli.args,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
