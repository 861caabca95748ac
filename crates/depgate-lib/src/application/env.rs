//! Color conventions read from the process environment
//!
//! depgate honours the common `NO_COLOR`, `FORCE_COLOR`, `CLICOLOR` and `CI`
//! variables. The result is an optional color intent that replaces the
//! default before CLI flags are merged, so `--color` always has the last word.

use crate::primitives::{ColorIntent, ConfigError};
use serde::Deserialize;

/// Color-related variables, as read by `envy`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// Any non-empty value disables color
    pub no_color: Option<String>,
    /// `0`/`false` disables, `1`/`2`/`3`/`true` enables; other values are ignored
    pub force_color: Option<String>,
    /// `0` disables color
    pub clicolor: Option<String>,
    /// Any value marks a CI run
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(envy::from_env()?)
    }

    /// Color intent implied by the environment, if any
    ///
    /// A recognised `FORCE_COLOR` wins outright, including inside CI. Without
    /// it, `NO_COLOR`, `CLICOLOR=0` or `CI` each turn color off.
    pub fn color_intent(&self) -> Option<ColorIntent> {
        if let Some(forced) = self.forced() {
            return Some(forced);
        }
        self.disabled().then_some(ColorIntent::Never)
    }

    fn forced(&self) -> Option<ColorIntent> {
        match self.force_color.as_deref()? {
            "0" | "false" => Some(ColorIntent::Never),
            "1" | "2" | "3" | "true" => Some(ColorIntent::Always),
            _ => None,
        }
    }

    fn disabled(&self) -> bool {
        self.no_color.as_deref().is_some_and(|v| !v.is_empty())
            || self.clicolor.as_deref() == Some("0")
            || self.ci.is_some()
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
