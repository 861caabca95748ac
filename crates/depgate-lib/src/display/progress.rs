//! Spinner for operations of unknown duration

use super::providers::ProgressTracker;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// indicatif spinner drawn on stderr
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Start a spinner; hidden when stderr is not a terminal
    pub fn start(message: &str, unicode: bool) -> Self {
        if !std::io::stderr().is_terminal() {
            return Self::hidden(message);
        }

        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        let tick_strings: &[&str] = if unicode {
            &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"]
        } else {
            &["-", "\\", "|", "/", "+"]
        };
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(tick_strings);

        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// A spinner that never draws
    pub fn hidden(message: &str) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_message(message.to_string());
        Self { bar }
    }
}

impl ProgressTracker for Spinner {
    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    include!("progress.test.rs");
}
