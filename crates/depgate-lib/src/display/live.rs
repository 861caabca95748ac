//! Live display provider
//!
//! Prints to stdout and draws spinners on stderr so piped output stays
//! free of progress noise.

use super::progress::Spinner;
use super::providers::{DisplayProvider, ProgressTracker};
use super::styling::StyleManager;

/// Terminal-backed display for the lifetime of one command
pub struct LiveDisplayProvider {
    styling: StyleManager,
    unicode: bool,
}

impl LiveDisplayProvider {
    pub fn new(styling: StyleManager) -> Self {
        let unicode = console::Term::stderr().features().wants_emoji();
        Self { styling, unicode }
    }
}

impl DisplayProvider for LiveDisplayProvider {
    fn styling(&self) -> &StyleManager {
        &self.styling
    }

    fn message(&self, text: &str) {
        println!("{text}");
    }

    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker> {
        Box::new(Spinner::start(message, self.unicode))
    }
}
