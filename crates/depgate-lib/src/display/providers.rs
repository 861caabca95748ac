//! Display provider traits
//!
//! Command handlers talk to these traits only, so tests can swap in the
//! recording mock.

use super::styling::StyleManager;

/// User-facing output for one command session
pub trait DisplayProvider {
    /// Styling shared by everything this provider prints
    fn styling(&self) -> &StyleManager;

    /// Print one line of output
    fn message(&self, text: &str);

    /// Print several lines in order
    fn lines(&self, lines: &[String]) {
        for line in lines {
            self.message(line);
        }
    }

    /// Start an indeterminate progress indicator
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker>;
}

/// Handle to a running progress indicator
pub trait ProgressTracker {
    /// Stop and remove the indicator
    fn finish(&self);
}
