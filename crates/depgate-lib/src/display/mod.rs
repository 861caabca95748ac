//! Terminal display
//!
//! User-facing output is kept apart from logging: reports, prompts and
//! spinners go through a `DisplayProvider`, diagnostics go through tracing.

pub mod interactive;
pub mod live;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod progress;
pub mod providers;
pub mod report;
pub mod styling;

pub use interactive::{ConfirmError, REPROMPT, confirm_interactive, confirm_lines, parse_answer};
pub use live::LiveDisplayProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::{DisplayCall, MockDisplayProvider};
pub use progress::Spinner;
pub use providers::{DisplayProvider, ProgressTracker};
pub use report::{confirmation_prompt, render_stats, render_summary};
pub use styling::StyleManager;
