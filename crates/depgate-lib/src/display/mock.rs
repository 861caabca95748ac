//! Mock display provider for testing
//!
//! Records every message and spinner transition for assertions.

use super::providers::{DisplayProvider, ProgressTracker};
use super::styling::StyleManager;
use std::sync::{Arc, Mutex};

/// A recorded display interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Message(String),
    SpinnerStarted(String),
    SpinnerFinished(String),
}

/// Mock implementation of DisplayProvider that records all calls
#[derive(Clone)]
pub struct MockDisplayProvider {
    styling: StyleManager,
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

impl MockDisplayProvider {
    pub fn new() -> Self {
        Self {
            styling: StyleManager::plain(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All recorded calls, in order
    pub fn get_calls(&self) -> Vec<DisplayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Only the printed lines
    pub fn messages(&self) -> Vec<String> {
        self.get_calls()
            .into_iter()
            .filter_map(|call| match call {
                DisplayCall::Message(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn has_message(&self, text: &str) -> bool {
        self.messages().iter().any(|m| m == text)
    }

    fn record(&self, call: DisplayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockDisplayProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayProvider for MockDisplayProvider {
    fn styling(&self) -> &StyleManager {
        &self.styling
    }

    fn message(&self, text: &str) {
        self.record(DisplayCall::Message(text.to_string()));
    }

    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker> {
        self.record(DisplayCall::SpinnerStarted(message.to_string()));
        Box::new(MockSpinner {
            message: message.to_string(),
            calls: self.calls.clone(),
        })
    }
}

struct MockSpinner {
    message: String,
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

impl ProgressTracker for MockSpinner {
    fn finish(&self) {
        self.calls
            .lock()
            .unwrap()
            .push(DisplayCall::SpinnerFinished(self.message.clone()));
    }
}
