//! Color-aware text styling
//!
//! Wraps `console` styles so every caller shares one decision about whether
//! ANSI sequences are emitted.

use console::Style;

/// Style manager resolved once per session
#[derive(Debug, Clone)]
pub struct StyleManager {
    bold: Style,
}

impl StyleManager {
    pub fn new(color: bool) -> Self {
        Self {
            bold: Style::new().bold().force_styling(color),
        }
    }

    /// Styling that never emits escape sequences
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Style text with emphasis (bold)
    pub fn style_emphasis(&self, text: &str) -> String {
        self.bold.apply_to(text).to_string()
    }
}
