//! Status display for user feedback
//!
//! Semantic status lines in place of raw `println!` calls.

use super::styling::StyleManager;

/// Status display manager for semantic user feedback
pub struct StatusDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StatusDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    /// Display a success status with optional details
    ///
    /// Example: `display.status().success("Uploaded", "5 photos")`
    /// Output: `✓ Uploaded: 5 photos`
    pub fn success(&self, item: &str, details: &str) {
        println!("{}", self.styling.format_success(&join(item, details)));
    }

    /// Display an error status with details
    pub fn error(&self, item: &str, details: &str) {
        eprintln!("{}", self.styling.format_error(&join(item, details)));
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.styling.format_warning(message));
    }

    pub fn info(&self, message: &str) {
        println!("{}", self.styling.format_info(message));
    }

    /// Display a simple message without status symbols
    pub fn message(&self, text: &str) {
        println!("{}", text);
    }

    pub fn emphasis(&self, text: &str) {
        println!("{}", self.styling.style_emphasis(text));
    }

    pub fn subtle(&self, text: &str) {
        println!("{}", self.styling.style_subtle(text));
    }
}

fn join(item: &str, details: &str) -> String {
    if details.is_empty() {
        item.to_string()
    } else {
        format!("{}: {}", item, details)
    }
}
