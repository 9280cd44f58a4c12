//! Progress display for the upload loop
//!
//! Progress bars using indicatif, styled to match the terminal.

use super::providers::ProgressTracker;
use super::styling::StyleManager;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Progress display manager for long-running operations
pub struct ProgressDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> ProgressDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    /// Create a progress bar for operations with known total
    ///
    /// Example:
    /// ```ignore
    /// let progress = display.progress().bar("Uploading photos", 5);
    /// progress.tick("10.jpg");
    /// progress.inc();
    /// progress.finish("Uploaded 5 photos");
    /// ```
    pub fn bar(&self, message: &str, total: u64) -> BarTracker {
        let pb = ProgressBar::new(total);

        let template = if self.styling.color_enabled() {
            "{spinner:.green} {msg} [{wide_bar:.cyan/blue}] {pos}/{len}"
        } else {
            "{spinner} {msg} [{wide_bar}] {pos}/{len}"
        };

        // Templates are fixed strings; a parse failure keeps indicatif's default
        if let Ok(style) = ProgressStyle::with_template(template) {
            pb.set_style(style.progress_chars("##-"));
        }

        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        BarTracker::new(pb, message)
    }
}

/// Progress tracker backed by an indicatif bar
pub struct BarTracker {
    bar: ProgressBar,
    label: String,
}

impl BarTracker {
    fn new(bar: ProgressBar, label: &str) -> Self {
        Self {
            bar,
            label: label.to_string(),
        }
    }

    /// Tracker that draws nothing (non-interactive runs and tests)
    pub fn hidden(total: u64) -> Self {
        Self::new(
            ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden()),
            "",
        )
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }
}

impl ProgressTracker for BarTracker {
    fn set_length(&self, total: u64) {
        self.bar.set_length(total);
    }

    fn inc(&self) {
        self.bar.inc(1);
    }

    fn tick(&self, item: &str) {
        self.bar.set_message(format!("{} {}", self.label, item));
    }

    fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    fn abandon(&self, message: &str) {
        self.bar.abandon_with_message(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    include!("progress.test.rs");
}
