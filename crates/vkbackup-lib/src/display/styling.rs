//! Terminal-aware styling
//!
//! Semantic colors and symbols built on `console`, reduced to plain text
//! when color is disabled.

use console::Style;

/// Style manager shared by the status and progress displays
pub struct StyleManager {
    color: bool,
    success: Style,
    error: Style,
    warning: Style,
    info: Style,
    emphasis: Style,
    muted: Style,
}

impl StyleManager {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            success: Style::new().green(),
            error: Style::new().red(),
            warning: Style::new().yellow(),
            info: Style::new().cyan(),
            emphasis: Style::new().bold(),
            muted: Style::new().dim(),
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    fn apply(&self, style: &Style, text: &str) -> String {
        if self.color {
            style.apply_to(text).force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn style_success(&self, text: &str) -> String {
        self.apply(&self.success, text)
    }

    pub fn style_error(&self, text: &str) -> String {
        self.apply(&self.error, text)
    }

    pub fn style_warning(&self, text: &str) -> String {
        self.apply(&self.warning, text)
    }

    pub fn style_info(&self, text: &str) -> String {
        self.apply(&self.info, text)
    }

    pub fn style_emphasis(&self, text: &str) -> String {
        self.apply(&self.emphasis, text)
    }

    pub fn style_subtle(&self, text: &str) -> String {
        self.apply(&self.muted, text)
    }

    fn symbol(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        if self.color { unicode } else { ascii }
    }

    /// Format success message with symbol and styling
    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_success(self.symbol("✓", "[ok]")), message)
    }

    /// Format error message with symbol and styling
    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_error(self.symbol("✗", "[error]")), message)
    }

    /// Format warning message with symbol and styling
    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_warning(self.symbol("!", "[warn]")), message)
    }

    /// Format info message with symbol and styling
    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.style_info(self.symbol("ℹ", "[info]")), message)
    }
}

#[cfg(test)]
mod tests {
    include!("styling.test.rs");
}
