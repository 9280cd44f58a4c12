//! Interactive prompts and user input
//!
//! Text prompts via dialoguer with a theme matching the color decision.

use anyhow::Result;
use dialoguer::{
    Input,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use std::io;

/// Interactive display manager for prompts
pub struct InteractiveDisplay {
    theme: Box<dyn Theme>,
}

impl InteractiveDisplay {
    pub(crate) fn new(color: bool) -> Self {
        let theme: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };

        Self { theme }
    }

    /// Text prompt that re-asks until `validate` accepts the answer.
    ///
    /// The raw answer is returned; callers re-run their own parsing on it.
    pub fn ask_validated<F, T, E>(&self, message: &str, allow_empty: bool, validate: F) -> Result<String>
    where
        F: Fn(&str) -> std::result::Result<T, E>,
        E: std::fmt::Display,
    {
        let answer = Input::<String>::with_theme(&*self.theme)
            .with_prompt(message)
            .allow_empty(allow_empty)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                validate(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;

        Ok(answer)
    }

    /// Handle non-interactive environment gracefully
    pub fn is_interactive() -> bool {
        use std::io::IsTerminal;
        io::stdin().is_terminal()
    }
}
