//! Terminal display system
//!
//! User-facing communication (status lines, prompts, progress), kept apart
//! from diagnostic logging, which goes through tracing.

pub mod interactive;
pub mod progress;
pub mod providers;
pub mod status;
pub mod styling;

pub use progress::BarTracker;
pub use providers::{OperationSummary, ProgressTracker};

/// Display manager that coordinates all user-facing communication
pub struct Display {
    color: bool,
    styling: styling::StyleManager,
}

impl Display {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            styling: styling::StyleManager::new(color),
        }
    }

    /// Status updates with semantic intent
    pub fn status(&self) -> status::StatusDisplay<'_> {
        status::StatusDisplay::new(&self.styling)
    }

    /// Interactive prompts
    pub fn prompt(&self) -> interactive::InteractiveDisplay {
        interactive::InteractiveDisplay::new(self.color)
    }

    /// Progress tracking for long operations
    pub fn progress(&self) -> progress::ProgressDisplay<'_> {
        progress::ProgressDisplay::new(&self.styling)
    }
}
