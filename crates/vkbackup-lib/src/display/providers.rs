//! Display provider traits
//!
//! Lets business logic report progress without owning a terminal.

use std::fmt;

/// Individual progress tracker interface
pub trait ProgressTracker {
    /// Resize once the real amount of work is known
    fn set_length(&self, total: u64);

    /// Increment position by 1
    fn inc(&self);

    /// Update message with current item info
    fn tick(&self, item: &str);

    /// Finish with success message
    fn finish(&self, message: &str);

    /// Abandon with error message
    fn abandon(&self, message: &str);
}

/// Summary information for batch operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSummary {
    pub successful: usize,
    pub failed: usize,
    pub total: usize,
}

impl OperationSummary {
    pub fn new(successful: usize, failed: usize) -> Self {
        Self {
            successful,
            failed,
            total: successful + failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.successful > 0
    }

    pub fn is_partial_success(&self) -> bool {
        self.successful > 0 && self.failed > 0
    }

    pub fn is_failure(&self) -> bool {
        self.failed > 0 && self.successful == 0
    }
}

impl fmt::Display for OperationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} successful, {} failed", self.successful, self.failed)
    }
}

#[cfg(test)]
mod tests {
    include!("providers.test.rs");
}
