//! # vkbackup Library
//!
//! Copies VK profile photos to a Yandex Disk folder and records what was
//! copied in a JSON manifest.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, enums, and shared errors
//! - [`logger`] - Structured logging with progress tracking
//! - [`networking`] - Shared async HTTP client
//! - [`api`] - VK photo listing and Yandex Disk clients
//! - [`backup`] - Selection, naming, manifest and the run itself
//! - [`display`] - Status lines, prompts and progress bars
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! vkbackup_lib::main().await
//! # }
//! ```

pub mod api;
pub mod application;
pub mod backup;
pub mod display;
pub mod logger;
pub mod networking;
pub mod primitives;

// Re-export commonly used types for convenience
pub use api::{DiskTarget, LiveDiskClient, LiveVkClient, PhotoSource};
pub use application::{AppConfig, Cli, execute_command, run_backup};
pub use backup::{BackupOrchestrator, BackupRequest, RunOutcome, TerminalState};
pub use logger::Logger;
pub use networking::{NetworkingConfig, NetworkingManager};
pub use primitives::{ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, NamingStrategy};

use anyhow::Result;

pub async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    execute_command(config).await
}
