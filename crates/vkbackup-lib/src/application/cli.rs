use crate::primitives::ConfigError;
use clap::Parser;

use super::config::AppConfig;

/// vkbackup - copy VK profile photos to Yandex Disk
///
/// The profile identifier, disk token and photo count are asked for
/// interactively (or read line by line from piped stdin).
#[derive(Debug, Clone, Parser)]
#[command(name = "vkbackup")]
#[command(about = "Back up VK profile photos to Yandex Disk")]
#[command(version)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        let cli = Cli::parse();
        Ok(Self {
            app_config: cli.config,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
