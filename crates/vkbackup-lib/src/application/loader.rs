//! Configuration loading
//!
//! Coordinates loading configuration from its sources in precedence order.

use crate::primitives::ConfigError;

use super::{cli::CliConfig, config::AppConfig, env::EnvironmentConfig};

impl AppConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<Self, ConfigError> {
        use dotenvy::from_filename;

        // 1. Start with defaults
        let mut config = Self::default();

        // 2. Load .env file (if it exists, don't error if missing)
        let env_files = [".env.local", ".env"];
        for env_file in &env_files {
            if let Err(e) = from_filename(env_file) {
                if !e.not_found() {
                    return Err(ConfigError::EnvFileError {
                        file: env_file.to_string(),
                        source: e,
                    });
                }
            }
        }

        // 3. Standard color variables
        let env_config = EnvironmentConfig::load()?;
        config.color = env_config.apply_color_config(config.color);

        // 4. Override with CLI arguments and VKBACKUP_* variables
        let cli_config = CliConfig::load()?;
        config = config.merge_with(cli_config.app_config);

        // 5. Post-process and validate
        config.validate()?;

        Ok(config)
    }
}
