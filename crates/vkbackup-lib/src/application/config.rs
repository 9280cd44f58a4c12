//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const NET_TIMEOUT: &str = "30";
    pub const COLOR: &str = "auto";
    pub const NAMING: &str = "literal";
    pub const FOLDER_NAME: &str = "vkphotos_backup";
    pub const MANIFEST_NAME: &str = "photos_info.json";
    pub const VK_API_URL: &str = "https://api.vk.com/method";
    pub const VK_API_VERSION: &str = "5.199";
    pub const DISK_API_URL: &str = "https://cloud-api.yandex.net/v1/disk/resources";
    pub const DISK_WEB_URL: &str = "https://disk.yandex.ru/client/disk";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;

    pub fn log_level() -> u8 {
        0
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn net_timeout() -> u64 {
        30
    }

    pub fn color() -> ColorIntent {
        ColorIntent::Auto
    }

    pub fn naming() -> NamingStrategy {
        NamingStrategy::Literal
    }

    pub fn folder_name() -> String {
        defaults::FOLDER_NAME.to_string()
    }

    pub fn manifest_name() -> String {
        defaults::MANIFEST_NAME.to_string()
    }

    pub fn vk_api_url() -> String {
        defaults::VK_API_URL.to_string()
    }

    pub fn vk_api_version() -> String {
        defaults::VK_API_VERSION.to_string()
    }

    pub fn disk_api_url() -> String {
        defaults::DISK_API_URL.to_string()
    }

    pub fn disk_web_url() -> String {
        defaults::DISK_WEB_URL.to_string()
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Directory the manifest is written into
    #[arg(short, long, env = "VKBACKUP_WORKDIR")]
    #[serde(default)]
    pub workdir: Option<PathBuf>,

    /// Manifest file name
    #[arg(long, env = "VKBACKUP_MANIFEST", default_value = defaults::MANIFEST_NAME)]
    #[serde(default = "default_fns::manifest_name")]
    pub manifest_name: String,

    /// Destination folder on the disk
    #[arg(long, env = "VKBACKUP_FOLDER", default_value = defaults::FOLDER_NAME)]
    #[serde(default = "default_fns::folder_name")]
    pub folder_name: String,

    /// VK service access token
    #[arg(long, env = "VKBACKUP_VK_TOKEN", hide_env_values = true)]
    #[serde(default)]
    pub vk_token: Option<String>,

    /// VK API base URL
    #[arg(long, env = "VKBACKUP_VK_API_URL", default_value = defaults::VK_API_URL)]
    #[serde(default = "default_fns::vk_api_url")]
    pub vk_api_url: String,

    /// VK API protocol version
    #[arg(long, env = "VKBACKUP_VK_API_VERSION", default_value = defaults::VK_API_VERSION)]
    #[serde(default = "default_fns::vk_api_version")]
    pub vk_api_version: String,

    /// Disk REST resources URL
    #[arg(long, env = "VKBACKUP_DISK_API_URL", default_value = defaults::DISK_API_URL)]
    #[serde(default = "default_fns::disk_api_url")]
    pub disk_api_url: String,

    /// Disk web client URL used for the destination link
    #[arg(long, env = "VKBACKUP_DISK_WEB_URL", default_value = defaults::DISK_WEB_URL)]
    #[serde(default = "default_fns::disk_web_url")]
    pub disk_web_url: String,

    /// API timeout in seconds
    #[arg(short, long, env = "VKBACKUP_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,

    /// Name collision policy (literal, counter)
    #[arg(long, env = "VKBACKUP_NAMING", default_value = defaults::NAMING)]
    #[serde(default = "default_fns::naming")]
    pub naming: NamingStrategy,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "VKBACKUP_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, yaml)
    #[arg(long, env = "VKBACKUP_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "VKBACKUP_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "VKBACKUP_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workdir: None,
            manifest_name: default_fns::manifest_name(),
            folder_name: default_fns::folder_name(),
            vk_token: None,
            vk_api_url: default_fns::vk_api_url(),
            vk_api_version: default_fns::vk_api_version(),
            disk_api_url: default_fns::disk_api_url(),
            disk_web_url: default_fns::disk_web_url(),
            net_timeout: default_fns::net_timeout(),
            naming: default_fns::naming(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig from AppConfig
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            color: self.color.resolve(),
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        // For Option fields, take other if it's Some
        if other.workdir.is_some() {
            self.workdir = other.workdir;
        }
        if other.vk_token.is_some() {
            self.vk_token = other.vk_token;
        }

        // For plain fields, take other if it's not the default
        if other.manifest_name != default_fns::manifest_name() {
            self.manifest_name = other.manifest_name;
        }
        if other.folder_name != default_fns::folder_name() {
            self.folder_name = other.folder_name;
        }
        if other.vk_api_url != default_fns::vk_api_url() {
            self.vk_api_url = other.vk_api_url;
        }
        if other.vk_api_version != default_fns::vk_api_version() {
            self.vk_api_version = other.vk_api_version;
        }
        if other.disk_api_url != default_fns::disk_api_url() {
            self.disk_api_url = other.disk_api_url;
        }
        if other.disk_web_url != default_fns::disk_web_url() {
            self.disk_web_url = other.disk_web_url;
        }
        if other.net_timeout != default_fns::net_timeout() {
            self.net_timeout = other.net_timeout;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        // For enums, detect if it's non-default
        if other.naming != default_fns::naming() {
            self.naming = other.naming;
        }
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.workdir.is_none() {
            self.workdir = Some(
                std::env::current_dir().map_err(|e| ConfigError::CurrentDirError { source: e })?,
            );
        }

        let folder = self.folder_name.trim_matches('/');
        if folder.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "folder name must not be empty".to_string(),
            });
        }
        self.folder_name = folder.to_string();

        if self.manifest_name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "manifest name must not be empty".to_string(),
            });
        }

        if self.net_timeout == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "net timeout must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Where the manifest of a run is written
    pub fn manifest_path(&self) -> PathBuf {
        match &self.workdir {
            Some(dir) => dir.join(&self.manifest_name),
            None => PathBuf::from(&self.manifest_name),
        }
    }

    /// Link to the destination folder in the disk web client
    pub fn destination_link(&self) -> String {
        format!(
            "{}/{}",
            self.disk_web_url.trim_end_matches('/'),
            self.folder_name
        )
    }

    /// Source token, if configured and non-blank
    pub fn source_token(&self) -> Option<&str> {
        self.vk_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
