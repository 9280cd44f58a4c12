use vkbackup_lib::application::config::AppConfig;
use vkbackup_lib::primitives::{ColorIntent, ConfigError, NamingStrategy};

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert_eq!(config.net_timeout, 30);
    assert_eq!(config.folder_name, "vkphotos_backup");
    assert_eq!(config.manifest_name, "photos_info.json");
    assert_eq!(config.naming, NamingStrategy::Literal);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        folder_name: "archive".to_string(),
        naming: NamingStrategy::Counter,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.folder_name, "archive");
    assert_eq!(merged.naming, NamingStrategy::Counter);
    assert_eq!(merged.color, ColorIntent::Never);

    // Default values should remain for non-overridden fields
    assert_eq!(merged.net_timeout, 30);
    assert_eq!(merged.manifest_name, "photos_info.json");
}

#[test]
fn test_validated_config_paths() {
    let mut config = AppConfig {
        workdir: Some("/tmp/backups".into()),
        folder_name: "/nested/".to_string(),
        disk_web_url: "https://disk.example/client/disk/".to_string(),
        ..AppConfig::default()
    };
    config.validate().unwrap();

    assert_eq!(config.folder_name, "nested");
    assert_eq!(
        config.manifest_path(),
        std::path::PathBuf::from("/tmp/backups/photos_info.json")
    );
    assert_eq!(
        config.destination_link(),
        "https://disk.example/client/disk/nested"
    );
}

#[test]
fn test_invalid_timeout_rejected() {
    let mut config = AppConfig {
        workdir: Some("/tmp".into()),
        net_timeout: 0,
        ..AppConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}
