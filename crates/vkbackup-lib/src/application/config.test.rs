use super::*;

#[test]
fn test_defaults_match_constants() {
    let config = AppConfig::default();
    assert_eq!(config.folder_name, "vkphotos_backup");
    assert_eq!(config.manifest_name, "photos_info.json");
    assert_eq!(config.vk_api_version, "5.199");
    assert_eq!(config.net_timeout, 30);
    assert_eq!(config.naming, NamingStrategy::Literal);
    assert!(config.vk_token.is_none());
}

#[test]
fn test_cli_defaults_agree_with_default_impl() {
    let parsed = AppConfig::try_parse_from(["vkbackup"]).unwrap();
    let defaults = AppConfig::default();

    assert_eq!(parsed.folder_name, defaults.folder_name);
    assert_eq!(parsed.manifest_name, defaults.manifest_name);
    assert_eq!(parsed.disk_api_url, defaults.disk_api_url);
    assert_eq!(parsed.net_timeout, defaults.net_timeout);
    assert_eq!(parsed.naming, defaults.naming);
    assert_eq!(parsed.color, defaults.color);
}

#[test]
fn test_cli_parses_naming_flag() {
    let parsed = AppConfig::try_parse_from(["vkbackup", "--naming", "counter"]).unwrap();
    assert_eq!(parsed.naming, NamingStrategy::Counter);
}

#[test]
fn test_merge_takes_non_default_values() {
    let base = AppConfig {
        vk_token: Some("from-env".to_string()),
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        folder_name: "archive".to_string(),
        naming: NamingStrategy::Counter,
        log_level: 3,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.folder_name, "archive");
    assert_eq!(merged.naming, NamingStrategy::Counter);
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.vk_token.as_deref(), Some("from-env"));
    assert_eq!(merged.manifest_name, "photos_info.json");
}

#[test]
fn test_validate_fills_workdir_and_trims_folder() {
    let mut config = AppConfig {
        folder_name: "/vkphotos_backup/".to_string(),
        ..AppConfig::default()
    };
    config.validate().unwrap();

    assert!(config.workdir.is_some());
    assert_eq!(config.folder_name, "vkphotos_backup");
}

#[test]
fn test_validate_rejects_empty_folder() {
    let mut config = AppConfig {
        folder_name: "/".to_string(),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_manifest_path_and_link() {
    let config = AppConfig {
        workdir: Some(PathBuf::from("/tmp/run")),
        disk_web_url: "https://disk.example/client/disk/".to_string(),
        ..AppConfig::default()
    };

    assert_eq!(
        config.manifest_path(),
        PathBuf::from("/tmp/run/photos_info.json")
    );
    assert_eq!(
        config.destination_link(),
        "https://disk.example/client/disk/vkphotos_backup"
    );
}

#[test]
fn test_blank_source_token_counts_as_missing() {
    let config = AppConfig {
        vk_token: Some("   ".to_string()),
        ..AppConfig::default()
    };
    assert!(config.source_token().is_none());

    let config = AppConfig {
        vk_token: Some("service-key".to_string()),
        ..AppConfig::default()
    };
    assert_eq!(config.source_token(), Some("service-key"));
}
