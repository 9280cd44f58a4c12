use super::*;

#[test]
fn test_default_config() {
    let config = NetworkingConfig::default();
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.user_agent.starts_with("vkbackup/"));
}

#[test]
fn test_manager_builds_client() {
    let manager = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    assert_eq!(manager.config().timeout_seconds, 30);
}

#[test]
fn test_zero_timeout_rejected() {
    let config = NetworkingConfig {
        timeout_seconds: 0,
        ..NetworkingConfig::default()
    };

    let result = NetworkingManager::new(config);
    assert!(matches!(
        result,
        Err(NetworkingError::InvalidTimeout { seconds: 0 })
    ));
}
