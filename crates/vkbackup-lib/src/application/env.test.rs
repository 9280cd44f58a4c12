use super::*;

fn env(no_color: Option<&str>, force_color: Option<&str>, clicolor: Option<&str>) -> EnvironmentConfig {
    EnvironmentConfig {
        no_color: no_color.map(String::from),
        force_color: force_color.map(String::from),
        clicolor: clicolor.map(String::from),
        ci: None,
    }
}

#[test]
fn test_no_variables_keep_intent() {
    let config = EnvironmentConfig::default();
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
    assert_eq!(config.apply_color_config(ColorIntent::Always), ColorIntent::Always);
}

#[test]
fn test_no_color_disables() {
    let config = env(Some("1"), None, None);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let config = env(Some(""), None, None);
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_force_color_wins_over_others() {
    let config = env(Some("1"), Some("1"), Some("0"));
    assert_eq!(config.apply_color_config(ColorIntent::Auto), ColorIntent::Always);

    let config = env(None, Some("false"), None);
    assert_eq!(config.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_ci_disables_color() {
    let config = EnvironmentConfig {
        ci: Some("true".to_string()),
        force_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    assert!(config.is_ci());
    assert_eq!(config.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}
