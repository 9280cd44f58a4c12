use super::*;

#[test]
fn test_filter_directives_scope_crate_level() {
    let directives = filter_directives(LogLevel::Debug);
    assert!(directives.starts_with("vkbackup=debug,vkbackup_lib=debug"));
    assert!(directives.contains("reqwest=warn"));
}

#[test]
fn test_filter_directives_parse() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        assert!(EnvFilter::try_new(filter_directives(level)).is_ok());
    }
}

#[test]
fn test_logger_global_matches_initialized_flag() {
    assert_eq!(Logger::is_initialized(), Logger::global().is_some());
}
