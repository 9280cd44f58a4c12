use super::*;
use crate::primitives::{ColorIntent, LogFormat};

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn test_cli_global_flags() {
    let cli = Cli::try_parse_from([
        "vkbackup",
        "--folder-name",
        "archive",
        "--log-format",
        "json",
        "--color",
        "never",
        "--net-timeout",
        "5",
    ])
    .unwrap();

    assert_eq!(cli.config.folder_name, "archive");
    assert_eq!(cli.config.log_format, LogFormat::Json);
    assert_eq!(cli.config.color, ColorIntent::Never);
    assert_eq!(cli.config.net_timeout, 5);
}

#[test]
fn test_cli_has_no_run_value_flags() {
    // The run values are prompted, never passed as flags
    assert!(Cli::try_parse_from(["vkbackup", "--quantity", "3"]).is_err());
    assert!(Cli::try_parse_from(["vkbackup", "--identifier", "1"]).is_err());
}
