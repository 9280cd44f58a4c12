use super::*;
use std::io::Cursor;

#[test]
fn test_request_from_three_lines() {
    let request = request_from_reader(Cursor::new("12345\nOAuth y0_token\n3\n")).unwrap();
    assert_eq!(request.identifier(), "12345");
    assert_eq!(request.disk_token(), "OAuth y0_token");
    assert_eq!(request.quantity(), 3);
}

#[test]
fn test_blank_quantity_line_defaults() {
    let request = request_from_reader(Cursor::new("1\ntoken\n\n")).unwrap();
    assert_eq!(request.quantity(), 5);

    // A missing third line is treated as blank too
    let request = request_from_reader(Cursor::new("1\ntoken\n")).unwrap();
    assert_eq!(request.quantity(), 5);
}

#[test]
fn test_invalid_identifier_is_request_error() {
    let error = request_from_reader(Cursor::new("durov\ntoken\n5\n")).unwrap_err();
    assert!(matches!(
        error.downcast_ref::<RequestError>(),
        Some(RequestError::InvalidIdentifier { .. })
    ));
}

#[test]
fn test_empty_token_is_request_error() {
    let error = request_from_reader(Cursor::new("1\n\n5\n")).unwrap_err();
    assert_eq!(
        error.downcast_ref::<RequestError>(),
        Some(&RequestError::MissingToken)
    );
}

#[tokio::test]
async fn test_missing_source_token_aborts_without_network() {
    let config = AppConfig {
        vk_api_url: "http://127.0.0.1:9".to_string(),
        disk_api_url: "http://127.0.0.1:9".to_string(),
        ..AppConfig::default()
    };
    let request = BackupRequest::new("1", "token", 5).unwrap();

    let state = run_backup(&config, &request, &Display::new(false))
        .await
        .unwrap();
    assert_eq!(state, TerminalState::AbortedNoCredentials);
}
