use super::*;

#[test]
fn test_identifier_accepts_digits() {
    assert_eq!(validate_identifier("1234567").unwrap(), "1234567");
    assert_eq!(validate_identifier(" 42\n").unwrap(), "42");
}

#[test]
fn test_identifier_rejects_non_digits() {
    for bad in ["", "   ", "id123", "-1", "12 34", "durov"] {
        assert!(
            matches!(
                validate_identifier(bad),
                Err(RequestError::InvalidIdentifier { .. })
            ),
            "'{bad}' should be rejected"
        );
    }
}

#[test]
fn test_token_must_be_non_empty() {
    assert_eq!(validate_token("y0_abc").unwrap(), "y0_abc");
    assert_eq!(validate_token("  ").unwrap_err(), RequestError::MissingToken);
}

#[test]
fn test_blank_quantity_defaults_to_five() {
    assert_eq!(parse_quantity("").unwrap(), 5);
    assert_eq!(parse_quantity("  ").unwrap(), DEFAULT_QUANTITY);
}

#[test]
fn test_quantity_parsing() {
    assert_eq!(parse_quantity("0").unwrap(), 0);
    assert_eq!(parse_quantity("12").unwrap(), 12);
    assert!(matches!(
        parse_quantity("five"),
        Err(RequestError::InvalidQuantity { .. })
    ));
    assert!(matches!(
        parse_quantity("-3"),
        Err(RequestError::InvalidQuantity { .. })
    ));
}

#[test]
fn test_request_from_input() {
    let request = BackupRequest::from_input("1", "OAuth token", "").unwrap();
    assert_eq!(request.identifier(), "1");
    assert_eq!(request.disk_token(), "OAuth token");
    assert_eq!(request.quantity(), 5);
}

#[test]
fn test_request_checks_identifier_before_token() {
    let err = BackupRequest::new("abc", "", 5).unwrap_err();
    assert!(matches!(err, RequestError::InvalidIdentifier { .. }));
}

#[test]
fn test_debug_redacts_token() {
    let request = BackupRequest::new("1", "secret-token", 3).unwrap();
    let debug = format!("{:?}", request);
    assert!(!debug.contains("secret-token"));
    assert!(debug.contains("<redacted>"));
}
