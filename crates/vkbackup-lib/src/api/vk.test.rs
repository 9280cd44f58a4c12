// Tests for the VK API client

use super::*;
use crate::networking::NetworkingConfig;
use mockito::{Matcher, Server};

const LISTING: &str = r#"{
  "response": {
    "count": 2,
    "items": [
      {
        "id": 457239017,
        "owner_id": 1,
        "date": 1700000000,
        "sizes": [
          {"height": 75, "width": 56, "type": "s", "url": "https://sun.example/s1.jpg"},
          {"height": 1280, "width": 960, "type": "z", "url": "https://sun.example/z1.jpg"},
          {"height": 604, "width": 453, "type": "x", "url": "https://sun.example/x1.jpg"}
        ],
        "likes": {"count": 15, "user_likes": 0}
      },
      {
        "id": 457239018,
        "owner_id": 1,
        "sizes": [
          {"height": 130, "width": 97, "type": "m", "url": "https://sun.example/m2.jpg"}
        ],
        "likes": {"count": 4, "user_likes": 1}
      }
    ]
  }
}"#;

fn networking() -> Arc<NetworkingManager> {
    Arc::new(NetworkingManager::new(NetworkingConfig::default()).unwrap())
}

// ============================================================================
// Response parsing
// ============================================================================

#[test]
fn test_parse_listing() {
    let photos = parse_photos_response(LISTING.as_bytes()).unwrap();
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0].owner_id(), "1");
    assert_eq!(photos[0].like_count(), 15);
    assert_eq!(photos[0].sizes().len(), 3);
    assert_eq!(photos[1].sizes()[0].code, "m");
}

#[test]
fn test_parse_error_payload_is_rejection() {
    let body = r#"{"error": {"error_code": 30, "error_msg": "This profile is private", "request_params": []}}"#;

    match parse_photos_response(body.as_bytes()) {
        Err(VkError::Rejected { code, message }) => {
            assert_eq!(code, 30);
            assert_eq!(message, "This profile is private");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_album() {
    let body = r#"{"response": {"count": 0, "items": []}}"#;
    assert!(parse_photos_response(body.as_bytes()).unwrap().is_empty());
}

#[test]
fn test_parse_missing_likes_defaults_to_zero() {
    let body = r#"{"response": {"count": 1, "items": [
        {"id": 1, "owner_id": 5, "sizes": [{"type": "s", "url": "https://sun.example/a.jpg"}]}
    ]}}"#;
    let photos = parse_photos_response(body.as_bytes()).unwrap();
    assert_eq!(photos[0].like_count(), 0);
}

#[test]
fn test_parse_neither_shape() {
    assert!(matches!(
        parse_photos_response(b"{}"),
        Err(VkError::MalformedResponse)
    ));
    assert!(matches!(
        parse_photos_response(b"<html>"),
        Err(VkError::JsonError { .. })
    ));
}

// ============================================================================
// Live client against a mock server
// ============================================================================

#[tokio::test]
async fn test_live_client_sends_fixed_parameters() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/method/photos.get")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("access_token".into(), "service-key".into()),
            Matcher::UrlEncoded("v".into(), "5.199".into()),
            Matcher::UrlEncoded("owner_id".into(), "1".into()),
            Matcher::UrlEncoded("album_id".into(), "profile".into()),
            Matcher::UrlEncoded("rev".into(), "0".into()),
            Matcher::UrlEncoded("extended".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LISTING)
        .expect(1)
        .create_async()
        .await;

    let client = LiveVkClient::with_base_url(
        networking(),
        format!("{}/method/", server.url()),
        "service-key".to_string(),
        DEFAULT_API_VERSION.to_string(),
    );

    let photos = client.fetch_profile_photos("1").await.unwrap();
    assert_eq!(photos.len(), 2);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_live_client_surfaces_rejection() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/method/photos.get")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"error": {"error_code": 5, "error_msg": "User authorization failed"}}"#)
        .create_async()
        .await;

    let client = LiveVkClient::with_base_url(
        networking(),
        format!("{}/method", server.url()),
        "bad-key".to_string(),
        DEFAULT_API_VERSION.to_string(),
    );

    let result = client.fetch_profile_photos("1").await;
    assert!(matches!(result, Err(VkError::Rejected { code: 5, .. })));
}

#[tokio::test]
async fn test_live_client_http_failure_is_transport_error() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/method/photos.get")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = LiveVkClient::with_base_url(
        networking(),
        format!("{}/method", server.url()),
        "key".to_string(),
        DEFAULT_API_VERSION.to_string(),
    );

    let result = client.fetch_profile_photos("1").await;
    assert!(matches!(result, Err(VkError::Transport { .. })));
}

// ============================================================================
// Mock client
// ============================================================================

#[tokio::test]
async fn test_mock_client_records_requests() {
    let mock = MockVkClient::new()
        .with_photos("7", vec![PhotoRecord::new("7", vec![], 1)])
        .await
        .with_rejection("8", 15, "Access denied")
        .await;

    assert_eq!(mock.fetch_profile_photos("7").await.unwrap().len(), 1);
    assert!(matches!(
        mock.fetch_profile_photos("8").await,
        Err(VkError::Rejected { code: 15, .. })
    ));
    assert_eq!(mock.requests().await, vec!["7", "8"]);
}
