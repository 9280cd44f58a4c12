// Tests for the Yandex Disk client

use super::*;
use crate::networking::NetworkingConfig;
use mockito::{Matcher, Server};
use reqwest::StatusCode;

const EXISTS_BODY: &str = r#"{
  "message": "По указанному пути \"vkphotos_backup\" уже существует папка с таким именем.",
  "description": "Specified path \"vkphotos_backup\" points to existent directory.",
  "error": "DiskPathPointsToExistentDirectoryError"
}"#;

fn networking() -> Arc<NetworkingManager> {
    Arc::new(NetworkingManager::new(NetworkingConfig::default()).unwrap())
}

fn client_for(server: &Server) -> LiveDiskClient {
    LiveDiskClient::with_base_url(
        networking(),
        format!("{}/v1/disk/resources", server.url()),
        "OAuth test-token".to_string(),
    )
}

// ============================================================================
// Response classification
// ============================================================================

#[test]
fn test_success_status_is_created() {
    let body = r#"{"href": "https://cloud-api.yandex.net/v1/disk/resources?path=disk%3A%2Fvkphotos_backup", "method": "GET", "templated": false}"#;
    assert_eq!(folder_status(StatusCode::CREATED, body), FolderStatus::Created);
}

#[test]
fn test_existing_directory_by_error_code() {
    assert_eq!(
        folder_status(StatusCode::CONFLICT, EXISTS_BODY),
        FolderStatus::AlreadyExists
    );
}

#[test]
fn test_existing_directory_by_message_phrase() {
    let body = r#"{"message": "Resource already exists", "error": "SomethingElse"}"#;
    assert_eq!(
        folder_status(StatusCode::CONFLICT, body),
        FolderStatus::AlreadyExists
    );
}

#[test]
fn test_other_error_is_failed_with_message() {
    let body = r#"{"message": "Не авторизован.", "description": "Unauthorized", "error": "UnauthorizedError"}"#;
    assert_eq!(
        folder_status(StatusCode::UNAUTHORIZED, body),
        FolderStatus::Failed("Не авторизован.".to_string())
    );
}

#[test]
fn test_unparseable_error_falls_back_to_status() {
    match folder_status(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") {
        FolderStatus::Failed(message) => assert!(message.contains("502")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_folder_status_usability() {
    assert!(FolderStatus::Created.is_usable());
    assert!(FolderStatus::AlreadyExists.is_usable());
    assert!(!FolderStatus::Failed("nope".to_string()).is_usable());
}

#[test]
fn test_upload_path_format() {
    assert_eq!(
        upload_path("vkphotos_backup", "10.jpg"),
        "disk:/vkphotos_backup/10.jpg"
    );
}

// ============================================================================
// Live client against a mock server
// ============================================================================

#[tokio::test]
async fn test_ensure_folder_created() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("PUT", "/v1/disk/resources")
        .match_query(Matcher::UrlEncoded("path".into(), "vkphotos_backup".into()))
        .match_header("authorization", "OAuth test-token")
        .with_status(201)
        .with_body(r#"{"href": "x", "method": "GET", "templated": false}"#)
        .expect(1)
        .create_async()
        .await;

    let status = client_for(&server)
        .ensure_folder("vkphotos_backup")
        .await
        .unwrap();
    assert_eq!(status, FolderStatus::Created);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_ensure_folder_is_idempotent() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("PUT", "/v1/disk/resources")
        .match_query(Matcher::Any)
        .with_status(409)
        .with_body(EXISTS_BODY)
        .create_async()
        .await;

    let status = client_for(&server)
        .ensure_folder("vkphotos_backup")
        .await
        .unwrap();
    assert_eq!(status, FolderStatus::AlreadyExists);
    assert!(status.is_usable());
}

#[tokio::test]
async fn test_upload_by_url_sends_path_and_source() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/v1/disk/resources/upload")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("path".into(), "disk:/vkphotos_backup/10.jpg".into()),
            Matcher::UrlEncoded("url".into(), "https://sun.example/z1.jpg?size=1280x960".into()),
        ]))
        .match_header("authorization", "OAuth test-token")
        .with_status(202)
        .with_body(r#"{"href": "https://cloud-api.yandex.net/v1/disk/operations/abc", "method": "GET"}"#)
        .expect(1)
        .create_async()
        .await;

    client_for(&server)
        .upload_by_url(
            "vkphotos_backup",
            "10.jpg",
            "https://sun.example/z1.jpg?size=1280x960",
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_error_payload_is_upload_failed() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/v1/disk/resources/upload")
        .match_query(Matcher::Any)
        .with_status(507)
        .with_body(r#"{"message": "Недостаточно свободного места.", "error": "DiskNotEnoughSpaceError"}"#)
        .create_async()
        .await;

    let result = client_for(&server)
        .upload_by_url("vkphotos_backup", "10.jpg", "https://sun.example/z1.jpg")
        .await;

    match result {
        Err(DiskError::UploadFailed { url, message }) => {
            assert_eq!(url, "https://sun.example/z1.jpg");
            assert_eq!(message, "Недостаточно свободного места.");
        }
        other => panic!("expected upload failure, got {:?}", other),
    }
}

// ============================================================================
// Mock client
// ============================================================================

#[tokio::test]
async fn test_mock_records_uploads_and_failures() {
    let mock = MockDiskClient::new()
        .with_folder_status(FolderStatus::AlreadyExists)
        .await
        .with_upload_failure("https://sun.example/bad.jpg", "boom")
        .await;

    assert_eq!(
        mock.ensure_folder("f").await.unwrap(),
        FolderStatus::AlreadyExists
    );
    assert!(mock.upload_by_url("f", "1.jpg", "https://sun.example/ok.jpg").await.is_ok());
    assert!(mock.upload_by_url("f", "2.jpg", "https://sun.example/bad.jpg").await.is_err());

    let uploads = mock.uploads().await;
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[1].file_name, "2.jpg");
    assert_eq!(mock.folder_requests().await, vec!["f"]);
}
