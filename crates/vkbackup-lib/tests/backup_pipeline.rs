//! End-to-end runs of the live clients against a local mock server

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use tempfile::TempDir;
use vkbackup_lib::application::{AppConfig, run_backup};
use vkbackup_lib::backup::{BackupRequest, TerminalState, UploadRecord, read_manifest};
use vkbackup_lib::display::Display;

fn config_for(server: &ServerGuard, workdir: &TempDir) -> AppConfig {
    AppConfig {
        workdir: Some(workdir.path().to_path_buf()),
        vk_token: Some("service-key".to_string()),
        vk_api_url: format!("{}/method", server.url()),
        disk_api_url: format!("{}/v1/disk/resources", server.url()),
        ..AppConfig::default()
    }
}

fn photo(likes: u64, sizes: &[(&str, &str)]) -> serde_json::Value {
    let sizes: Vec<_> = sizes
        .iter()
        .map(|(code, url)| json!({ "type": code, "url": url, "width": 0, "height": 0 }))
        .collect();
    json!({
        "id": likes + 100,
        "owner_id": 1,
        "sizes": sizes,
        "likes": { "count": likes, "user_likes": 0 }
    })
}

fn listing(items: Vec<serde_json::Value>) -> String {
    json!({ "response": { "count": items.len(), "items": items } }).to_string()
}

#[tokio::test]
async fn test_backup_uploads_and_writes_manifest() {
    let mut server = Server::new_async().await;
    let workdir = TempDir::new().unwrap();

    let listing_mock = server
        .mock("GET", "/method/photos.get")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("owner_id".into(), "1".into()),
            Matcher::UrlEncoded("album_id".into(), "profile".into()),
        ]))
        .with_status(200)
        .with_body(listing(vec![
            photo(
                10,
                &[("s", "https://sun.example/a_s.jpg"), ("z", "https://sun.example/a_z.jpg")],
            ),
            photo(
                3,
                &[("m", "https://sun.example/b_m.jpg"), ("x", "https://sun.example/b_x.jpg")],
            ),
        ]))
        .create_async()
        .await;

    let folder_mock = server
        .mock("PUT", "/v1/disk/resources")
        .match_query(Matcher::UrlEncoded("path".into(), "vkphotos_backup".into()))
        .match_header("authorization", "OAuth disk-token")
        .with_status(201)
        .with_body(r#"{"href":"https://cloud-api.example/v1/disk/resources?path=disk%3A%2Fvkphotos_backup"}"#)
        .create_async()
        .await;

    let upload_mock = server
        .mock("POST", "/v1/disk/resources/upload")
        .match_query(Matcher::Any)
        .with_status(202)
        .with_body(r#"{"href":"https://cloud-api.example/operations/1"}"#)
        .expect(2)
        .create_async()
        .await;

    let config = config_for(&server, &workdir);
    let request = BackupRequest::new("1", "OAuth disk-token", 5).unwrap();

    let state = run_backup(&config, &request, &Display::new(false))
        .await
        .unwrap();
    assert_eq!(state, TerminalState::Completed);

    listing_mock.assert_async().await;
    folder_mock.assert_async().await;
    upload_mock.assert_async().await;

    let records = read_manifest(&workdir.path().join("photos_info.json")).unwrap();
    assert_eq!(
        records,
        vec![UploadRecord::new("10", "z"), UploadRecord::new("3", "x")]
    );
}

#[tokio::test]
async fn test_failed_upload_is_left_out_of_manifest() {
    let mut server = Server::new_async().await;
    let workdir = TempDir::new().unwrap();

    server
        .mock("GET", "/method/photos.get")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(listing(vec![
            photo(7, &[("y", "https://sun.example/ok.jpg")]),
            photo(8, &[("w", "https://sun.example/broken.jpg")]),
        ]))
        .create_async()
        .await;

    // Folder left over from an earlier run
    server
        .mock("PUT", "/v1/disk/resources")
        .match_query(Matcher::Any)
        .with_status(409)
        .with_body(
            r#"{"error":"DiskPathPointsToExistentDirectoryError","message":"По указанному пути \"vkphotos_backup\" уже существует папка с таким именем."}"#,
        )
        .create_async()
        .await;

    server
        .mock("POST", "/v1/disk/resources/upload")
        .match_query(Matcher::UrlEncoded(
            "url".into(),
            "https://sun.example/ok.jpg".into(),
        ))
        .with_status(202)
        .with_body("{}")
        .create_async()
        .await;

    server
        .mock("POST", "/v1/disk/resources/upload")
        .match_query(Matcher::UrlEncoded(
            "url".into(),
            "https://sun.example/broken.jpg".into(),
        ))
        .with_status(400)
        .with_body(r#"{"error":"BadRequest","message":"Source is unreachable"}"#)
        .create_async()
        .await;

    let config = config_for(&server, &workdir);
    let request = BackupRequest::new("1", "OAuth disk-token", 5).unwrap();

    let state = run_backup(&config, &request, &Display::new(false))
        .await
        .unwrap();
    assert_eq!(state, TerminalState::Completed);

    let records = read_manifest(&workdir.path().join("photos_info.json")).unwrap();
    assert_eq!(records, vec![UploadRecord::new("7", "y")]);
}

#[tokio::test]
async fn test_empty_album_writes_no_manifest() {
    let mut server = Server::new_async().await;
    let workdir = TempDir::new().unwrap();

    server
        .mock("GET", "/method/photos.get")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(listing(Vec::new()))
        .create_async()
        .await;

    server
        .mock("PUT", "/v1/disk/resources")
        .match_query(Matcher::Any)
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let upload_mock = server
        .mock("POST", "/v1/disk/resources/upload")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = config_for(&server, &workdir);
    let request = BackupRequest::new("1", "OAuth disk-token", 5).unwrap();

    let state = run_backup(&config, &request, &Display::new(false))
        .await
        .unwrap();
    assert_eq!(state, TerminalState::NothingToUpload);

    upload_mock.assert_async().await;
    assert!(!workdir.path().join("photos_info.json").exists());
}

#[tokio::test]
async fn test_unrecognized_sizes_upload_nothing() {
    let mut server = Server::new_async().await;
    let workdir = TempDir::new().unwrap();

    server
        .mock("GET", "/method/photos.get")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(listing(vec![photo(4, &[("k", "https://sun.example/k.jpg")])]))
        .create_async()
        .await;

    server
        .mock("PUT", "/v1/disk/resources")
        .match_query(Matcher::Any)
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let upload_mock = server
        .mock("POST", "/v1/disk/resources/upload")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = config_for(&server, &workdir);
    let request = BackupRequest::new("1", "OAuth disk-token", 5).unwrap();

    let state = run_backup(&config, &request, &Display::new(false))
        .await
        .unwrap();
    assert_eq!(state, TerminalState::NothingToUpload);

    upload_mock.assert_async().await;
    assert!(!workdir.path().join("photos_info.json").exists());
}

#[tokio::test]
async fn test_rejected_listing_aborts_run() {
    let mut server = Server::new_async().await;
    let workdir = TempDir::new().unwrap();

    server
        .mock("GET", "/method/photos.get")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"error":{"error_code":30,"error_msg":"This profile is private"}}"#)
        .create_async()
        .await;

    server
        .mock("PUT", "/v1/disk/resources")
        .match_query(Matcher::Any)
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let config = config_for(&server, &workdir);
    let request = BackupRequest::new("1", "OAuth disk-token", 5).unwrap();

    let state = run_backup(&config, &request, &Display::new(false))
        .await
        .unwrap();
    assert_eq!(state, TerminalState::AbortedSourceRejected);
    assert!(!workdir.path().join("photos_info.json").exists());
}

#[tokio::test]
async fn test_unauthorized_disk_aborts_before_listing() {
    let mut server = Server::new_async().await;
    let workdir = TempDir::new().unwrap();

    let listing_mock = server
        .mock("GET", "/method/photos.get")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    server
        .mock("PUT", "/v1/disk/resources")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error":"UnauthorizedError","message":"Не авторизован."}"#)
        .create_async()
        .await;

    let config = config_for(&server, &workdir);
    let request = BackupRequest::new("1", "bad-token", 5).unwrap();

    let state = run_backup(&config, &request, &Display::new(false))
        .await
        .unwrap();
    assert_eq!(state, TerminalState::AbortedFolderCreateFailed);
    listing_mock.assert_async().await;
}
