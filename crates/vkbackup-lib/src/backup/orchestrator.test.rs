// Tests for the backup orchestrator, driven through the mock clients

use super::*;
use crate::api::disk::MockDiskClient;
use crate::api::vk::MockVkClient;
use crate::backup::manifest::read_manifest;
use crate::backup::selection::PhotoRecord;
use crate::backup::sizes::{SelectionError, SizeVariant};
use crate::display::BarTracker;
use chrono::{FixedOffset, TimeZone};
use tempfile::TempDir;

const OWNER: &str = "1";
const FOLDER: &str = "vkphotos_backup";

fn photo(id: u32, likes: u64) -> PhotoRecord {
    PhotoRecord::new(
        OWNER,
        vec![
            SizeVariant::new(format!("https://sun.example/{id}/s.jpg"), "s"),
            SizeVariant::new(format!("https://sun.example/{id}/z.jpg"), "z"),
            SizeVariant::new(format!("https://sun.example/{id}/x.jpg"), "x"),
        ],
        likes,
    )
}

fn timestamp() -> RunTimestamp {
    let offset = FixedOffset::east_opt(0).unwrap();
    RunTimestamp::from_datetime(&offset.with_ymd_and_hms(2024, 11, 2, 14, 30, 5).unwrap())
}

fn settings(temp_dir: &TempDir, naming: NamingStrategy) -> BackupSettings {
    BackupSettings {
        folder_name: FOLDER.to_string(),
        manifest_path: temp_dir.path().join("photos_info.json"),
        naming,
    }
}

fn request(quantity: usize) -> BackupRequest {
    BackupRequest::new(OWNER, "OAuth token", quantity).unwrap()
}

async fn source_with(photos: Vec<PhotoRecord>) -> MockVkClient {
    MockVkClient::new().with_photos(OWNER, photos).await
}

#[tokio::test]
async fn test_successful_run_writes_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let orchestrator = BackupOrchestrator::new(
        source_with(vec![photo(1, 10), photo(2, 3)]).await,
        MockDiskClient::new(),
        settings(&temp_dir, NamingStrategy::Literal),
    );

    let progress = BarTracker::hidden(2);
    let outcome = orchestrator
        .run_at(&request(5), timestamp(), &progress)
        .await
        .unwrap();

    let report = match outcome {
        RunOutcome::Completed(report) => report,
        other => panic!("expected completion, got {:?}", other),
    };

    assert_eq!(
        report.records,
        vec![UploadRecord::new("10", "z"), UploadRecord::new("3", "z")]
    );
    assert!(report.failures.is_empty());
    assert_eq!(report.folder_status, FolderStatus::Created);
    assert_eq!(read_manifest(&report.manifest_path).unwrap(), report.records);
    assert_eq!(progress.position(), 2);

    let uploads = orchestrator.target().uploads().await;
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0].folder_name, FOLDER);
    assert_eq!(uploads[0].file_name, "10.jpg");
    assert_eq!(uploads[0].source_url, "https://sun.example/1/z.jpg");
    assert_eq!(uploads[1].file_name, "3.jpg");
}

#[tokio::test]
async fn test_quantity_truncates_in_source_order() {
    let temp_dir = TempDir::new().unwrap();
    let photos = (0..6).map(|id| photo(id, u64::from(id) * 2)).collect();
    let orchestrator = BackupOrchestrator::new(
        source_with(photos).await,
        MockDiskClient::new(),
        settings(&temp_dir, NamingStrategy::Literal),
    );

    orchestrator
        .run_at(&request(3), timestamp(), &BarTracker::hidden(3))
        .await
        .unwrap();

    let names: Vec<String> = orchestrator
        .target()
        .uploads()
        .await
        .into_iter()
        .map(|upload| upload.file_name)
        .collect();
    assert_eq!(names, vec!["0.jpg", "2.jpg", "4.jpg"]);
}

#[tokio::test]
async fn test_duplicate_like_counts_are_disambiguated() {
    let temp_dir = TempDir::new().unwrap();
    let orchestrator = BackupOrchestrator::new(
        source_with(vec![photo(1, 10), photo(2, 10), photo(3, 10)]).await,
        MockDiskClient::new(),
        settings(&temp_dir, NamingStrategy::Literal),
    );

    let outcome = orchestrator
        .run_at(&request(5), timestamp(), &BarTracker::hidden(3))
        .await
        .unwrap();

    let RunOutcome::Completed(report) = outcome else {
        panic!("expected completion");
    };
    let names: Vec<&str> = report.records.iter().map(|r| r.file_name.as_str()).collect();

    // The third photo repeats the second name under the literal strategy
    assert_eq!(
        names,
        vec!["10", "10_2024-11-02_14_30_5", "10_2024-11-02_14_30_5"]
    );
}

#[tokio::test]
async fn test_counter_naming_keeps_every_name_unique() {
    let temp_dir = TempDir::new().unwrap();
    let orchestrator = BackupOrchestrator::new(
        source_with(vec![photo(1, 10), photo(2, 10), photo(3, 10)]).await,
        MockDiskClient::new(),
        settings(&temp_dir, NamingStrategy::Counter),
    );

    orchestrator
        .run_at(&request(5), timestamp(), &BarTracker::hidden(3))
        .await
        .unwrap();

    let names: Vec<String> = orchestrator
        .target()
        .uploads()
        .await
        .into_iter()
        .map(|upload| upload.file_name)
        .collect();
    assert_eq!(names, vec!["10.jpg", "10_1.jpg", "10_2.jpg"]);
}

#[tokio::test]
async fn test_failed_upload_is_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let orchestrator = BackupOrchestrator::new(
        source_with(vec![photo(1, 1), photo(2, 2), photo(3, 3)]).await,
        MockDiskClient::new()
            .with_upload_failure("https://sun.example/2/z.jpg", "DiskNotEnoughSpaceError")
            .await,
        settings(&temp_dir, NamingStrategy::Literal),
    );

    let progress = BarTracker::hidden(3);
    let outcome = orchestrator
        .run_at(&request(5), timestamp(), &progress)
        .await
        .unwrap();
    let RunOutcome::Completed(report) = outcome else {
        panic!("expected completion");
    };

    assert_eq!(
        report.records,
        vec![UploadRecord::new("1", "z"), UploadRecord::new("3", "z")]
    );
    assert_eq!(
        report.failures,
        vec![UploadFailure {
            file_name: "2.jpg".to_string(),
            source_url: "https://sun.example/2/z.jpg".to_string(),
            message: "DiskNotEnoughSpaceError".to_string(),
        }]
    );
    assert_eq!(read_manifest(&report.manifest_path).unwrap().len(), 2);
    assert_eq!(orchestrator.target().uploads().await.len(), 3);
    assert_eq!(progress.position(), 3);
    assert!(report.summary().is_partial_success());
}

#[tokio::test]
async fn test_empty_album_uploads_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings(&temp_dir, NamingStrategy::Literal);
    let manifest_path = settings.manifest_path.clone();
    let orchestrator =
        BackupOrchestrator::new(source_with(vec![]).await, MockDiskClient::new(), settings);

    let outcome = orchestrator
        .run_at(&request(5), timestamp(), &BarTracker::hidden(0))
        .await
        .unwrap();

    assert!(matches!(outcome, RunOutcome::NothingToUpload { .. }));
    assert_eq!(outcome.terminal_state(), TerminalState::NothingToUpload);
    assert!(orchestrator.target().uploads().await.is_empty());
    assert!(!manifest_path.exists());
}

#[tokio::test]
async fn test_zero_quantity_uploads_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let orchestrator = BackupOrchestrator::new(
        source_with(vec![photo(1, 1)]).await,
        MockDiskClient::new(),
        settings(&temp_dir, NamingStrategy::Literal),
    );

    let outcome = orchestrator
        .run_at(&request(0), timestamp(), &BarTracker::hidden(0))
        .await
        .unwrap();
    assert!(matches!(outcome, RunOutcome::NothingToUpload { .. }));
}

#[tokio::test]
async fn test_existing_folder_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let orchestrator = BackupOrchestrator::new(
        source_with(vec![photo(1, 7)]).await,
        MockDiskClient::new()
            .with_folder_status(FolderStatus::AlreadyExists)
            .await,
        settings(&temp_dir, NamingStrategy::Literal),
    );

    let outcome = orchestrator
        .run_at(&request(5), timestamp(), &BarTracker::hidden(1))
        .await
        .unwrap();

    let RunOutcome::Completed(report) = outcome else {
        panic!("expected completion");
    };
    assert_eq!(report.folder_status, FolderStatus::AlreadyExists);
    assert_eq!(report.records.len(), 1);
}

#[tokio::test]
async fn test_folder_failure_aborts_before_listing() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings(&temp_dir, NamingStrategy::Literal);
    let manifest_path = settings.manifest_path.clone();
    let orchestrator = BackupOrchestrator::new(
        source_with(vec![photo(1, 7)]).await,
        MockDiskClient::new()
            .with_folder_status(FolderStatus::Failed("Не авторизован.".to_string()))
            .await,
        settings,
    );

    let error = orchestrator
        .run_at(&request(5), timestamp(), &BarTracker::hidden(1))
        .await
        .unwrap_err();

    match &error {
        BackupError::FolderCreateFailed { folder, message } => {
            assert_eq!(folder, FOLDER);
            assert_eq!(message, "Не авторизован.");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(error.terminal_state(), TerminalState::AbortedFolderCreateFailed);
    assert!(orchestrator.source().requests().await.is_empty());
    assert!(orchestrator.target().uploads().await.is_empty());
    assert!(!manifest_path.exists());
}

#[tokio::test]
async fn test_source_rejection_aborts_without_uploads() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings(&temp_dir, NamingStrategy::Literal);
    let manifest_path = settings.manifest_path.clone();
    let orchestrator = BackupOrchestrator::new(
        MockVkClient::new()
            .with_rejection(OWNER, 30, "This profile is private")
            .await,
        MockDiskClient::new(),
        settings,
    );

    let error = orchestrator
        .run_at(&request(5), timestamp(), &BarTracker::hidden(0))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        BackupError::SourceRejected { code: 30, ref message } if message == "This profile is private"
    ));
    assert_eq!(error.terminal_state(), TerminalState::AbortedSourceRejected);
    assert!(orchestrator.target().uploads().await.is_empty());
    assert!(!manifest_path.exists());
}

#[tokio::test]
async fn test_unknown_size_code_skips_photo() {
    let temp_dir = TempDir::new().unwrap();
    let odd = PhotoRecord::new(
        OWNER,
        vec![SizeVariant::new("https://sun.example/odd/base.jpg", "base")],
        5,
    );
    let orchestrator = BackupOrchestrator::new(
        source_with(vec![photo(1, 1), odd, photo(3, 3)]).await,
        MockDiskClient::new(),
        settings(&temp_dir, NamingStrategy::Literal),
    );

    let outcome = orchestrator
        .run_at(&request(5), timestamp(), &BarTracker::hidden(2))
        .await
        .unwrap();
    let RunOutcome::Completed(report) = outcome else {
        panic!("expected completion");
    };

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 1);
    assert_eq!(report.summary(), OperationSummary::new(2, 1));
}

#[tokio::test]
async fn test_all_photos_skipped_reports_skips() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings(&temp_dir, NamingStrategy::Literal);
    let manifest_path = settings.manifest_path.clone();
    let odd = PhotoRecord::new(
        OWNER,
        vec![SizeVariant::new("https://sun.example/odd/k.jpg", "k")],
        4,
    );
    let orchestrator =
        BackupOrchestrator::new(source_with(vec![odd]).await, MockDiskClient::new(), settings);

    let outcome = orchestrator
        .run_at(&request(5), timestamp(), &BarTracker::hidden(5))
        .await
        .unwrap();

    let RunOutcome::NothingToUpload { skipped } = outcome else {
        panic!("expected nothing to upload");
    };
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].index, 0);
    assert_eq!(
        skipped[0].error,
        SelectionError::UnknownSizeCode {
            code: "k".to_string(),
            url: "https://sun.example/odd/k.jpg".to_string(),
        }
    );
    assert!(orchestrator.target().uploads().await.is_empty());
    assert!(!manifest_path.exists());
}

#[tokio::test]
async fn test_progress_sized_to_selection() {
    let temp_dir = TempDir::new().unwrap();
    let orchestrator = BackupOrchestrator::new(
        source_with(vec![photo(1, 1), photo(2, 2)]).await,
        MockDiskClient::new(),
        settings(&temp_dir, NamingStrategy::Literal),
    );

    // Sized from the requested quantity, as the command layer does
    let progress = BarTracker::hidden(5);
    orchestrator
        .run_at(&request(5), timestamp(), &progress)
        .await
        .unwrap();

    assert_eq!(progress.length(), Some(2));
    assert_eq!(progress.position(), 2);
}

#[tokio::test]
async fn test_manifest_overwritten_between_runs() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = temp_dir.path().join("photos_info.json");
    std::fs::write(&manifest_path, r#"[{"file_name": "old", "size": "s"}]"#).unwrap();

    let orchestrator = BackupOrchestrator::new(
        source_with(vec![photo(1, 8)]).await,
        MockDiskClient::new(),
        settings(&temp_dir, NamingStrategy::Literal),
    );
    orchestrator
        .run_at(&request(5), timestamp(), &BarTracker::hidden(1))
        .await
        .unwrap();

    assert_eq!(
        read_manifest(&manifest_path).unwrap(),
        vec![UploadRecord::new("8", "z")]
    );
}

#[test]
fn test_error_terminal_states() {
    assert_eq!(
        BackupError::from(RequestError::MissingToken).terminal_state(),
        TerminalState::AbortedNoCredentials
    );
    assert_eq!(
        BackupError::MissingSourceToken.terminal_state(),
        TerminalState::AbortedNoCredentials
    );
    assert_eq!(
        BackupError::from(VkError::MalformedResponse).terminal_state(),
        TerminalState::AbortedSourceUnavailable
    );
}
