//! Yandex Disk REST client
//!
//! Provides production (Live) and test (Mock) implementations of the upload
//! target: folder creation and server-side upload by URL.

use crate::networking::NetworkingManager;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://cloud-api.yandex.net/v1/disk/resources";
pub const DEFAULT_WEB_URL: &str = "https://disk.yandex.ru/client/disk";

/// Error code the API reports when the folder is already there
const EXISTING_DIRECTORY_ERROR: &str = "DiskPathPointsToExistentDirectoryError";
const EXISTING_DIRECTORY_PHRASES: [&str; 2] = ["already exists", "уже существует"];

/// Disk API errors
#[derive(Debug, Error)]
pub enum DiskError {
    #[error("Storage unreachable: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("Upload of {url} failed: {message}")]
    UploadFailed { url: String, message: String },
}

/// Outcome of a folder creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderStatus {
    Created,
    AlreadyExists,
    Failed(String),
}

impl FolderStatus {
    /// `Created` and `AlreadyExists` both leave a usable destination
    pub fn is_usable(&self) -> bool {
        !matches!(self, FolderStatus::Failed(_))
    }
}

/// Error body shared by all disk endpoints
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
    description: Option<String>,
}

impl ApiErrorBody {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    fn points_to_existing_directory(&self) -> bool {
        self.error.as_deref() == Some(EXISTING_DIRECTORY_ERROR)
            || self.message.as_deref().is_some_and(|message| {
                EXISTING_DIRECTORY_PHRASES
                    .iter()
                    .any(|phrase| message.contains(phrase))
            })
    }

    /// Most specific human-readable text available
    fn into_message(self, status: reqwest::StatusCode) -> String {
        self.message
            .or(self.description)
            .or(self.error)
            .unwrap_or_else(|| format!("HTTP {}", status))
    }
}

/// Classify a folder creation response
fn folder_status(status: reqwest::StatusCode, body: &str) -> FolderStatus {
    if status.is_success() {
        return FolderStatus::Created;
    }

    let error = ApiErrorBody::parse(body);
    if error.points_to_existing_directory() {
        FolderStatus::AlreadyExists
    } else {
        FolderStatus::Failed(error.into_message(status))
    }
}

/// Remote path of an uploaded file
pub fn upload_path(folder_name: &str, file_name: &str) -> String {
    format!("disk:/{}/{}", folder_name, file_name)
}

/// Trait for storage target operations
pub trait DiskTarget {
    /// Create `folder_name` at the disk root; an existing folder is not an error
    fn ensure_folder(
        &self,
        folder_name: &str,
    ) -> impl std::future::Future<Output = Result<FolderStatus, DiskError>> + Send;

    /// Ask the storage to fetch `source_url` and store it as `folder_name/file_name`
    ///
    /// # Arguments
    /// * `folder_name` - Destination folder created by `ensure_folder`
    /// * `file_name` - Full file name, extension included
    /// * `source_url` - Publicly reachable image URL
    fn upload_by_url(
        &self,
        folder_name: &str,
        file_name: &str,
        source_url: &str,
    ) -> impl std::future::Future<Output = Result<(), DiskError>> + Send;
}

/// Live Yandex Disk client (production)
pub struct LiveDiskClient {
    networking: Arc<NetworkingManager>,
    base_url: String,
    token: String,
}

impl LiveDiskClient {
    /// Create new live client against the public API
    pub fn new(networking: Arc<NetworkingManager>, token: String) -> Self {
        Self::with_base_url(networking, DEFAULT_API_URL.to_string(), token)
    }

    /// Create client with custom base URL (for testing)
    pub fn with_base_url(networking: Arc<NetworkingManager>, base_url: String, token: String) -> Self {
        Self {
            networking,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }
}

impl DiskTarget for LiveDiskClient {
    async fn ensure_folder(&self, folder_name: &str) -> Result<FolderStatus, DiskError> {
        debug!(folder = folder_name, "Creating destination folder");

        let response = self
            .networking
            .client()
            .put(&self.base_url)
            .query(&[("path", folder_name)])
            .header(AUTHORIZATION, &self.token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let outcome = folder_status(status, &body);

        debug!(folder = folder_name, %status, ?outcome, "Folder request finished");
        Ok(outcome)
    }

    async fn upload_by_url(
        &self,
        folder_name: &str,
        file_name: &str,
        source_url: &str,
    ) -> Result<(), DiskError> {
        let path = upload_path(folder_name, file_name);
        debug!(%path, "Requesting upload by URL");

        let response = self
            .networking
            .client()
            .post(format!("{}/upload", self.base_url))
            .query(&[("path", path.as_str()), ("url", source_url)])
            .header(AUTHORIZATION, &self.token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await?;
        Err(DiskError::UploadFailed {
            url: source_url.to_string(),
            message: ApiErrorBody::parse(&body).into_message(status),
        })
    }
}

/// An upload request observed by [`MockDiskClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpload {
    pub folder_name: String,
    pub file_name: String,
    pub source_url: String,
}

/// Mock Yandex Disk client (testing)
pub struct MockDiskClient {
    folder_status: Arc<Mutex<FolderStatus>>,
    upload_failures: Arc<Mutex<HashMap<String, String>>>,
    folder_requests: Arc<Mutex<Vec<String>>>,
    uploads: Arc<Mutex<Vec<RecordedUpload>>>,
}

impl MockDiskClient {
    /// Create new mock client; folders are created and uploads accepted
    pub fn new() -> Self {
        Self {
            folder_status: Arc::new(Mutex::new(FolderStatus::Created)),
            upload_failures: Arc::new(Mutex::new(HashMap::new())),
            folder_requests: Arc::new(Mutex::new(Vec::new())),
            uploads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer folder creation with `status`
    pub async fn with_folder_status(self, status: FolderStatus) -> Self {
        *self.folder_status.lock().await = status;
        self
    }

    /// Fail uploads of `source_url` with `message`
    pub async fn with_upload_failure(self, source_url: &str, message: &str) -> Self {
        self.upload_failures
            .lock()
            .await
            .insert(source_url.to_string(), message.to_string());
        self
    }

    pub async fn folder_requests(&self) -> Vec<String> {
        self.folder_requests.lock().await.clone()
    }

    /// Every upload attempt, failed ones included, in call order
    pub async fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().await.clone()
    }
}

impl DiskTarget for MockDiskClient {
    async fn ensure_folder(&self, folder_name: &str) -> Result<FolderStatus, DiskError> {
        self.folder_requests
            .lock()
            .await
            .push(folder_name.to_string());
        Ok(self.folder_status.lock().await.clone())
    }

    async fn upload_by_url(
        &self,
        folder_name: &str,
        file_name: &str,
        source_url: &str,
    ) -> Result<(), DiskError> {
        self.uploads.lock().await.push(RecordedUpload {
            folder_name: folder_name.to_string(),
            file_name: file_name.to_string(),
            source_url: source_url.to_string(),
        });

        match self.upload_failures.lock().await.get(source_url) {
            Some(message) => Err(DiskError::UploadFailed {
                url: source_url.to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for MockDiskClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("disk.test.rs");
}
