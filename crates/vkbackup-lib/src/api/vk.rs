//! VK photo API client
//!
//! Provides production (Live) and test (Mock) implementations of the media
//! source. Only the profile album listing is used.

use crate::backup::selection::PhotoRecord;
use crate::backup::sizes::SizeVariant;
use crate::networking::NetworkingManager;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.vk.com/method";
pub const DEFAULT_API_VERSION: &str = "5.199";

/// VK API errors
#[derive(Debug, Error)]
pub enum VkError {
    #[error("Photo source unavailable: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("Photo source rejected the request ({code}): {message}")]
    Rejected { code: i64, message: String },

    #[error("JSON parsing failed: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Response has neither 'response' nor 'error'")]
    MalformedResponse,
}

/// Top-level `photos.get` body: exactly one of the fields is present
#[derive(Debug, Deserialize)]
struct PhotosGetEnvelope {
    response: Option<PhotosGetResponse>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct PhotosGetResponse {
    #[serde(default)]
    count: u64,
    items: Vec<VkPhoto>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error_code: i64,
    error_msg: String,
}

/// Photo item as returned with `extended=1`
#[derive(Debug, Clone, Deserialize)]
pub struct VkPhoto {
    pub id: i64,
    pub owner_id: i64,
    pub sizes: Vec<SizeVariant>,
    #[serde(default)]
    pub likes: VkLikes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VkLikes {
    pub count: u64,
}

impl From<VkPhoto> for PhotoRecord {
    fn from(photo: VkPhoto) -> Self {
        PhotoRecord::new(photo.owner_id.to_string(), photo.sizes, photo.likes.count)
    }
}

/// Parse a `photos.get` body into records, classifying API error payloads
pub fn parse_photos_response(body: &[u8]) -> Result<Vec<PhotoRecord>, VkError> {
    let envelope: PhotosGetEnvelope = serde_json::from_slice(body)?;

    match (envelope.response, envelope.error) {
        (_, Some(error)) => Err(VkError::Rejected {
            code: error.error_code,
            message: error.error_msg,
        }),
        (Some(response), None) => {
            debug!(
                count = response.count,
                items = response.items.len(),
                "Parsed photo listing"
            );
            Ok(response.items.into_iter().map(PhotoRecord::from).collect())
        }
        (None, None) => Err(VkError::MalformedResponse),
    }
}

/// Trait for media source operations
pub trait PhotoSource {
    /// List the photos of a profile's album, in API order
    ///
    /// # Arguments
    /// * `owner_id` - Numeric profile identifier
    fn fetch_profile_photos(
        &self,
        owner_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<PhotoRecord>, VkError>> + Send;
}

/// Live VK API client (production)
pub struct LiveVkClient {
    networking: Arc<NetworkingManager>,
    base_url: String,
    access_token: String,
    api_version: String,
}

impl LiveVkClient {
    /// Create new live client against the public API
    pub fn new(networking: Arc<NetworkingManager>, access_token: String) -> Self {
        Self::with_base_url(
            networking,
            DEFAULT_API_URL.to_string(),
            access_token,
            DEFAULT_API_VERSION.to_string(),
        )
    }

    /// Create client with custom base URL and protocol version (for testing)
    pub fn with_base_url(
        networking: Arc<NetworkingManager>,
        base_url: String,
        access_token: String,
        api_version: String,
    ) -> Self {
        Self {
            networking,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
            api_version,
        }
    }
}

impl PhotoSource for LiveVkClient {
    async fn fetch_profile_photos(&self, owner_id: &str) -> Result<Vec<PhotoRecord>, VkError> {
        let url = format!("{}/photos.get", self.base_url);
        debug!(%url, owner_id, "Requesting profile photos");

        let response = self
            .networking
            .client()
            .get(&url)
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("v", self.api_version.as_str()),
                ("owner_id", owner_id),
                ("album_id", "profile"),
                ("rev", "0"),
                ("extended", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        parse_photos_response(&body)
    }
}

/// Mock VK API client (testing)
pub struct MockVkClient {
    responses: Arc<Mutex<HashMap<String, Result<Vec<PhotoRecord>, (i64, String)>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockVkClient {
    /// Create new mock client
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add mock listing for an owner
    pub async fn with_photos(self, owner_id: &str, photos: Vec<PhotoRecord>) -> Self {
        self.responses
            .lock()
            .await
            .insert(owner_id.to_string(), Ok(photos));
        self
    }

    /// Add mock API error payload for an owner
    pub async fn with_rejection(self, owner_id: &str, code: i64, message: &str) -> Self {
        self.responses
            .lock()
            .await
            .insert(owner_id.to_string(), Err((code, message.to_string())));
        self
    }

    /// Owner ids requested so far
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

impl PhotoSource for MockVkClient {
    async fn fetch_profile_photos(&self, owner_id: &str) -> Result<Vec<PhotoRecord>, VkError> {
        self.requests.lock().await.push(owner_id.to_string());
        let responses = self.responses.lock().await;

        match responses.get(owner_id) {
            Some(Ok(photos)) => Ok(photos.clone()),
            Some(Err((code, message))) => Err(VkError::Rejected {
                code: *code,
                message: message.clone(),
            }),
            None => Err(VkError::Rejected {
                code: 30,
                message: format!("No mock response for owner: {}", owner_id),
            }),
        }
    }
}

impl Default for MockVkClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("vk.test.rs");
}
