//! Backup orchestration
//!
//! Sequences one run: folder creation, photo listing, selection, naming,
//! uploads (one at a time, in listing order) and the manifest write.

use super::manifest::{ManifestError, UploadRecord, write_manifest};
use super::naming::{NameRegistry, RunTimestamp, file_name};
use super::request::{BackupRequest, RequestError};
use super::selection::{SkippedPhoto, select_photos};
use crate::api::disk::{DiskError, DiskTarget, FolderStatus};
use crate::api::vk::{PhotoSource, VkError};
use crate::display::{OperationSummary, ProgressTracker};
use crate::primitives::NamingStrategy;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Fatal run errors. Each aborts before any upload is attempted.
#[derive(Debug, Error)]
pub enum BackupError {
    #[error(transparent)]
    InvalidRequest(#[from] RequestError),

    #[error("Photo source access token is not configured")]
    MissingSourceToken,

    #[error("Photo source unavailable: {message}")]
    SourceUnavailable { message: String },

    #[error("Photo source rejected the request ({code}): {message}")]
    SourceRejected { code: i64, message: String },

    #[error("Could not create folder '{folder}': {message}")]
    FolderCreateFailed { folder: String, message: String },

    #[error("Failed to write manifest: {source}")]
    Manifest {
        #[from]
        source: ManifestError,
    },
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalState {
    /// Manifest written with zero or more records
    Completed,
    /// Source listing had nothing to upload; no manifest
    NothingToUpload,
    AbortedNoCredentials,
    AbortedSourceUnavailable,
    AbortedSourceRejected,
    AbortedFolderCreateFailed,
    AbortedManifestWrite,
}

impl BackupError {
    pub fn terminal_state(&self) -> TerminalState {
        match self {
            BackupError::InvalidRequest(_) | BackupError::MissingSourceToken => {
                TerminalState::AbortedNoCredentials
            }
            BackupError::SourceUnavailable { .. } => TerminalState::AbortedSourceUnavailable,
            BackupError::SourceRejected { .. } => TerminalState::AbortedSourceRejected,
            BackupError::FolderCreateFailed { .. } => TerminalState::AbortedFolderCreateFailed,
            BackupError::Manifest { .. } => TerminalState::AbortedManifestWrite,
        }
    }
}

impl From<VkError> for BackupError {
    fn from(error: VkError) -> Self {
        match error {
            VkError::Rejected { code, message } => BackupError::SourceRejected { code, message },
            other => BackupError::SourceUnavailable {
                message: other.to_string(),
            },
        }
    }
}

/// A photo whose upload was refused; the run continues without it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    pub file_name: String,
    pub source_url: String,
    pub message: String,
}

/// Everything a completed run produced
#[derive(Debug, Clone)]
pub struct BackupReport {
    pub folder_status: FolderStatus,
    pub records: Vec<UploadRecord>,
    pub failures: Vec<UploadFailure>,
    pub skipped: Vec<SkippedPhoto>,
    pub manifest_path: PathBuf,
}

impl BackupReport {
    pub fn summary(&self) -> OperationSummary {
        OperationSummary::new(self.records.len(), self.failures.len() + self.skipped.len())
    }
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    Completed(BackupReport),
    /// No photo survived selection; `skipped` says why, if any were listed
    NothingToUpload { skipped: Vec<SkippedPhoto> },
}

impl RunOutcome {
    pub fn terminal_state(&self) -> TerminalState {
        match self {
            RunOutcome::Completed(_) => TerminalState::Completed,
            RunOutcome::NothingToUpload { .. } => TerminalState::NothingToUpload,
        }
    }
}

/// Fixed settings for every run of one orchestrator
#[derive(Debug, Clone)]
pub struct BackupSettings {
    pub folder_name: String,
    pub manifest_path: PathBuf,
    pub naming: NamingStrategy,
}

/// Drives one backup from listing to manifest
pub struct BackupOrchestrator<S, T> {
    source: S,
    target: T,
    settings: BackupSettings,
}

impl<S: PhotoSource, T: DiskTarget> BackupOrchestrator<S, T> {
    pub fn new(source: S, target: T, settings: BackupSettings) -> Self {
        Self {
            source,
            target,
            settings,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn settings(&self) -> &BackupSettings {
        &self.settings
    }

    /// Run with the timestamp taken now
    pub async fn run(
        &self,
        request: &BackupRequest,
        progress: &dyn ProgressTracker,
    ) -> Result<RunOutcome, BackupError> {
        self.run_at(request, RunTimestamp::now(), progress).await
    }

    /// Run with an explicit collision timestamp
    pub async fn run_at(
        &self,
        request: &BackupRequest,
        timestamp: RunTimestamp,
        progress: &dyn ProgressTracker,
    ) -> Result<RunOutcome, BackupError> {
        let folder = self.settings.folder_name.as_str();

        let folder_status = self
            .target
            .ensure_folder(folder)
            .await
            .map_err(|error| BackupError::FolderCreateFailed {
                folder: folder.to_string(),
                message: error.to_string(),
            })?;

        if let FolderStatus::Failed(message) = &folder_status {
            return Err(BackupError::FolderCreateFailed {
                folder: folder.to_string(),
                message: message.clone(),
            });
        }
        info!(folder, status = ?folder_status, "Destination folder ready");

        let photos = self.source.fetch_profile_photos(request.identifier()).await?;
        let selection = select_photos(&photos, request.quantity());
        info!(
            listed = photos.len(),
            selected = selection.photos.len(),
            skipped = selection.skipped.len(),
            "Photos selected"
        );

        if selection.is_empty() {
            return Ok(RunOutcome::NothingToUpload {
                skipped: selection.skipped,
            });
        }
        progress.set_length(selection.photos.len() as u64);

        let mut registry = NameRegistry::new(self.settings.naming, timestamp);
        let mut records = Vec::with_capacity(selection.photos.len());
        let mut failures = Vec::new();

        for photo in &selection.photos {
            let stem = registry.assign(photo.like_count);
            let name = file_name(&stem);
            progress.tick(&name);

            match self.target.upload_by_url(folder, &name, &photo.url).await {
                Ok(()) => records.push(UploadRecord::new(stem, photo.size_code.as_str())),
                Err(error) => {
                    let message = match error {
                        DiskError::UploadFailed { message, .. } => message,
                        other => other.to_string(),
                    };
                    warn!(url = %photo.url, file = %name, %message, "Upload failed");
                    failures.push(UploadFailure {
                        file_name: name,
                        source_url: photo.url.clone(),
                        message,
                    });
                }
            }
            progress.inc();
        }

        write_manifest(&self.settings.manifest_path, &records)?;
        info!(
            path = %self.settings.manifest_path.display(),
            records = records.len(),
            "Manifest written"
        );

        Ok(RunOutcome::Completed(BackupReport {
            folder_status,
            records,
            failures,
            skipped: selection.skipped,
            manifest_path: self.settings.manifest_path.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    include!("orchestrator.test.rs");
}
