//! Upload manifest persistence
//!
//! The manifest lists every photo stored during the most recent run. It is
//! rewritten in full each time, never appended to.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default manifest file name, relative to the working directory
pub const MANIFEST_FILE_NAME: &str = "photos_info.json";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to access manifest {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Manifest {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One successfully uploaded photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub file_name: String,
    #[serde(rename = "size")]
    pub size_code: String,
}

impl UploadRecord {
    pub fn new(file_name: impl Into<String>, size_code: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            size_code: size_code.into(),
        }
    }
}

/// Render records the way they are stored on disk
pub fn render_manifest(records: &[UploadRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Overwrite `path` with the given records in one write
pub fn write_manifest(path: &Path, records: &[UploadRecord]) -> Result<(), ManifestError> {
    let contents = render_manifest(records).map_err(|source| ManifestError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, contents).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_manifest(path: &Path) -> Result<Vec<UploadRecord>, ManifestError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ManifestError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    include!("manifest.test.rs");
}
