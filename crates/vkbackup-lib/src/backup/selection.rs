//! Photo selection pipeline
//!
//! Turns the source listing into an ordered list of upload candidates: the
//! best rendition of each photo, paired with its like count.

use super::sizes::{SelectionError, SizeCode, SizeVariant, select_largest};
use tracing::{debug, warn};

/// Number of photos copied when the caller leaves the quantity blank
pub const DEFAULT_QUANTITY: usize = 5;

/// One source photo as listed by the media API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    owner_id: String,
    sizes: Vec<SizeVariant>,
    like_count: u64,
}

impl PhotoRecord {
    pub fn new(owner_id: impl Into<String>, sizes: Vec<SizeVariant>, like_count: u64) -> Self {
        Self {
            owner_id: owner_id.into(),
            sizes,
            like_count,
        }
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn sizes(&self) -> &[SizeVariant] {
        &self.sizes
    }

    pub fn like_count(&self) -> u64 {
        self.like_count
    }
}

/// The chosen rendition of one photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPhoto {
    pub url: String,
    pub like_count: u64,
    pub size_code: SizeCode,
}

/// A photo dropped during selection, with its position in the source listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPhoto {
    pub index: usize,
    pub error: SelectionError,
}

/// Result of running the pipeline over one listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub photos: Vec<SelectedPhoto>,
    pub skipped: Vec<SkippedPhoto>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Select the best rendition of the first `quantity` photos, in source order.
///
/// The listing is truncated before ranking, so a photo that fails selection
/// is not replaced by a later one.
pub fn select_photos(records: &[PhotoRecord], quantity: usize) -> Selection {
    let mut selection = Selection::default();

    for (index, record) in records.iter().take(quantity).enumerate() {
        match select_largest(record.sizes()) {
            Ok((size_code, variant)) => {
                debug!(index, %size_code, likes = record.like_count(), "Selected rendition");
                selection.photos.push(SelectedPhoto {
                    url: variant.url.clone(),
                    like_count: record.like_count(),
                    size_code,
                });
            }
            Err(error) => {
                warn!(index, %error, "Skipping photo");
                selection.skipped.push(SkippedPhoto { index, error });
            }
        }
    }

    selection
}

#[cfg(test)]
mod tests {
    include!("selection.test.rs");
}
