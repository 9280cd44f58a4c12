//! Backup domain
//!
//! Everything between the raw photo listing and the written manifest.
//!
//! - [`sizes`] - rendition ranking and best-variant choice
//! - [`selection`] - listing to upload candidates
//! - [`naming`] - like-count file names with collision handling
//! - [`manifest`] - the JSON record of a run
//! - [`request`] - validated run inputs
//! - [`orchestrator`] - the run itself

pub mod manifest;
pub mod naming;
pub mod orchestrator;
pub mod request;
pub mod selection;
pub mod sizes;

pub use manifest::{MANIFEST_FILE_NAME, UploadRecord, read_manifest, write_manifest};
pub use naming::{NameRegistry, RunTimestamp};
pub use orchestrator::{
    BackupError, BackupOrchestrator, BackupReport, BackupSettings, RunOutcome, TerminalState,
    UploadFailure,
};
pub use request::{BackupRequest, RequestError};
pub use selection::{DEFAULT_QUANTITY, PhotoRecord, SelectedPhoto, Selection, select_photos};
pub use sizes::{SelectionError, SizeCode, SizeVariant, select_largest};
