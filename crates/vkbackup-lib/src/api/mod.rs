//! # API Module
//!
//! Remote HTTP services the backup reads from and writes to.
//!
//! ## Modules
//!
//! - [`vk`] - Photo listing from the social network (read-only source)
//! - [`disk`] - Folder creation and upload-by-URL on cloud storage (target)

pub mod disk;
pub mod vk;

pub use disk::{DiskError, DiskTarget, FolderStatus, LiveDiskClient, MockDiskClient};
pub use vk::{LiveVkClient, MockVkClient, PhotoSource, VkError};
