//! Raw registry records.
//!
//! These mirror what the registry returns, already decoded from the wire.
//! They are read-only inputs to the projector and are never mutated.

use chrono::{DateTime, Utc};

use crate::types::Cursor;

/// A repository as listed by the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryRecord {
    /// The account id owning the registry.
    pub registry_id: String,

    /// Repository name, unique within the registry.
    pub repository_name: String,

    pub repository_arn: String,

    pub repository_uri: String,

    pub created_at: DateTime<Utc>,

    /// `MUTABLE` or `IMMUTABLE`.
    pub image_tag_mutability: String,

    pub image_scanning_configuration: ImageScanningConfiguration,

    /// Absent when the registry did not report an encryption configuration.
    pub encryption_configuration: Option<EncryptionConfiguration>,
}

/// Scan-on-push settings of a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageScanningConfiguration {
    pub scan_on_push: bool,
}

/// Encryption settings of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionConfiguration {
    /// `AES256` or `KMS`.
    pub encryption_type: String,

    /// The KMS key, set only for KMS encryption.
    pub kms_key: Option<String>,
}

/// An image as listed by the registry, scoped to one repository.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub registry_id: String,

    /// Name of the owning repository.
    pub repository_name: String,

    /// Content digest, unique within the registry.
    pub image_digest: String,

    /// Empty for untagged images.
    pub image_tags: Vec<String>,

    pub image_size_in_bytes: i64,

    pub image_pushed_at: DateTime<Utc>,

    pub image_manifest_media_type: Option<String>,

    pub artifact_media_type: Option<String>,

    /// Absent for images that were never pulled.
    pub last_recorded_pull_time: Option<DateTime<Utc>>,
}

/// One page of a paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The records in this page, in source order. May be empty.
    pub records: Vec<T>,

    /// Cursor for the next page, if more records exist.
    pub cursor: Option<Cursor>,
}

impl<T> Page<T> {
    /// A page with no continuation.
    pub fn last(records: Vec<T>) -> Self {
        Self {
            records,
            cursor: None,
        }
    }
}
