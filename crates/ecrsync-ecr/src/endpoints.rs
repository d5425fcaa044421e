//! ECR operation names and wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecrsync_core::Result;
use ecrsync_core::error::InvalidInputError;
use ecrsync_core::record::{
    EncryptionConfiguration, ImageRecord, ImageScanningConfiguration, RepositoryRecord,
};

/// JSON 1.1 target prefix for the ECR API version.
pub const TARGET_PREFIX: &str = "AmazonEC2ContainerRegistry_V20150921";

pub const DESCRIBE_REPOSITORIES: &str = "DescribeRepositories";

pub const DESCRIBE_IMAGES: &str = "DescribeImages";

/// Request body for DescribeRepositories.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeRepositoriesRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<&'a str>,
    pub max_results: u32,
}

/// Response from DescribeRepositories.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeRepositoriesResponse {
    #[serde(default)]
    pub repositories: Vec<RepositoryEntry>,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// Request body for DescribeImages.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeImagesRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_id: Option<&'a str>,
    pub repository_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<&'a str>,
    pub max_results: u32,
}

/// Response from DescribeImages.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeImagesResponse {
    #[serde(default)]
    pub image_details: Vec<ImageDetail>,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// A repository entry. Timestamps are epoch seconds.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryEntry {
    pub registry_id: String,
    pub repository_name: String,
    pub repository_arn: String,
    pub repository_uri: String,
    pub created_at: f64,
    pub image_tag_mutability: String,
    #[serde(default)]
    pub image_scanning_configuration: ScanningEntry,
    #[serde(default)]
    pub encryption_configuration: Option<EncryptionEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanningEntry {
    #[serde(default)]
    pub scan_on_push: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionEntry {
    pub encryption_type: String,
    #[serde(default)]
    pub kms_key: Option<String>,
}

/// An image detail entry. Timestamps are epoch seconds.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetail {
    pub registry_id: String,
    pub repository_name: String,
    pub image_digest: String,
    #[serde(default)]
    pub image_tags: Vec<String>,
    pub image_size_in_bytes: i64,
    pub image_pushed_at: f64,
    #[serde(default)]
    pub image_manifest_media_type: Option<String>,
    #[serde(default)]
    pub artifact_media_type: Option<String>,
    #[serde(default)]
    pub last_recorded_pull_time: Option<f64>,
}

/// Error body of a failed JSON 1.1 call.
#[derive(Debug, Deserialize)]
pub struct EcrErrorResponse {
    #[serde(rename = "__type")]
    pub kind: Option<String>,
    #[serde(alias = "Message")]
    pub message: Option<String>,
}

impl EcrErrorResponse {
    /// The bare error code, without namespace prefix or `:` suffix.
    pub fn code(&self) -> Option<String> {
        self.kind.as_deref().map(error_code)
    }
}

/// Strip `aws.namespace#` and `:http://...` decorations from an error type.
pub fn error_code(kind: &str) -> String {
    let code = kind.rsplit('#').next().unwrap_or(kind);
    code.split(':').next().unwrap_or(code).to_string()
}

/// Convert fractional epoch seconds into a UTC timestamp.
pub fn epoch_seconds(value: f64) -> Result<DateTime<Utc>> {
    let invalid = |reason: &str| InvalidInputError::Timestamp {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    if !value.is_finite() {
        return Err(invalid("not a finite number").into());
    }

    let mut secs = value.floor();
    let mut nanos = ((value - secs) * 1e9).round();
    if nanos >= 1e9 {
        secs += 1.0;
        nanos = 0.0;
    }

    DateTime::from_timestamp(secs as i64, nanos as u32)
        .ok_or_else(|| invalid("out of range").into())
}

impl RepositoryEntry {
    pub fn into_record(self) -> Result<RepositoryRecord> {
        Ok(RepositoryRecord {
            created_at: epoch_seconds(self.created_at)?,
            registry_id: self.registry_id,
            repository_name: self.repository_name,
            repository_arn: self.repository_arn,
            repository_uri: self.repository_uri,
            image_tag_mutability: self.image_tag_mutability,
            image_scanning_configuration: ImageScanningConfiguration {
                scan_on_push: self.image_scanning_configuration.scan_on_push,
            },
            encryption_configuration: self.encryption_configuration.map(|e| {
                EncryptionConfiguration {
                    encryption_type: e.encryption_type,
                    kms_key: e.kms_key,
                }
            }),
        })
    }
}

impl ImageDetail {
    pub fn into_record(self) -> Result<ImageRecord> {
        Ok(ImageRecord {
            image_pushed_at: epoch_seconds(self.image_pushed_at)?,
            last_recorded_pull_time: self
                .last_recorded_pull_time
                .map(epoch_seconds)
                .transpose()?,
            registry_id: self.registry_id,
            repository_name: self.repository_name,
            image_digest: self.image_digest,
            image_tags: self.image_tags,
            image_size_in_bytes: self.image_size_in_bytes,
            image_manifest_media_type: self.image_manifest_media_type,
            artifact_media_type: self.artifact_media_type,
        })
    }
}
