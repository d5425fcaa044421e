//! Projection of registry records into catalog entities.
//!
//! Both functions are pure: the same record always yields the same
//! document, and no field is ever left out of `properties`.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

use crate::entity::Entity;
use crate::record::{ImageRecord, RepositoryRecord};

/// Relation from an image entity to its repository entity.
pub const REPOSITORY_RELATION: &str = "repository";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format a timestamp as ISO-8601 UTC with second precision.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Project a repository into a repository-blueprint entity.
pub fn repository_entity(repository: &RepositoryRecord) -> Entity {
    let (encryption_type, kms_key) = match &repository.encryption_configuration {
        Some(config) => (Some(config.encryption_type.clone()), config.kms_key.clone()),
        None => (None, None),
    };

    let mut properties = Map::new();
    properties.insert("registryId".into(), json!(repository.registry_id));
    properties.insert("arn".into(), json!(repository.repository_arn));
    properties.insert("uri".into(), json!(repository.repository_uri));
    properties.insert(
        "createdAt".into(),
        json!(format_timestamp(&repository.created_at)),
    );
    properties.insert(
        "imageTagMutability".into(),
        json!(repository.image_tag_mutability),
    );
    properties.insert(
        "configurationScanOnPush".into(),
        json!(repository.image_scanning_configuration.scan_on_push),
    );
    properties.insert("encryptionType".into(), json!(encryption_type));
    properties.insert("kmsKey".into(), json!(kms_key));

    Entity::new(&repository.repository_name, properties)
}

/// Project an image into an image-blueprint entity related to its repository.
pub fn image_entity(image: &ImageRecord) -> Entity {
    let last_pull = image.last_recorded_pull_time.as_ref().map(format_timestamp);

    let mut properties = Map::new();
    properties.insert("registryId".into(), json!(image.registry_id));
    properties.insert("digest".into(), json!(image.image_digest));
    properties.insert("tags".into(), json!(image.image_tags));
    properties.insert("size".into(), json!(image.image_size_in_bytes));
    properties.insert(
        "pushedAt".into(),
        json!(format_timestamp(&image.image_pushed_at)),
    );
    properties.insert(
        "manifestMediaType".into(),
        json!(image.image_manifest_media_type),
    );
    properties.insert("artifactMediaType".into(), json!(image.artifact_media_type));
    properties.insert(
        "lastRecordedPullTime".into(),
        last_pull.map_or(Value::Null, Value::String),
    );

    Entity::new(&image.image_digest, properties)
        .with_relation(REPOSITORY_RELATION, &image.repository_name)
}
