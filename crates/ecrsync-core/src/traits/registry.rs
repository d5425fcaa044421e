//! Registry listing trait.

use async_trait::async_trait;

use crate::Result;
use crate::record::{ImageRecord, Page, RepositoryRecord};
use crate::types::{Cursor, RegistryId};

/// A registry that lists repositories and images one page at a time.
///
/// Implementations perform exactly one service call per method invocation
/// and never retry.
#[async_trait]
pub trait RegistryLister: Send + Sync {
    /// The registry being listed, if one was configured explicitly.
    fn registry_id(&self) -> Option<&RegistryId>;

    /// List one page of repositories.
    async fn list_repositories(
        &self,
        cursor: Option<&Cursor>,
        max_results: u32,
    ) -> Result<Page<RepositoryRecord>>;

    /// List one page of images of a single repository.
    async fn list_images(
        &self,
        repository_name: &str,
        cursor: Option<&Cursor>,
        max_results: u32,
    ) -> Result<Page<ImageRecord>>;
}
