//! Sync orchestration.
//!
//! One run walks every repository page, upserts each repository, then walks
//! that repository's image pages and upserts each image. Everything happens
//! in order on a single task, so a repository's entity is always sent before
//! any of its images and images of different repositories never interleave.

use futures_util::StreamExt;
use tracing::{info, instrument};

use crate::Result;
use crate::pagination::{image_pages, repository_pages};
use crate::project::{image_entity, repository_entity};
use crate::record::RepositoryRecord;
use crate::traits::{Catalog, RegistryLister};
use crate::types::Blueprint;
use crate::upsert::Upserter;

/// The blueprints entities are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprints {
    pub repository: Blueprint,
    pub image: Blueprint,
}

impl Default for Blueprints {
    fn default() -> Self {
        Self {
            repository: Blueprint::from_static(Blueprint::REPOSITORY),
            image: Blueprint::from_static(Blueprint::IMAGE),
        }
    }
}

/// Drives a full registry-to-catalog sync.
pub struct Synchronizer<'a, R: ?Sized, C> {
    registry: &'a R,
    upserter: &'a Upserter<C>,
    blueprints: Blueprints,
}

impl<'a, R, C> Synchronizer<'a, R, C>
where
    R: RegistryLister + ?Sized,
    C: Catalog,
{
    pub fn new(registry: &'a R, upserter: &'a Upserter<C>, blueprints: Blueprints) -> Self {
        Self {
            registry,
            upserter,
            blueprints,
        }
    }

    /// Run the sync to completion.
    ///
    /// # Errors
    ///
    /// Returns the first listing error. Catalog failures never surface here;
    /// the catalog keeps whatever was written before the error.
    pub async fn run(&self) -> Result<()> {
        let registry = self.registry_label();
        info!(%registry, "Starting registry sync");
        info!(%registry, "Getting all repositories from registry");

        let mut pages = Box::pin(repository_pages(self.registry));
        while let Some(page) = pages.next().await {
            for repository in page? {
                self.sync_repository(&repository).await?;
            }
        }

        info!(%registry, "Got all repositories from registry");
        info!(%registry, "Finished registry sync");
        Ok(())
    }

    #[instrument(skip_all, fields(repository = %repository.repository_name))]
    async fn sync_repository(&self, repository: &RepositoryRecord) -> Result<()> {
        self.upserter
            .upsert(&self.blueprints.repository, &repository_entity(repository))
            .await;

        info!("Getting all images from repository");

        let mut pages = Box::pin(image_pages(self.registry, &repository.repository_name));
        while let Some(page) = pages.next().await {
            for image in page? {
                self.upserter
                    .upsert(&self.blueprints.image, &image_entity(&image))
                    .await;
            }
        }

        info!("Got all images from repository");
        Ok(())
    }

    fn registry_label(&self) -> String {
        self.registry
            .registry_id()
            .map_or_else(|| "default".to_string(), |id| id.to_string())
    }
}
