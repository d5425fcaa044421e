//! ECR-backed registry lister.

use async_trait::async_trait;
use tracing::{debug, instrument};

use ecrsync_core::record::{ImageRecord, Page, RepositoryRecord};
use ecrsync_core::traits::RegistryLister;
use ecrsync_core::types::{Cursor, RegistryId};
use ecrsync_core::Result;

use crate::client::EcrClient;
use crate::endpoints::*;

/// Lists repositories and images of one ECR registry.
///
/// Without a registry id, ECR lists the registry of the calling account.
#[derive(Debug, Clone)]
pub struct EcrRegistry {
    client: EcrClient,
    registry_id: Option<RegistryId>,
}

impl EcrRegistry {
    pub fn new(client: EcrClient, registry_id: Option<RegistryId>) -> Self {
        Self {
            client,
            registry_id,
        }
    }

    fn registry(&self) -> Option<&str> {
        self.registry_id.as_ref().map(RegistryId::as_str)
    }
}

#[async_trait]
impl RegistryLister for EcrRegistry {
    fn registry_id(&self) -> Option<&RegistryId> {
        self.registry_id.as_ref()
    }

    #[instrument(skip(self), fields(registry = ?self.registry()))]
    async fn list_repositories(
        &self,
        cursor: Option<&Cursor>,
        max_results: u32,
    ) -> Result<Page<RepositoryRecord>> {
        debug!("Describing repositories");

        let request = DescribeRepositoriesRequest {
            registry_id: self.registry(),
            next_token: cursor.map(Cursor::as_str),
            max_results,
        };

        let response: DescribeRepositoriesResponse =
            self.client.call(DESCRIBE_REPOSITORIES, &request).await?;

        let records = response
            .repositories
            .into_iter()
            .map(RepositoryEntry::into_record)
            .collect::<Result<Vec<_>>>()?;

        Ok(Page {
            records,
            cursor: Cursor::from_token(response.next_token),
        })
    }

    #[instrument(skip(self), fields(registry = ?self.registry()))]
    async fn list_images(
        &self,
        repository_name: &str,
        cursor: Option<&Cursor>,
        max_results: u32,
    ) -> Result<Page<ImageRecord>> {
        debug!("Describing images");

        let request = DescribeImagesRequest {
            registry_id: self.registry(),
            repository_name,
            next_token: cursor.map(Cursor::as_str),
            max_results,
        };

        let response: DescribeImagesResponse = self.client.call(DESCRIBE_IMAGES, &request).await?;

        let records = response
            .image_details
            .into_iter()
            .map(ImageDetail::into_record)
            .collect::<Result<Vec<_>>>()?;

        Ok(Page {
            records,
            cursor: Cursor::from_token(response.next_token),
        })
    }
}
