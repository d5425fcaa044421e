//! Port-backed catalog.

use async_trait::async_trait;
use tracing::info;

use ecrsync_core::entity::Entity;
use ecrsync_core::traits::Catalog;
use ecrsync_core::types::Blueprint;
use ecrsync_core::Result;

use crate::client::PortClient;
use crate::credentials::PortCredentials;
use crate::tokens::AccessToken;

/// A [`Catalog`] writing to Port with a token obtained once at login.
#[derive(Debug, Clone)]
pub struct PortCatalog {
    client: PortClient,
    token: AccessToken,
}

impl PortCatalog {
    /// Obtain an access token and return a catalog that uses it.
    pub async fn login(client: PortClient, credentials: &PortCredentials) -> Result<Self> {
        info!(api = %client.api(), "Authenticating with catalog");
        let token = client.access_token(credentials).await?;
        Ok(Self::with_token(client, token))
    }

    /// Use a token acquired elsewhere.
    pub fn with_token(client: PortClient, token: AccessToken) -> Self {
        Self { client, token }
    }
}

#[async_trait]
impl Catalog for PortCatalog {
    async fn upsert_entity(&self, blueprint: &Blueprint, entity: &Entity) -> Result<()> {
        self.client
            .upsert_entity(blueprint, entity, &self.token)
            .await
    }
}
