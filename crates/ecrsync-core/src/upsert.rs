//! Best-effort entity ingestion.

use tracing::{debug, info, warn};

use crate::entity::Entity;
use crate::traits::Catalog;
use crate::types::Blueprint;

/// Sends entities to a [`Catalog`] without ever failing the caller.
///
/// A rejected or undeliverable entity is logged and dropped so the rest of
/// the run keeps going. There is no retry.
#[derive(Debug, Clone)]
pub struct Upserter<C> {
    catalog: C,
}

impl<C: Catalog> Upserter<C> {
    /// Wrap a catalog collaborator.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Returns the wrapped catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Upsert one entity into `blueprint`, logging instead of failing.
    pub async fn upsert(&self, blueprint: &Blueprint, entity: &Entity) {
        info!(%blueprint, identifier = %entity.identifier, "Adding entity to catalog");
        if let Ok(body) = serde_json::to_string(entity) {
            debug!(%blueprint, entity = %body, "Entity document");
        }

        match self.catalog.upsert_entity(blueprint, entity).await {
            Ok(()) => {
                info!(%blueprint, identifier = %entity.identifier, "Added entity to catalog");
            }
            Err(e) => {
                warn!(
                    %blueprint,
                    identifier = %entity.identifier,
                    error = %e,
                    "Ingesting {} entity to catalog failed, skipping",
                    blueprint
                );
            }
        }
    }
}
