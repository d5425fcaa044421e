//! Catalog upsert trait.

use async_trait::async_trait;

use crate::Result;
use crate::entity::Entity;
use crate::types::Blueprint;

/// A catalog that accepts entity upserts with merge semantics.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Create the entity if absent, otherwise shallow-merge its fields.
    ///
    /// Returns an error for any non-success response. Callers decide
    /// whether that error is fatal; see [`Upserter`](crate::Upserter).
    async fn upsert_entity(&self, blueprint: &Blueprint, entity: &Entity) -> Result<()>;
}
