//! ecrsync-core - Registry-to-catalog sync pipeline.
//!
//! This crate holds everything that does not touch the network directly:
//! the validated value types, the raw registry records, the catalog entity
//! document, the collaborator traits, cursor pagination, the projector and
//! the sync orchestrator.
//!
//! Concrete collaborators live in `ecrsync-ecr` (registry) and
//! `ecrsync-port` (catalog).
//!
//! # Example
//!
//! ```no_run
//! use ecrsync_core::{Blueprints, Catalog, RegistryLister, Synchronizer, Upserter};
//!
//! # async fn example<R: RegistryLister, C: Catalog>(registry: R, catalog: C) -> ecrsync_core::Result<()> {
//! let upserter = Upserter::new(catalog);
//! Synchronizer::new(&registry, &upserter, Blueprints::default())
//!     .run()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod pagination;
pub mod project;
pub mod record;
pub mod sync;
pub mod traits;
pub mod types;
pub mod upsert;

pub use entity::Entity;
pub use error::Error;
pub use pagination::{MAX_RESULTS, image_pages, paginate, repository_pages};
pub use record::{
    EncryptionConfiguration, ImageRecord, ImageScanningConfiguration, Page, RepositoryRecord,
};
pub use sync::{Blueprints, Synchronizer};
pub use traits::{Catalog, RegistryLister};
pub use types::{Blueprint, Cursor, RegistryId, ServiceUrl};
pub use upsert::Upserter;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
