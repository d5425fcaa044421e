//! Validated value types.
//!
//! These types check their invariants at construction time so the rest of
//! the pipeline never sees a malformed registry id, blueprint or endpoint.

mod blueprint;
mod cursor;
mod registry_id;
mod service_url;

pub use blueprint::Blueprint;
pub use cursor::Cursor;
pub use registry_id::RegistryId;
pub use service_url::ServiceUrl;
