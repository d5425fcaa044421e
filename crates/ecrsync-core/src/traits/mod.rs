//! Collaborator traits for the registry and the catalog.

mod catalog;
mod registry;

pub use catalog::Catalog;
pub use registry::RegistryLister;
