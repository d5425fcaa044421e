//! ecrsync-port - Port software-catalog client.
//!
//! Exchanges client credentials for an access token once, then upserts
//! entities with merge semantics on a single shared HTTP client.

mod catalog;
mod client;
mod credentials;
mod endpoints;
mod tokens;

pub use catalog::PortCatalog;
pub use client::PortClient;
pub use credentials::PortCredentials;
pub use tokens::AccessToken;

/// Public Port API base URL.
pub const DEFAULT_API_URL: &str = "https://api.getport.io/v1";
