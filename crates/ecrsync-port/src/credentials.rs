//! Port client credentials.

use std::fmt;

/// Client id and secret exchanged for a Port access token.
///
/// # Security
///
/// The secret is never exposed in Debug output to prevent accidental logging.
#[derive(Clone)]
pub struct PortCredentials {
    client_id: String,
    client_secret: String,
}

impl PortCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Returns the client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the secret. Use only to build the token request.
    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for PortCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}
