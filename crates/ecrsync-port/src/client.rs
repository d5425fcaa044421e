//! Port REST HTTP client.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use tracing::{debug, instrument, trace};

use ecrsync_core::entity::Entity;
use ecrsync_core::error::{AuthError, Error, ProtocolError};
use ecrsync_core::types::{Blueprint, ServiceUrl};

use crate::credentials::PortCredentials;
use crate::endpoints::*;
use crate::tokens::AccessToken;

/// HTTP client for the Port API.
///
/// Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PortClient {
    client: reqwest::Client,
    api: ServiceUrl,
}

impl PortClient {
    /// Create a client for the API rooted at `api`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api: ServiceUrl, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("ecrsync/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, api })
    }

    /// Returns the API base URL.
    pub fn api(&self) -> &ServiceUrl {
        &self.api
    }

    /// Exchange client credentials for an access token.
    #[instrument(skip(self, credentials), fields(api = %self.api, client_id = %credentials.client_id()))]
    pub async fn access_token(&self, credentials: &PortCredentials) -> Result<AccessToken, Error> {
        let url = self.api.join(ACCESS_TOKEN);
        debug!(%url, "Requesting access token");

        let request = AccessTokenRequest {
            client_id: credentials.client_id(),
            client_secret: credentials.client_secret(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        trace!(status = %status, "Token response");

        if !status.is_success() {
            let error = parse_error_response(response).await;
            return Err(AuthError::InvalidCredentials(error.to_string()).into());
        }

        let body: AccessTokenResponse = response.json().await?;
        match body.access_token {
            Some(token) if !token.is_empty() => Ok(AccessToken::new(token)),
            _ => Err(AuthError::MissingToken.into()),
        }
    }

    /// Upsert one entity into `blueprint` with merge semantics.
    #[instrument(skip(self, entity, token), fields(api = %self.api, identifier = %entity.identifier))]
    pub async fn upsert_entity(
        &self,
        blueprint: &Blueprint,
        entity: &Entity,
        token: &AccessToken,
    ) -> Result<(), Error> {
        let url = self.api.join(&entities_path(blueprint));
        debug!(%url, "Upserting entity");

        let response = self
            .client
            .post(&url)
            .query(&UPSERT_MERGE)
            .header(AUTHORIZATION, token.bearer())
            .json(entity)
            .send()
            .await?;

        let status = response.status();
        trace!(status = %status, "Upsert response");

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Protocol(parse_error_response(response).await))
        }
    }
}

async fn parse_error_response(response: reqwest::Response) -> ProtocolError {
    let status = response.status().as_u16();

    match response.json::<PortErrorResponse>().await {
        Ok(error_body) => ProtocolError::new(status, error_body.error, error_body.message),
        Err(_) => ProtocolError::new(status, None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let api = ServiceUrl::new(crate::DEFAULT_API_URL).unwrap();
        let client = PortClient::new(api.clone(), None).unwrap();
        assert_eq!(client.api(), &api);
    }

    #[test]
    fn entities_path_uses_blueprint() {
        let blueprint = Blueprint::new("ecrImage").unwrap();
        assert_eq!(entities_path(&blueprint), "blueprints/ecrImage/entities");
    }
}
