//! ECR JSON 1.1 HTTP client.

use std::time::Duration;

use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use ecrsync_core::error::{Error, InvalidInputError, ProtocolError};
use ecrsync_core::types::ServiceUrl;

use crate::credentials::AwsCredentials;
use crate::endpoints::{EcrErrorResponse, TARGET_PREFIX};
use crate::sigv4::Signer;

const JSON_1_1: &str = "application/x-amz-json-1.1";
const SIGNING_SERVICE: &str = "ecr";

/// HTTP client for the ECR control plane.
///
/// One underlying connection pool is shared by every call made through a
/// client and its clones.
#[derive(Debug, Clone)]
pub struct EcrClient {
    client: reqwest::Client,
    endpoint: ServiceUrl,
    signer: Signer,
}

impl EcrClient {
    /// Create a client for `region`, talking to `endpoint` or the public
    /// regional endpoint when none is given.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed region or endpoint, or if the HTTP
    /// client cannot be built.
    pub fn new(
        region: &str,
        endpoint: Option<ServiceUrl>,
        credentials: AwsCredentials,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        validate_region(region)?;

        let endpoint = match endpoint {
            Some(endpoint) => endpoint,
            None => Self::default_endpoint(region)?,
        };

        let mut builder =
            reqwest::Client::builder().user_agent(concat!("ecrsync/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint,
            signer: Signer::new(credentials, region, SIGNING_SERVICE),
        })
    }

    /// The public ECR API endpoint of a region.
    pub fn default_endpoint(region: &str) -> Result<ServiceUrl, Error> {
        ServiceUrl::new(format!("https://api.ecr.{}.amazonaws.com", region))
    }

    /// Returns the endpoint this client is configured for.
    pub fn endpoint(&self) -> &ServiceUrl {
        &self.endpoint
    }

    /// Returns the signing region.
    pub fn region(&self) -> &str {
        self.signer.region()
    }

    /// Invoke one JSON 1.1 operation.
    #[instrument(skip(self, body), fields(endpoint = %self.endpoint))]
    pub(crate) async fn call<B, R>(&self, operation: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(|e| InvalidInputError::Other {
            message: format!("failed to encode {} request: {}", operation, e),
        })?;
        let target = format!("{}.{}", TARGET_PREFIX, operation);
        debug!(operation, "ECR call");
        trace!(?body, "request body");

        let host = self.endpoint.authority();
        let path = self.endpoint.as_url().path().to_string();
        let signed = self.signer.sign(
            "POST",
            &host,
            &path,
            &[("content-type", JSON_1_1), ("x-amz-target", &target)],
            &payload,
            Utc::now(),
        )?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_1_1));
        headers.insert(HeaderName::from_static("x-amz-target"), header_value(&target)?);
        headers.insert(
            HeaderName::from_static("x-amz-date"),
            header_value(&signed.amz_date)?,
        );
        if let Some(token) = &signed.security_token {
            headers.insert(
                HeaderName::from_static("x-amz-security-token"),
                header_value(token)?,
            );
        }
        headers.insert(
            reqwest::header::AUTHORIZATION,
            header_value(&signed.authorization)?,
        );

        let response = self
            .client
            .post(self.endpoint.as_str())
            .headers(headers)
            .body(payload)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "ECR response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            Err(Error::Protocol(self.parse_error_response(response).await))
        }
    }

    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();
        let header_code = response
            .headers()
            .get("x-amzn-errortype")
            .and_then(|v| v.to_str().ok())
            .map(crate::endpoints::error_code);

        match response.json::<EcrErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.code().or(header_code), body.message),
            Err(_) => ProtocolError::new(status, header_code, None),
        }
    }
}

fn header_value(value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|e| {
        InvalidInputError::Other {
            message: format!("invalid header value: {}", e),
        }
        .into()
    })
}

fn validate_region(region: &str) -> Result<(), Error> {
    let valid = !region.is_empty()
        && region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(InvalidInputError::Other {
            message: format!("invalid AWS region '{}'", region),
        }
        .into())
    }
}
