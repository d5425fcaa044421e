//! AWS Signature Version 4 request signing.
//!
//! Only what the registry client needs: header-based signing of a request
//! with no query string. The request path is signed as given.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use ecrsync_core::error::{Error, InvalidInputError};

use crate::credentials::AwsCredentials;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Signs requests for one service in one region.
#[derive(Debug, Clone)]
pub(crate) struct Signer {
    credentials: AwsCredentials,
    region: String,
    service: &'static str,
}

/// Headers to attach to a signed request.
#[derive(Debug)]
pub(crate) struct SignedHeaders {
    pub amz_date: String,
    pub security_token: Option<String>,
    pub authorization: String,
}

impl Signer {
    pub fn new(credentials: AwsCredentials, region: impl Into<String>, service: &'static str) -> Self {
        Self {
            credentials,
            region: region.into(),
            service,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Sign a request.
    ///
    /// `headers` are the caller's headers besides `host`, `x-amz-date` and
    /// `x-amz-security-token`, which the signer adds itself.
    pub fn sign(
        &self,
        method: &str,
        host: &str,
        path: &str,
        headers: &[(&str, &str)],
        body: &[u8],
        now: DateTime<Utc>,
    ) -> Result<SignedHeaders, Error> {
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let date = now.format("%Y%m%d").to_string();
        let security_token = self.credentials.session_token().map(str::to_string);

        let mut canonical: Vec<(String, String)> = headers
            .iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value.trim().to_string()))
            .collect();
        canonical.push(("host".to_string(), host.to_string()));
        canonical.push(("x-amz-date".to_string(), amz_date.clone()));
        if let Some(token) = &security_token {
            canonical.push(("x-amz-security-token".to_string(), token.clone()));
        }
        canonical.sort();

        let signed_headers = canonical
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(";");
        let canonical_headers: String = canonical
            .iter()
            .map(|(name, value)| format!("{}:{}\n", name, value))
            .collect();

        let canonical_request = format!(
            "{}\n{}\n\n{}\n{}\n{}",
            method,
            path,
            canonical_headers,
            signed_headers,
            sha256_hex(body)
        );

        let scope = format!("{}/{}/{}/aws4_request", date, self.region, self.service);
        let string_to_sign = format!(
            "{}\n{}\n{}\n{}",
            ALGORITHM,
            amz_date,
            scope,
            sha256_hex(canonical_request.as_bytes())
        );

        let key = self.signing_key(&date)?;
        let signature = hex::encode(hmac(&key, string_to_sign.as_bytes())?);

        let authorization = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM,
            self.credentials.access_key_id(),
            scope,
            signed_headers,
            signature
        );

        Ok(SignedHeaders {
            amz_date,
            security_token,
            authorization,
        })
    }

    fn signing_key(&self, date: &str) -> Result<Vec<u8>, Error> {
        let secret = format!("AWS4{}", self.credentials.secret_access_key());
        let k_date = hmac(secret.as_bytes(), date.as_bytes())?;
        let k_region = hmac(&k_date, self.region.as_bytes())?;
        let k_service = hmac(&k_region, self.service.as_bytes())?;
        hmac(&k_service, b"aws4_request")
    }
}

fn hmac(key: &[u8], message: &[u8]) -> Result<Vec<u8>, Error> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| InvalidInputError::Other {
        message: format!("invalid signing key: {}", e),
    })?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

pub(crate) fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
