//! Service base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL for an HTTP service (registry endpoint or catalog API).
///
/// The URL must be absolute and use HTTPS. Plain HTTP is accepted only for
/// localhost so tests can point the clients at a local mock server.
///
/// # Example
///
/// ```
/// use ecrsync_core::ServiceUrl;
///
/// let api = ServiceUrl::new("https://api.getport.io/v1/").unwrap();
/// assert_eq!(api.join("auth/access_token"),
///            "https://api.getport.io/v1/auth/access_token");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceUrl(Url);

impl ServiceUrl {
    /// Create a new service URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServiceUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL of `path` below this base.
    pub fn join(&self, path: &str) -> String {
        // The URL crate keeps a trailing slash on root paths
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the `host[:port]` authority, as sent in the `Host` header.
    pub fn authority(&self) -> String {
        match (self.0.host_str(), self.0.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            _ => String::new(),
        }
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServiceUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServiceUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServiceUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ServiceUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let url = ServiceUrl::new("https://api.ecr.eu-west-1.amazonaws.com").unwrap();
        assert_eq!(url.host(), Some("api.ecr.eu-west-1.amazonaws.com"));
        assert_eq!(url.authority(), "api.ecr.eu-west-1.amazonaws.com");
    }

    #[test]
    fn valid_localhost_http() {
        let url = ServiceUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.authority(), "127.0.0.1:8080");
    }

    #[test]
    fn join_handles_slashes() {
        let with_path = ServiceUrl::new("https://api.getport.io/v1").unwrap();
        assert_eq!(
            with_path.join("/blueprints/ecrImage/entities"),
            "https://api.getport.io/v1/blueprints/ecrImage/entities"
        );

        let root = ServiceUrl::new("https://api.getport.io/").unwrap();
        assert_eq!(root.join("v1"), "https://api.getport.io/v1");
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ServiceUrl::new("http://api.getport.io").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ServiceUrl::new("/v1/entities").is_err());
    }

    #[test]
    fn rejects_query_string() {
        assert!(ServiceUrl::new("https://api.getport.io/v1?upsert=true").is_err());
    }
}
