//! Error types for ecrsync.
//!
//! One error type is shared by the core and both HTTP collaborators, with
//! explicit variants for transport, authentication, protocol and input
//! validation failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for ecrsync operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (rejected credentials, missing token).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Protocol errors (non-success responses, malformed bodies).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (registry id, blueprint, URL format).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The service rejected the supplied credentials.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// A token response did not carry a usable token.
    #[error("missing access token in response")]
    MissingToken,
}

/// Protocol-level errors from service responses.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Service error code (if present).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
            || self.status == 403
            || self.error.as_deref() == Some("UnrecognizedClientException")
            || self.error.as_deref() == Some("InvalidSignatureException")
            || self.error.as_deref() == Some("ExpiredTokenException")
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid registry id (AWS account id).
    #[error("invalid registry id '{value}': {reason}")]
    RegistryId { value: String, reason: String },

    /// Invalid blueprint identifier.
    #[error("invalid blueprint '{value}': {reason}")]
    Blueprint { value: String, reason: String },

    /// Invalid service URL.
    #[error("invalid service URL '{value}': {reason}")]
    ServiceUrl { value: String, reason: String },

    /// A timestamp outside the representable range.
    #[error("invalid timestamp '{value}': {reason}")]
    Timestamp { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_display_includes_code_and_message() {
        let err = ProtocolError::new(
            400,
            Some("RepositoryNotFoundException".to_string()),
            Some("repository 'x' does not exist".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "HTTP 400 [RepositoryNotFoundException]: repository 'x' does not exist"
        );
    }

    #[test]
    fn protocol_error_display_status_only() {
        let err = ProtocolError::new(502, None, None);
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn auth_errors_are_detected() {
        assert!(ProtocolError::new(401, None, None).is_auth_error());
        assert!(
            ProtocolError::new(400, Some("ExpiredTokenException".to_string()), None)
                .is_auth_error()
        );
        assert!(!ProtocolError::new(500, None, None).is_auth_error());
    }
}
