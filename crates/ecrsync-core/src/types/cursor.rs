//! Page cursor type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque continuation token returned by a paginated listing call.
///
/// Cursors are passed back to the service exactly as received. They are
/// never parsed, combined or modified.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a token received from the service.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Interpret an optional wire token. An empty token means no more pages.
    pub fn from_token(token: Option<String>) -> Option<Self> {
        token.filter(|t| !t.is_empty()).map(Self)
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_absent() {
        assert_eq!(Cursor::from_token(Some(String::new())), None);
        assert_eq!(Cursor::from_token(None), None);
    }

    #[test]
    fn token_is_kept_verbatim() {
        let cursor = Cursor::from_token(Some("ukD72mdD/mC8b5xV+token==".to_string())).unwrap();
        assert_eq!(cursor.as_str(), "ukD72mdD/mC8b5xV+token==");
    }
}
