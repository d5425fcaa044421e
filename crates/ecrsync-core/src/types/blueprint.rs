//! Catalog blueprint identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated catalog blueprint identifier.
///
/// A blueprint names the catalog schema an entity belongs to. It is placed
/// verbatim into the upsert URL path, so only the characters the catalog
/// accepts for identifiers are allowed: `A-Z a-z 0-9 @ _ = -`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Blueprint(String);

impl Blueprint {
    /// Blueprint for repository entities.
    pub const REPOSITORY: &'static str = "ecrRepository";

    /// Blueprint for image entities.
    pub const IMAGE: &'static str = "ecrImage";

    /// Create a new blueprint identifier, validating the format.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Wrap an identifier already known to be valid.
    pub(crate) fn from_static(s: &'static str) -> Self {
        Self(s.to_string())
    }

    /// Returns the blueprint identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::Blueprint {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        for c in s.chars() {
            if !c.is_ascii_alphanumeric() && !matches!(c, '@' | '_' | '=' | '-') {
                return Err(InvalidInputError::Blueprint {
                    value: s.to_string(),
                    reason: format!("contains invalid character '{}'", c),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Blueprint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Blueprint {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Blueprint> for String {
    fn from(blueprint: Blueprint) -> Self {
        blueprint.0
    }
}

impl AsRef<str> for Blueprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
