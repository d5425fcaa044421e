//! Registry identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated registry identifier.
///
/// ECR registries are identified by the owning AWS account id, which is
/// always twelve ASCII digits.
///
/// # Example
///
/// ```
/// use ecrsync_core::RegistryId;
///
/// let id = RegistryId::new("123456789012").unwrap();
/// assert_eq!(id.as_str(), "123456789012");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistryId(String);

impl RegistryId {
    /// Create a new registry id, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is exactly twelve digits.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the registry id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.len() != 12 {
            return Err(InvalidInputError::RegistryId {
                value: s.to_string(),
                reason: "must be exactly 12 digits".to_string(),
            }
            .into());
        }

        if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(InvalidInputError::RegistryId {
                value: s.to_string(),
                reason: format!("contains invalid character '{}'", c),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RegistryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RegistryId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RegistryId> for String {
    fn from(id: RegistryId) -> Self {
        id.0
    }
}

impl AsRef<str> for RegistryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
