//! Free-text place name entered by the user

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A trimmed, non-empty place name such as "Boston" or "Paris, France"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlaceName(String);

impl PlaceName {
    /// Create a place name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the trimmed name is empty.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("place name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The place name as entered, without surrounding whitespace
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlaceName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlaceName> for String {
    fn from(value: PlaceName) -> Self {
        value.0
    }
}

impl AsRef<str> for PlaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PlaceName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
