//! Content key value object.
//!
//! Every piece of reference content (item, weapon, document, ...) is
//! addressed by a slug key such as `longsword` or `srd-2014`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum key length, matching the storage column width.
pub const MAX_KEY_LEN: usize = 100;

/// A validated content slug: lowercase ASCII letters, digits and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentKey(String);

/// Error when validating a content key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Key cannot be empty.
    #[error("key cannot be empty")]
    Empty,

    /// Key exceeds the maximum length.
    #[error("key exceeds {MAX_KEY_LEN} characters")]
    TooLong,

    /// Key contains a character outside `[a-z0-9-]`.
    #[error("key contains invalid character {0:?}")]
    InvalidChar(char),
}

impl ContentKey {
    /// Validate and construct a key.
    pub fn new(raw: &str) -> Result<Self, KeyError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(KeyError::Empty);
        }
        if raw.len() > MAX_KEY_LEN {
            return Err(KeyError::TooLong);
        }
        if let Some(c) = raw
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(KeyError::InvalidChar(c));
        }
        Ok(Self(raw.to_string()))
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContentKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ContentKey {
    type Error = KeyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<ContentKey> for String {
    fn from(key: ContentKey) -> Self {
        key.0
    }
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        assert!(ContentKey::new("longsword").is_ok());
        assert!(ContentKey::new("potion-of-healing").is_ok());
        assert!(ContentKey::new("srd-2014").is_ok());
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(ContentKey::new("   "), Err(KeyError::Empty));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            ContentKey::new("Longsword"),
            Err(KeyError::InvalidChar('L'))
        );
        assert_eq!(
            ContentKey::new("long sword"),
            Err(KeyError::InvalidChar(' '))
        );
    }

    #[test]
    fn test_too_long() {
        let raw = "a".repeat(MAX_KEY_LEN + 1);
        assert_eq!(ContentKey::new(&raw), Err(KeyError::TooLong));
    }

    #[test]
    fn test_trims_whitespace() {
        let key = ContentKey::new(" longsword ").unwrap();
        assert_eq!(key.as_str(), "longsword");
    }
}
