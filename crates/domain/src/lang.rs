//! Language code value object.
//!
//! Localized text rows are keyed by a short language code such as `en`,
//! `fr` or `pt-br`. This is a loose BCP 47 subset: a 2-3 letter primary
//! tag with an optional single hyphenated subtag.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated lowercase language code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

/// Error when validating a language code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LangError {
    /// Code cannot be empty.
    #[error("language code cannot be empty")]
    Empty,

    /// Code does not match the expected `xx` or `xx-yy` shape.
    #[error("malformed language code {0:?}")]
    Malformed(String),
}

impl LanguageCode {
    /// Validate and construct a language code. Input is lowercased.
    pub fn new(raw: &str) -> Result<Self, LangError> {
        let raw = raw.trim().to_ascii_lowercase();
        if raw.is_empty() {
            return Err(LangError::Empty);
        }

        let mut parts = raw.split('-');
        let primary = parts.next().unwrap_or("");
        let subtag = parts.next();
        let rest = parts.next();

        let tag_ok = |t: &str| {
            (2..=3).contains(&t.len()) && t.chars().all(|c| c.is_ascii_lowercase())
        };

        if !tag_ok(primary) || rest.is_some() || subtag.is_some_and(|t| !tag_ok(t)) {
            return Err(LangError::Malformed(raw));
        }

        Ok(Self(raw))
    }

    /// The default language used when a request does not specify one.
    pub fn english() -> Self {
        Self("en".to_string())
    }

    /// Borrow the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for LanguageCode {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = LangError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<LanguageCode> for String {
    fn from(lang: LanguageCode) -> Self {
        lang.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_codes() {
        assert_eq!(LanguageCode::new("en").unwrap().as_str(), "en");
        assert_eq!(LanguageCode::new("FR").unwrap().as_str(), "fr");
    }

    #[test]
    fn test_subtag() {
        assert_eq!(LanguageCode::new("pt-br").unwrap().as_str(), "pt-br");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(LanguageCode::new("e").is_err());
        assert!(LanguageCode::new("engl").is_err());
        assert!(LanguageCode::new("en-us-x").is_err());
        assert!(LanguageCode::new("e1").is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(LanguageCode::default().as_str(), "en");
    }
}
