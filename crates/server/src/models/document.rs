use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::filters::TextLookup;

/// A source publication: the provenance anchor every piece of content
/// links back to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Document {
    pub key: String,
    pub name: String,
    pub desc: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub permalink: Option<String>,
    pub publisher_key: String,
    pub ruleset_key: String,
    pub license_key: String,
}

/// The company or group that published a document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Publisher {
    pub key: String,
    pub name: String,
    pub url: Option<String>,
}

/// The license a document's content is distributed under.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct License {
    pub key: String,
    pub name: String,
    /// Full license text, Markdown.
    pub desc: Option<String>,
    pub url: Option<String>,
}

/// The game system a document belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ruleset {
    pub key: String,
    pub name: String,
    pub desc: Option<String>,
    /// Prefix prepended when rendering content keys from this ruleset.
    pub content_prefix: Option<String>,
}

/// Exact-match filter for document lists; every scalar column is
/// filterable.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub key: TextLookup,
    pub name: TextLookup,
    pub author: TextLookup,
    pub permalink: TextLookup,
    pub publisher_key: TextLookup,
    pub ruleset_key: TextLookup,
    pub license_key: TextLookup,
}

/// Exact-match filter for publisher lists.
#[derive(Debug, Clone, Default)]
pub struct PublisherFilter {
    pub key: TextLookup,
    pub name: TextLookup,
    pub url: TextLookup,
}

/// Exact-match filter for license lists.
#[derive(Debug, Clone, Default)]
pub struct LicenseFilter {
    pub key: TextLookup,
    pub name: TextLookup,
    pub url: TextLookup,
}

/// Exact-match filter for ruleset lists.
#[derive(Debug, Clone, Default)]
pub struct RulesetFilter {
    pub key: TextLookup,
    pub name: TextLookup,
    pub content_prefix: TextLookup,
}
