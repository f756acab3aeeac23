use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::filters::TextLookup;

/// A named grouping of items (an equipment pack, a themed treasure
/// hoard). Serialized with the keys of its member items.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemSet {
    pub key: String,
    pub document_key: String,
    pub name: String,
    pub desc: Option<String>,
    /// Keys of the member items, sorted.
    pub items: Vec<String>,
}

/// The `item_set` row before its membership list is attached.
#[derive(Debug, Clone, FromRow)]
pub struct ItemSetRow {
    pub key: String,
    pub document_key: String,
    pub name: String,
    pub desc: Option<String>,
}

impl ItemSetRow {
    pub fn into_set(self, items: Vec<String>) -> ItemSet {
        ItemSet {
            key: self.key,
            document_key: self.document_key,
            name: self.name,
            desc: self.desc,
            items,
        }
    }
}

/// Typed filter for item set lists.
#[derive(Debug, Clone, Default)]
pub struct ItemSetFilter {
    pub key: TextLookup,
    pub name: TextLookup,
    pub document_key: TextLookup,
}
