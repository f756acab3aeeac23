use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::filters::{NumberLookup, TextLookup};

/// A piece of equipment: mundane gear, or a magic item when `rarity` is
/// set. `name` and `desc` are resolved from `item_text` for the
/// requested language and may be null when no translation exists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    pub key: String,
    pub document_key: String,

    /// Localized display name (null if untranslated).
    pub name: Option<String>,
    /// Localized description, Markdown (null if untranslated).
    pub desc: Option<String>,

    /// Equipment category, e.g. "weapon", "armor", "adventuring-gear".
    pub category: String,
    /// Cost in gold pieces.
    pub cost: f64,
    /// Magic item rarity; null for mundane equipment.
    pub rarity: Option<String>,
    pub requires_attunement: bool,
    /// Derived: true iff `rarity` is non-null.
    pub is_magic_item: bool,

    /// Size rank, 1 (Tiny) through 6 (Gargantuan).
    pub size: i32,
    /// Weight in pounds.
    pub weight: f64,
    pub armor_class: i32,
    pub hit_points: i32,
}

/// Typed filter for item lists, built by the handler from the raw
/// `field__lookup` query parameters.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub key: TextLookup,
    pub cost: NumberLookup<f64>,
    pub weight: NumberLookup<f64>,
    pub rarity: TextLookup,
    pub requires_attunement: Option<bool>,
    pub category: TextLookup,
    pub document_key: TextLookup,
    pub is_magic_item: Option<bool>,
}
