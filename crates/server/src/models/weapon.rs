use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::filters::{NumberLookup, TextLookup};

/// A weapon: damage expression plus the property flags that drive
/// rules interactions. `name` is resolved from `weapon_text` for the
/// requested language.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Weapon {
    pub key: String,
    pub document_key: String,

    /// Localized display name (null if untranslated).
    pub name: Option<String>,

    /// Damage type dealt, e.g. "slashing".
    pub damage_type: String,
    /// Damage dice notation, e.g. "1d8".
    pub damage_dice: String,
    /// Damage dice when wielded two-handed; null for non-versatile
    /// weapons.
    pub versatile_dice: Option<String>,

    /// Melee reach in feet.
    pub range_reach: i32,
    /// Normal ranged distance in feet (0 for pure melee weapons).
    pub range_normal: i32,
    /// Long ranged distance in feet, at disadvantage.
    pub range_long: i32,

    pub is_finesse: bool,
    pub is_thrown: bool,
    pub is_two_handed: bool,
    pub requires_ammunition: bool,
    pub requires_loading: bool,
    pub is_heavy: bool,
    pub is_light: bool,
    pub is_lance: bool,
    pub is_net: bool,
    pub is_simple: bool,
    pub is_improvised: bool,
}

/// Typed filter for weapon lists.
#[derive(Debug, Clone, Default)]
pub struct WeaponFilter {
    pub key: TextLookup,
    pub document_key: TextLookup,
    pub damage_type: TextLookup,
    pub damage_dice: TextLookup,
    pub versatile_dice: TextLookup,
    pub range_reach: NumberLookup<i64>,
    pub range_normal: NumberLookup<i64>,
    pub range_long: NumberLookup<i64>,
    pub is_finesse: Option<bool>,
    pub is_thrown: Option<bool>,
    pub is_two_handed: Option<bool>,
    pub requires_ammunition: Option<bool>,
    pub requires_loading: Option<bool>,
    pub is_heavy: Option<bool>,
    pub is_light: Option<bool>,
    pub is_lance: Option<bool>,
    pub is_net: Option<bool>,
    pub is_simple: Option<bool>,
    pub is_improvised: Option<bool>,
}
