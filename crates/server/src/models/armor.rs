use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::filters::{NumberLookup, TextLookup};

/// A suit of armor. `ac_display` is derived from the AC columns.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Armor {
    pub key: String,
    pub document_key: String,

    /// Localized display name (null if untranslated).
    pub name: Option<String>,

    pub grants_stealth_disadvantage: bool,
    /// Minimum Strength score to avoid a speed penalty; null when
    /// unrestricted.
    pub strength_score_required: Option<i32>,
    pub ac_base: i32,
    /// Whether the wearer's Dexterity modifier is added to AC.
    pub ac_add_dexmod: bool,
    /// Cap on the added Dexterity modifier; null means uncapped.
    pub ac_cap_dexmod: Option<i32>,
    /// Human-readable AC formula, e.g. "12 + Dex modifier (max 2)".
    pub ac_display: String,
}

/// The `armor` row plus its localized name, before display derivation.
#[derive(Debug, Clone, FromRow)]
pub struct ArmorRow {
    pub key: String,
    pub document_key: String,
    pub name: Option<String>,
    pub grants_stealth_disadvantage: bool,
    pub strength_score_required: Option<i32>,
    pub ac_base: i32,
    pub ac_add_dexmod: bool,
    pub ac_cap_dexmod: Option<i32>,
}

impl From<ArmorRow> for Armor {
    fn from(row: ArmorRow) -> Self {
        let ac_display = match (row.ac_add_dexmod, row.ac_cap_dexmod) {
            (false, _) => row.ac_base.to_string(),
            (true, None) => format!("{} + Dex modifier", row.ac_base),
            (true, Some(cap)) => format!("{} + Dex modifier (max {})", row.ac_base, cap),
        };

        Armor {
            key: row.key,
            document_key: row.document_key,
            name: row.name,
            grants_stealth_disadvantage: row.grants_stealth_disadvantage,
            strength_score_required: row.strength_score_required,
            ac_base: row.ac_base,
            ac_add_dexmod: row.ac_add_dexmod,
            ac_cap_dexmod: row.ac_cap_dexmod,
            ac_display,
        }
    }
}

/// Typed filter for armor lists.
#[derive(Debug, Clone, Default)]
pub struct ArmorFilter {
    pub key: TextLookup,
    pub document_key: TextLookup,
    pub grants_stealth_disadvantage: Option<bool>,
    pub strength_score_required: NumberLookup<i64>,
    pub ac_base: NumberLookup<i64>,
    pub ac_add_dexmod: Option<bool>,
    pub ac_cap_dexmod: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ac_base: i32, add: bool, cap: Option<i32>) -> ArmorRow {
        ArmorRow {
            key: "leather".to_string(),
            document_key: "srd-2014".to_string(),
            name: Some("Leather".to_string()),
            grants_stealth_disadvantage: false,
            strength_score_required: None,
            ac_base,
            ac_add_dexmod: add,
            ac_cap_dexmod: cap,
        }
    }

    #[test]
    fn test_ac_display_fixed() {
        assert_eq!(Armor::from(row(16, false, None)).ac_display, "16");
    }

    #[test]
    fn test_ac_display_with_dex() {
        assert_eq!(
            Armor::from(row(11, true, None)).ac_display,
            "11 + Dex modifier"
        );
    }

    #[test]
    fn test_ac_display_with_capped_dex() {
        assert_eq!(
            Armor::from(row(12, true, Some(2))).ac_display,
            "12 + Dex modifier (max 2)"
        );
    }
}
