//! Item rarity value object.
//!
//! The six-step magic item ladder. An item with a rarity is a magic
//! item; mundane equipment has none.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Magic item rarity, ordered from most to least common.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Legendary,
    Artifact,
}

/// Error when parsing a rarity string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown rarity {0:?}")]
pub struct RarityError(pub String);

impl Rarity {
    /// Get the string representation used in the API and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::VeryRare => "very-rare",
            Rarity::Legendary => "legendary",
            Rarity::Artifact => "artifact",
        }
    }

    /// All rarities, in ladder order.
    pub fn all() -> [Rarity; 6] {
        [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::VeryRare,
            Rarity::Legendary,
            Rarity::Artifact,
        ]
    }
}

impl FromStr for Rarity {
    type Err = RarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "uncommon" => Ok(Rarity::Uncommon),
            "rare" => Ok(Rarity::Rare),
            "very-rare" | "very rare" => Ok(Rarity::VeryRare),
            "legendary" => Ok(Rarity::Legendary),
            "artifact" => Ok(Rarity::Artifact),
            other => Err(RarityError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for rarity in Rarity::all() {
            assert_eq!(rarity.as_str().parse::<Rarity>().unwrap(), rarity);
        }
    }

    #[test]
    fn test_parse_accepts_spaced_very_rare() {
        assert_eq!("Very Rare".parse::<Rarity>().unwrap(), Rarity::VeryRare);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("mythic".parse::<Rarity>().is_err());
    }

    #[test]
    fn test_ladder_order() {
        assert!(Rarity::Common < Rarity::Legendary);
        assert!(Rarity::Legendary < Rarity::Artifact);
    }
}
