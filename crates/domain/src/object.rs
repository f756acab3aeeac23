//! Physical object profile.
//!
//! Any piece of matter in the game world (an item, a weapon, a suit of
//! armor) has a size category, a weight, an armor class and hit points.
//! Sizes are enumerated so they sort correctly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A reasonable maximum for armor class.
pub const ARMOR_CLASS_MAXIMUM: i32 = 100;

/// A reasonable maximum for hit points.
pub const HIT_POINT_MAXIMUM: i32 = 10_000;

/// Size category of an object, ordered smallest to largest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    #[default]
    Tiny = 1,
    Small = 2,
    Medium = 3,
    Large = 4,
    Huge = 5,
    Gargantuan = 6,
}

impl Size {
    /// Get the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Tiny => "Tiny",
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
            Size::Huge => "Huge",
            Size::Gargantuan => "Gargantuan",
        }
    }

    /// Integer rank of this size (1 = Tiny .. 6 = Gargantuan).
    pub fn rank(&self) -> i32 {
        *self as i32
    }

    /// Convert an integer rank back into a size.
    pub fn from_rank(rank: i32) -> Result<Self, ProfileError> {
        match rank {
            1 => Ok(Size::Tiny),
            2 => Ok(Size::Small),
            3 => Ok(Size::Medium),
            4 => Ok(Size::Large),
            5 => Ok(Size::Huge),
            6 => Ok(Size::Gargantuan),
            _ => Err(ProfileError::SizeOutOfRange(rank)),
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when validating an object profile.
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    /// Size rank outside 1..=6.
    #[error("size rank {0} outside 1..=6")]
    SizeOutOfRange(i32),

    /// Weight must be non-negative and finite.
    #[error("weight {0} must be a non-negative number")]
    NegativeWeight(f64),

    /// Armor class outside 0..=100.
    #[error("armor class {0} outside 0..={ARMOR_CLASS_MAXIMUM}")]
    ArmorClassOutOfRange(i32),

    /// Hit points outside 0..=10000.
    #[error("hit points {0} outside 0..={HIT_POINT_MAXIMUM}")]
    HitPointsOutOfRange(i32),
}

/// Validated physical profile shared by items, weapons and armor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectProfile {
    pub size: Size,
    pub weight: f64,
    pub armor_class: i32,
    pub hit_points: i32,
}

impl ObjectProfile {
    /// Create a profile with validation.
    pub fn new(
        size: Size,
        weight: f64,
        armor_class: i32,
        hit_points: i32,
    ) -> Result<Self, ProfileError> {
        if !(weight >= 0.0 && weight.is_finite()) {
            return Err(ProfileError::NegativeWeight(weight));
        }
        if !(0..=ARMOR_CLASS_MAXIMUM).contains(&armor_class) {
            return Err(ProfileError::ArmorClassOutOfRange(armor_class));
        }
        if !(0..=HIT_POINT_MAXIMUM).contains(&hit_points) {
            return Err(ProfileError::HitPointsOutOfRange(hit_points));
        }
        Ok(Self {
            size,
            weight,
            armor_class,
            hit_points,
        })
    }
}

impl Default for ObjectProfile {
    /// An unspecified object: tiny, weightless, AC 0, 0 HP.
    fn default() -> Self {
        Self {
            size: Size::Tiny,
            weight: 0.0,
            armor_class: 0,
            hit_points: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_rank_round_trip() {
        for rank in 1..=6 {
            assert_eq!(Size::from_rank(rank).unwrap().rank(), rank);
        }
        assert!(Size::from_rank(0).is_err());
        assert!(Size::from_rank(7).is_err());
    }

    #[test]
    fn test_sizes_sort() {
        assert!(Size::Tiny < Size::Medium);
        assert!(Size::Huge < Size::Gargantuan);
    }

    #[test]
    fn test_valid_profile() {
        let profile = ObjectProfile::new(Size::Medium, 3.0, 11, 20).unwrap();
        assert_eq!(profile.size, Size::Medium);
    }

    #[test]
    fn test_rejects_negative_weight() {
        assert_eq!(
            ObjectProfile::new(Size::Tiny, -1.0, 0, 0),
            Err(ProfileError::NegativeWeight(-1.0))
        );
        assert!(ObjectProfile::new(Size::Tiny, f64::NAN, 0, 0).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_ac_and_hp() {
        assert_eq!(
            ObjectProfile::new(Size::Tiny, 0.0, 101, 0),
            Err(ProfileError::ArmorClassOutOfRange(101))
        );
        assert_eq!(
            ObjectProfile::new(Size::Tiny, 0.0, 0, 10_001),
            Err(ProfileError::HitPointsOutOfRange(10_001))
        );
    }
}
