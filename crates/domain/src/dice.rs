//! Dice notation value object.
//!
//! Weapon damage is expressed as `NdM` with an optional flat modifier,
//! e.g. `1d8`, `2d6+1`, `1d4-1`. Die sizes are restricted to the
//! physical set a table actually has.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Die sizes accepted in damage expressions.
pub const DIE_SIZES: [u32; 8] = [2, 4, 6, 8, 10, 12, 20, 100];

/// A parsed dice expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiceNotation {
    pub count: u32,
    pub sides: u32,
    pub modifier: i32,
}

/// Error when parsing dice notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiceError {
    /// Expression does not match `NdM[+K|-K]`.
    #[error("malformed dice expression {0:?}")]
    Malformed(String),

    /// Die count must be at least 1.
    #[error("die count must be at least 1")]
    ZeroCount,

    /// Not a standard die size.
    #[error("nonstandard die size d{0}")]
    BadSides(u32),
}

impl DiceNotation {
    /// Parse and validate an expression such as `2d6+1`.
    pub fn parse(raw: &str) -> Result<Self, DiceError> {
        let raw = raw.trim();
        let malformed = || DiceError::Malformed(raw.to_string());

        let (count_str, rest) = raw.split_once('d').ok_or_else(malformed)?;
        let (sides_str, modifier) = match rest.find(['+', '-']) {
            Some(idx) => {
                let modifier: i32 = rest[idx..].parse().map_err(|_| malformed())?;
                (&rest[..idx], modifier)
            }
            None => (rest, 0),
        };

        let count: u32 = count_str.parse().map_err(|_| malformed())?;
        let sides: u32 = sides_str.parse().map_err(|_| malformed())?;

        if count == 0 {
            return Err(DiceError::ZeroCount);
        }
        if !DIE_SIZES.contains(&sides) {
            return Err(DiceError::BadSides(sides));
        }

        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Smallest possible roll.
    pub fn min_roll(&self) -> i32 {
        self.count as i32 + self.modifier
    }

    /// Largest possible roll.
    pub fn max_roll(&self) -> i32 {
        (self.count * self.sides) as i32 + self.modifier
    }
}

impl FromStr for DiceNotation {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DiceNotation {
    type Error = DiceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DiceNotation> for String {
    fn from(dice: DiceNotation) -> Self {
        dice.to_string()
    }
}

impl std::fmt::Display for DiceNotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier.cmp(&0) {
            std::cmp::Ordering::Greater => write!(f, "+{}", self.modifier),
            std::cmp::Ordering::Less => write!(f, "{}", self.modifier),
            std::cmp::Ordering::Equal => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let dice = DiceNotation::parse("1d8").unwrap();
        assert_eq!((dice.count, dice.sides, dice.modifier), (1, 8, 0));
    }

    #[test]
    fn test_parse_with_modifier() {
        assert_eq!(DiceNotation::parse("2d6+1").unwrap().modifier, 1);
        assert_eq!(DiceNotation::parse("1d4-1").unwrap().modifier, -1);
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["1d8", "2d6+1", "1d4-1", "10d100"] {
            assert_eq!(DiceNotation::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_roll_bounds() {
        let dice = DiceNotation::parse("2d6+1").unwrap();
        assert_eq!(dice.min_roll(), 3);
        assert_eq!(dice.max_roll(), 13);
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(DiceNotation::parse("d8").is_err());
        assert!(DiceNotation::parse("1d").is_err());
        assert!(DiceNotation::parse("one d eight").is_err());
        assert_eq!(DiceNotation::parse("0d6"), Err(DiceError::ZeroCount));
        assert_eq!(DiceNotation::parse("1d7"), Err(DiceError::BadSides(7)));
    }
}
