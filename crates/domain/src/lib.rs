//! Domain layer for grimoire.
//!
//! This crate contains the validated value objects shared by the server
//! layer: content keys (slugs), language codes, the physical object
//! profile, item rarity and dice notation. It is independent of external
//! concerns like databases or web frameworks.
//!
//! Each value object validates on construction and carries its own
//! `thiserror` error type, so invalid reference data is rejected before
//! it ever reaches storage.

pub mod dice;
pub mod error;
pub mod key;
pub mod lang;
pub mod object;
pub mod rarity;

pub use dice::DiceNotation;
pub use error::{DomainError, DomainResult};
pub use key::ContentKey;
pub use lang::LanguageCode;
pub use object::{ObjectProfile, Size};
pub use rarity::Rarity;
