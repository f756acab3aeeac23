//! Domain layer errors.

use thiserror::Error;

/// Domain layer error type.
///
/// Specific value objects expose their own error enums; this type is the
/// umbrella used when a caller only needs "valid or not".
#[derive(Debug, Error)]
pub enum DomainError {
    /// A slug key failed validation.
    #[error("invalid content key: {0}")]
    Key(#[from] crate::key::KeyError),

    /// A language code failed validation.
    #[error("invalid language code: {0}")]
    Lang(#[from] crate::lang::LangError),

    /// An object profile field was out of range.
    #[error("invalid object profile: {0}")]
    Profile(#[from] crate::object::ProfileError),

    /// An unrecognized rarity string.
    #[error("invalid rarity: {0}")]
    Rarity(#[from] crate::rarity::RarityError),

    /// A dice expression failed to parse.
    #[error("invalid dice notation: {0}")]
    Dice(#[from] crate::dice::DiceError),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
