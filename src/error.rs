//! Error types for parsing and validated deck construction.

use thiserror::Error;

use crate::card::CardId;

/// The text is not a suit name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown suit")]
pub struct ParseSuitError;

/// The text is not a rank label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown rank")]
pub struct ParseRankError;

/// Errors that can occur when parsing a card id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardIdError {
    /// The id has no `-` between suit and rank.
    #[error("card id is missing the `-` separator")]
    MissingSeparator,
    /// The suit part is not a suit name.
    #[error("invalid suit in card id")]
    Suit(#[from] ParseSuitError),
    /// The rank part is not a rank label.
    #[error("invalid rank in card id")]
    Rank(#[from] ParseRankError),
}

/// Errors that can occur when building a deck from existing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(CardId),
}
