//! Playing-card and deck model with optional `no_std` support.
//!
//! The crate provides a [`Card`] value type with the pure rules card games
//! build on (point value, color, rank matching), and a [`Deck`] type that
//! stacks, shuffles, draws, and deals cards. [`SharedDeck`] wraps a deck for
//! hosts that share it between threads.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, deal_cards};
//!
//! let mut deck = Deck::new();
//! deck.shuffle_with_seed(42);
//!
//! let hands = deal_cards(&mut deck, 2, 5);
//! assert_eq!(hands[0].len(), 5);
//! assert_eq!(deck.len(), 42);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod shared;
mod sync;

// Re-export main types
pub use card::{
    Card, CardId, CardOverrides, Color, DECK_SIZE, Owner, Position, Rank, Suit, cards_match,
    standard_cards,
};
pub use deck::{Deck, create_shuffled_deck, deal_cards};
pub use error::{DeckError, ParseCardIdError, ParseRankError, ParseSuitError};
pub use shared::SharedDeck;
