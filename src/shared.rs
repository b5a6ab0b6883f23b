//! A deck that can be shared between threads.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::deck::{Deck, deal_cards};
use crate::sync::Mutex;

/// A [`Deck`] behind a lock.
///
/// Every method locks once for its whole duration, so each call is a single
/// critical section. Use [`SharedDeck::with`] to run several deck operations
/// under one lock.
///
/// ```
/// use deckrs::SharedDeck;
///
/// let deck = SharedDeck::default();
/// deck.shuffle_with_seed(3);
/// let hands = deck.deal(4, 5);
/// assert_eq!(hands.len(), 4);
/// assert_eq!(deck.len(), 32);
/// ```
pub struct SharedDeck {
    deck: Mutex<Deck>,
}

impl SharedDeck {
    /// Wraps a deck.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Runs `f` with exclusive access to the deck.
    pub fn with<T>(&self, f: impl FnOnce(&mut Deck) -> T) -> T {
        f(&mut *self.deck.lock())
    }

    /// Shuffles the deck with `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) {
        self.deck.lock().shuffle(rng);
    }

    /// Shuffles the deck with a generator seeded from `seed`.
    pub fn shuffle_with_seed(&self, seed: u64) {
        self.deck.lock().shuffle_with_seed(seed);
    }

    /// Removes and returns the top card.
    pub fn draw(&self) -> Option<Card> {
        self.deck.lock().draw()
    }

    /// Draws up to `count` cards.
    pub fn draw_multiple(&self, count: usize) -> Vec<Card> {
        self.deck.lock().draw_multiple(count)
    }

    /// Returns a copy of the top card.
    pub fn peek(&self) -> Option<Card> {
        self.deck.lock().peek().copied()
    }

    /// Returns the number of cards.
    pub fn len(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns whether the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.deck.lock().is_empty()
    }

    /// Resets to the canonical deck.
    pub fn reset(&self) {
        self.deck.lock().reset();
    }

    /// Puts a card on top.
    pub fn add_to_top(&self, card: Card) {
        self.deck.lock().add_to_top(card);
    }

    /// Puts a card at the bottom.
    pub fn add_to_bottom(&self, card: Card) {
        self.deck.lock().add_to_bottom(card);
    }

    /// Puts each card on top in turn.
    pub fn add_cards<I>(&self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.deck.lock().add_cards(cards);
    }

    /// Returns a copy of the cards, bottom first.
    pub fn snapshot(&self) -> Vec<Card> {
        self.deck.lock().cards().to_vec()
    }

    /// Deals round-robin under a single lock. See [`deal_cards`].
    pub fn deal(&self, player_count: usize, cards_per_player: usize) -> Vec<Vec<Card>> {
        deal_cards(&mut self.deck.lock(), player_count, cards_per_player)
    }

    /// Unwraps the deck.
    pub fn into_inner(self) -> Deck {
        self.deck.into_inner()
    }
}

impl Default for SharedDeck {
    fn default() -> Self {
        Self::new(Deck::new())
    }
}

impl From<Deck> for SharedDeck {
    fn from(deck: Deck) -> Self {
        Self::new(deck)
    }
}
