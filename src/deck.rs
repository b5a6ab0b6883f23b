//! Deck storage, shuffling, and dealing.

use alloc::vec::Vec;
use core::slice;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::card::{Card, CardId, DECK_SIZE, Owner, standard_cards};
use crate::error::DeckError;

/// An ordered pile of cards.
///
/// The last card is the top of the pile and the next one drawn; index 0 is
/// the bottom. Every card's `position.z` equals its index after any operation
/// that changes the order or membership of the pile.
///
/// # Example
///
/// ```
/// use deckrs::Deck;
///
/// let mut deck = Deck::new();
/// deck.shuffle_with_seed(7);
///
/// let top = deck.peek().map(|card| card.id());
/// assert_eq!(deck.draw().map(|card| card.id()), top);
/// assert_eq!(deck.len(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards, bottom first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the canonical 52-card deck, unshuffled and face down.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.initialize();
        deck
    }

    /// Builds a deck from existing cards, the first card at the bottom.
    ///
    /// Every card is taken over by the deck and restacked.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if two cards share an id.
    pub fn from_cards<I>(cards: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut seen = HashSet::new();
        let mut deck = Self { cards: Vec::new() };

        for card in cards {
            if !seen.insert(card.id()) {
                return Err(DeckError::DuplicateCard(card.id()));
            }
            deck.add_to_top(card);
        }

        Ok(deck)
    }

    fn initialize(&mut self) {
        self.cards.clear();
        self.cards.extend(
            standard_cards()
                .enumerate()
                .map(|(z, card)| card.placed(Owner::Deck, z)),
        );
    }

    fn restack(&mut self) {
        for (z, card) in self.cards.iter_mut().enumerate() {
            card.position.z = z;
        }
    }

    /// Shuffles the deck in place with the Fisher-Yates algorithm.
    ///
    /// Walks from the top down to index 1, swapping each card with one at a
    /// uniformly chosen index at or below it, then restacks.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        self.restack();

        debug!(target: "deckrs::deck", cards = self.cards.len(), "shuffled");
    }

    /// Shuffles the deck with a `ChaCha8` generator seeded from `seed`.
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws up to `count` cards, in the order they were drawn.
    ///
    /// Stops early once the deck is empty, so the result may be shorter than
    /// `count`.
    pub fn draw_multiple(&mut self, count: usize) -> Vec<Card> {
        let drawn: Vec<Card> = (0..count).map_while(|_| self.draw()).collect();

        if drawn.len() < count {
            trace!(
                target: "deckrs::deck",
                requested = count,
                drawn = drawn.len(),
                "deck ran out while drawing"
            );
        }

        drawn
    }

    /// Returns the card [`Deck::draw`] would return, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discards the current contents and rebuilds the canonical deck.
    ///
    /// Earlier shuffles, draws, and additions are all lost.
    pub fn reset(&mut self) {
        let previous = self.cards.len();
        self.initialize();

        debug!(target: "deckrs::deck", previous, "reset to canonical deck");
    }

    /// Puts a card at the bottom of the deck.
    ///
    /// The card becomes owned by the deck and every card is restacked. Its
    /// face is left as it was.
    pub fn add_to_bottom(&mut self, card: Card) {
        self.cards.insert(0, card.placed(Owner::Deck, 0));
        self.restack();
    }

    /// Puts a card on top of the deck, owned by the deck.
    pub fn add_to_top(&mut self, card: Card) {
        let z = self.cards.len();
        self.cards.push(card.placed(Owner::Deck, z));
    }

    /// Puts each card on top in turn, so the last one ends up on top.
    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            self.add_to_top(card);
        }
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether a card with this id is in the deck.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    /// Iterates the cards, bottom first.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Creates a canonical deck and shuffles it with `rng`.
///
/// ```
/// use deckrs::{DECK_SIZE, create_shuffled_deck};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let deck = create_shuffled_deck(&mut ChaCha8Rng::seed_from_u64(42));
/// assert_eq!(deck.len(), DECK_SIZE);
/// ```
#[must_use]
pub fn create_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Deck {
    let mut deck = Deck::new();
    deck.shuffle(rng);
    deck
}

/// Deals cards round-robin from the top of `deck`.
///
/// Each round gives one card to every player in index order. Dealing stops as
/// soon as the deck runs out, so in a partial round the earlier players get a
/// card and the later ones do not. Returns one hand per player, in player
/// order, each in the order its cards were dealt.
///
/// ```
/// use deckrs::{Deck, deal_cards};
///
/// let mut deck = Deck::new();
/// let hands = deal_cards(&mut deck, 2, 5);
/// assert_eq!(hands.len(), 2);
/// assert!(hands.iter().all(|hand| hand.len() == 5));
/// assert_eq!(deck.len(), 42);
/// ```
pub fn deal_cards(deck: &mut Deck, player_count: usize, cards_per_player: usize) -> Vec<Vec<Card>> {
    // Reserve each hand's exact share of the cards this deal can hand out.
    let dealt = deck.len().min(player_count.saturating_mul(cards_per_player));
    let (share, extra) = if player_count == 0 {
        (0, 0)
    } else {
        (dealt / player_count, dealt % player_count)
    };
    let mut hands: Vec<Vec<Card>> = (0..player_count)
        .map(|player| Vec::with_capacity(share + usize::from(player < extra)))
        .collect();

    if player_count > 0 {
        'rounds: for _ in 0..cards_per_player {
            for hand in &mut hands {
                let Some(card) = deck.draw() else {
                    break 'rounds;
                };
                hand.push(card);
            }
        }
    }

    debug!(
        target: "deckrs::deck",
        players = player_count,
        requested = player_count.saturating_mul(cards_per_player),
        dealt = hands.iter().map(Vec::len).sum::<usize>(),
        remaining = deck.len(),
        "dealt hands"
    );

    hands
}
