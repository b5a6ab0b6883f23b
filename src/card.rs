//! Card types and the pure rules over them.
//!
//! Every function here is stateless. A [`Card`] is a small `Copy` value whose
//! identity ([`CardId`]) is fixed at construction; visibility, position, and
//! owner are plain fields that collections rewrite as they move cards around.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::{ParseCardIdError, ParseRankError, ParseSuitError};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the lowercase name used in card ids (`"hearts"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        }
    }

    /// Returns the Unicode glyph for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or(ParseSuitError)
    }
}

/// Card rank, ordered from Ace up to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// All ranks, in canonical deck order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the short label used in ids and display names (`"A"`, `"10"`, `"K"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns the point value of the rank.
    ///
    /// Ace is always 1 and face cards are 10. Games that count an ace high
    /// apply that on top of this value.
    ///
    /// ```
    /// use deckrs::Rank;
    ///
    /// assert_eq!(Rank::Ace.value(), 1);
    /// assert_eq!(Rank::Seven.value(), 7);
    /// assert_eq!(Rank::Queen.value(), 10);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self as u8,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label() == s)
            .ok_or(ParseRankError)
    }
}

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Black => "black",
        })
    }
}

/// Which collection currently holds a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Not held by any collection (loose on the play area).
    Unowned,
    /// First player.
    Player1,
    /// Second player.
    Player2,
    /// The draw pile.
    Deck,
    /// The discard pile.
    Discard,
}

/// Position of a card on the play area.
///
/// `z` is the stacking index and always equals the card's index in the
/// collection that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Stacking index (0 = bottom).
    pub z: usize,
}

impl Position {
    /// The `(0, 0, 0)` position.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0);

    /// Creates a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Returns the same position with a different stacking index.
    #[must_use]
    pub const fn with_z(self, z: usize) -> Self {
        Self { z, ..self }
    }
}

/// Identity of a card: its suit and rank.
///
/// Cards are compared by id, never structurally. The string form is
/// `"{suit}-{rank}"`, e.g. `hearts-A` or `diamonds-10`.
///
/// ```
/// use deckrs::{CardId, Rank, Suit};
///
/// let id = CardId::new(Suit::Spades, Rank::King);
/// assert_eq!(id.to_string(), "spades-K");
/// assert_eq!("spades-K".parse::<CardId>(), Ok(id));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId {
    suit: Suit,
    rank: Rank,
}

impl CardId {
    /// Creates the id for a suit and rank.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}

impl FromStr for CardId {
    type Err = ParseCardIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank) = s
            .split_once('-')
            .ok_or(ParseCardIdError::MissingSeparator)?;
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }
}

/// Field overrides applied by [`Card::with_overrides`].
///
/// Identity fields cannot be overridden; only visibility, position, and owner.
///
/// ```
/// use deckrs::{CardOverrides, Owner, Position};
///
/// let overrides = CardOverrides::default()
///     .with_face_up(true)
///     .with_position(Position::new(100.0, 200.0, 5))
///     .with_owner(Owner::Player1);
/// assert_eq!(overrides.face_up, Some(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardOverrides {
    /// Visibility override.
    pub face_up: Option<bool>,
    /// Position override.
    pub position: Option<Position>,
    /// Owner override.
    pub owner: Option<Owner>,
}

impl CardOverrides {
    /// Sets the visibility override.
    #[must_use]
    pub const fn with_face_up(mut self, face_up: bool) -> Self {
        self.face_up = Some(face_up);
        self
    }

    /// Sets the position override.
    #[must_use]
    pub const fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the owner override.
    #[must_use]
    pub const fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    id: CardId,
    /// Whether the face is visible.
    pub face_up: bool,
    /// Position on the play area.
    pub position: Position,
    /// Collection currently holding the card.
    pub owner: Owner,
}

impl Card {
    /// Creates a face-down card at the origin, owned by the deck.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            id: CardId::new(suit, rank),
            face_up: false,
            position: Position::ORIGIN,
            owner: Owner::Deck,
        }
    }

    /// Creates a card with the defaults of [`Card::new`], then applies
    /// `overrides`.
    #[must_use]
    pub const fn with_overrides(suit: Suit, rank: Rank, overrides: CardOverrides) -> Self {
        let mut card = Self::new(suit, rank);
        if let Some(face_up) = overrides.face_up {
            card.face_up = face_up;
        }
        if let Some(position) = overrides.position {
            card.position = position;
        }
        if let Some(owner) = overrides.owner {
            card.owner = owner;
        }
        card
    }

    /// Returns the card's id.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.id.suit
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.id.rank
    }

    /// Returns the point value of the card's rank.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.id.rank.value()
    }

    /// Returns the color of the card's suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.id.suit.color()
    }

    /// Returns whether both cards have the same rank, ignoring suit.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }

    /// Returns the rank followed by the suit glyph, e.g. `"10♠"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.to_string()
    }

    /// Returns the card moved into `owner` at stacking index `z`.
    pub(crate) const fn placed(self, owner: Owner, z: usize) -> Self {
        Self {
            owner,
            position: self.position.with_z(z),
            ..self
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit().symbol())
    }
}

/// Returns whether two cards have the same rank. Suit is ignored.
///
/// ```
/// use deckrs::{Card, Rank, Suit, cards_match};
///
/// let five = Card::new(Suit::Hearts, Rank::Five);
/// assert!(cards_match(&five, &Card::new(Suit::Clubs, Rank::Five)));
/// assert!(!cards_match(&five, &Card::new(Suit::Clubs, Rank::Six)));
/// ```
#[must_use]
pub fn cards_match(a: &Card, b: &Card) -> bool {
    a.matches(b)
}

/// Iterates the 52 canonical cards, suit by suit in [`Suit::ALL`] order and
/// rank by rank in [`Rank::ALL`] order, all with default fields.
pub fn standard_cards() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
}
