//! Deck integration tests.

use std::collections::{HashMap, HashSet};

use deckrs::{
    Card, CardId, CardOverrides, DECK_SIZE, Deck, DeckError, Owner, Position, Rank, Suit,
    create_shuffled_deck, deal_cards,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn ids(deck: &Deck) -> Vec<CardId> {
    deck.iter().map(Card::id).collect()
}

fn assert_stacked(deck: &Deck) {
    for (index, card) in deck.iter().enumerate() {
        assert_eq!(card.position.z, index, "{} is out of place", card.id());
    }
}

/// Builds a deck whose successive draws return `draws` in order.
fn deck_from_draws(draws: &[Card]) -> Deck {
    Deck::from_cards(draws.iter().rev().copied()).unwrap()
}

#[test]
fn new_deck_is_canonical() {
    let deck = Deck::new();

    assert_eq!(deck.len(), DECK_SIZE);
    assert!(!deck.is_empty());
    assert_eq!(ids(&deck).into_iter().collect::<HashSet<_>>().len(), DECK_SIZE);
    assert!(deck.iter().all(|card| !card.face_up));
    assert!(deck.iter().all(|card| card.owner == Owner::Deck));
    assert_stacked(&deck);

    assert_eq!(deck.cards()[0].id(), CardId::new(Suit::Hearts, Rank::Ace));
    assert_eq!(
        deck.peek().map(Card::id),
        Some(CardId::new(Suit::Spades, Rank::King))
    );
}

#[test]
fn draw_takes_from_the_top() {
    let mut deck = Deck::new();
    let top = deck.cards()[DECK_SIZE - 1].id();

    let drawn = deck.draw().unwrap();
    assert_eq!(drawn.id(), top);
    assert_eq!(deck.len(), 51);
}

#[test]
fn draw_is_lifo() {
    let mut deck = Deck::from_cards([]).unwrap();
    deck.add_to_top(card(Suit::Hearts, Rank::Two));
    deck.add_to_top(card(Suit::Clubs, Rank::Three));

    assert_eq!(deck.draw().unwrap().id(), CardId::new(Suit::Clubs, Rank::Three));
    assert_eq!(deck.draw().unwrap().id(), CardId::new(Suit::Hearts, Rank::Two));
    assert!(deck.draw().is_none());
}

#[test]
fn draw_on_empty_deck_returns_none() {
    let mut deck = Deck::new();
    for _ in 0..DECK_SIZE {
        assert!(deck.draw().is_some());
    }

    assert!(deck.draw().is_none());
    assert!(deck.is_empty());
    assert!(deck.peek().is_none());
}

#[test]
fn draw_multiple_returns_cards_in_draw_order() {
    let mut deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Seven),
    ]);

    let drawn: Vec<CardId> = deck.draw_multiple(2).iter().map(Card::id).collect();
    assert_eq!(
        drawn,
        [
            CardId::new(Suit::Hearts, Rank::Nine),
            CardId::new(Suit::Clubs, Rank::Five),
        ]
    );
    assert_eq!(deck.len(), 1);
}

#[test]
fn draw_multiple_stops_when_empty() {
    let mut deck = Deck::new();
    assert_eq!(deck.draw_multiple(5).len(), 5);
    assert_eq!(deck.len(), 47);

    assert_eq!(deck.draw_multiple(100).len(), 47);
    assert!(deck.is_empty());
    assert!(deck.draw_multiple(5).is_empty());
}

#[test]
fn peek_matches_next_draw_and_changes_nothing() {
    let mut deck = Deck::new();
    deck.shuffle_with_seed(11);

    let first = deck.peek().map(Card::id);
    let second = deck.peek().map(Card::id);
    assert_eq!(first, second);
    assert_eq!(deck.len(), DECK_SIZE);

    assert_eq!(deck.draw().map(|card| card.id()), first);
}

#[test]
fn shuffle_keeps_cards_and_restacks() {
    let mut deck = Deck::new();
    let original = ids(&deck);

    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(5));
    let shuffled = ids(&deck);

    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(shuffled, original);
    assert_eq!(
        shuffled.iter().collect::<HashSet<_>>(),
        original.iter().collect::<HashSet<_>>()
    );
    assert_stacked(&deck);
    assert!(deck.iter().all(|card| card.owner == Owner::Deck && !card.face_up));
}

#[test]
fn shuffle_leaves_faces_and_owners_alone() {
    let mut deck = Deck::from_cards([]).unwrap();
    deck.add_to_top(Card::with_overrides(
        Suit::Hearts,
        Rank::Four,
        CardOverrides::default().with_face_up(true),
    ));
    deck.add_to_top(card(Suit::Spades, Rank::Four));
    deck.add_to_top(card(Suit::Clubs, Rank::Four));

    deck.shuffle_with_seed(9);

    let face_up: Vec<CardId> = deck
        .iter()
        .filter(|card| card.face_up)
        .map(Card::id)
        .collect();
    assert_eq!(face_up, [CardId::new(Suit::Hearts, Rank::Four)]);
    assert_stacked(&deck);
}

#[test]
fn shuffles_with_different_seeds_differ() {
    let mut first = Deck::new();
    first.shuffle_with_seed(1);

    let mut second = Deck::new();
    second.shuffle_with_seed(2);

    assert_ne!(ids(&first), ids(&second));
}

#[test]
fn shuffles_with_same_seed_agree() {
    let mut first = Deck::new();
    first.shuffle_with_seed(1234);

    let mut second = Deck::new();
    second.shuffle_with_seed(1234);

    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn shuffle_is_uniform_over_small_decks() {
    let cards = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Three),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut counts: HashMap<Vec<CardId>, usize> = HashMap::new();

    for _ in 0..6000 {
        let mut deck = Deck::from_cards(cards).unwrap();
        deck.shuffle(&mut rng);
        *counts.entry(ids(&deck)).or_default() += 1;
    }

    // 3! orders, about 1000 each.
    assert_eq!(counts.len(), 6);
    for (order, count) in &counts {
        assert!((800..=1200).contains(count), "{order:?} came up {count} times");
    }
}

#[test]
fn reset_restores_canonical_order() {
    let original = ids(&Deck::new());

    let mut deck = Deck::new();
    deck.shuffle_with_seed(3);
    deck.draw_multiple(20);
    deck.add_to_top(card(Suit::Hearts, Rank::Ace));
    deck.reset();

    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(ids(&deck), original);
    assert_stacked(&deck);
    assert!(deck.iter().all(|card| card.owner == Owner::Deck && !card.face_up));
}

#[test]
fn add_to_bottom_places_card_at_index_zero() {
    let mut deck = Deck::new();
    let added = Card::with_overrides(
        Suit::Hearts,
        Rank::Ace,
        CardOverrides::default()
            .with_face_up(true)
            .with_owner(Owner::Discard)
            .with_position(Position::new(10.0, 20.0, 30)),
    );

    deck.add_to_bottom(added);

    assert_eq!(deck.len(), 53);
    let bottom = deck.cards()[0];
    assert_eq!(bottom.id(), CardId::new(Suit::Hearts, Rank::Ace));
    assert_eq!(bottom.position, Position::new(10.0, 20.0, 0));
    assert_eq!(bottom.owner, Owner::Deck);
    assert!(bottom.face_up);
    assert_stacked(&deck);
}

#[test]
fn add_to_top_becomes_next_draw() {
    let mut deck = Deck::new();
    deck.add_to_top(Card::with_overrides(
        Suit::Spades,
        Rank::King,
        CardOverrides::default().with_owner(Owner::Player2),
    ));

    assert_eq!(deck.len(), 53);
    let top = deck.peek().unwrap();
    assert_eq!(top.id(), CardId::new(Suit::Spades, Rank::King));
    assert_eq!(top.owner, Owner::Deck);
    assert_eq!(top.position.z, 52);
    assert_stacked(&deck);
}

#[test]
fn add_cards_puts_last_card_on_top() {
    let mut deck = Deck::new();
    deck.add_cards([
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::King),
        card(Suit::Diamonds, Rank::Queen),
    ]);

    assert_eq!(deck.len(), 55);
    assert_eq!(
        deck.draw().map(|card| card.id()),
        Some(CardId::new(Suit::Diamonds, Rank::Queen))
    );
    assert_eq!(
        deck.draw().map(|card| card.id()),
        Some(CardId::new(Suit::Spades, Rank::King))
    );
}

#[test]
fn cards_view_is_a_copy_source() {
    let deck = Deck::new();
    let mut copy = deck.cards().to_vec();
    copy.clear();

    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn from_cards_rejects_duplicates() {
    let duplicate = card(Suit::Clubs, Rank::Jack);
    let result = Deck::from_cards([card(Suit::Hearts, Rank::Two), duplicate, duplicate]);

    assert_eq!(
        result.unwrap_err(),
        DeckError::DuplicateCard(CardId::new(Suit::Clubs, Rank::Jack))
    );
}

#[test]
fn from_cards_takes_ownership_and_restacks() {
    let hand = [
        Card::with_overrides(
            Suit::Hearts,
            Rank::Six,
            CardOverrides::default()
                .with_owner(Owner::Player1)
                .with_position(Position::new(0.0, 0.0, 7)),
        ),
        Card::with_overrides(
            Suit::Clubs,
            Rank::Six,
            CardOverrides::default().with_owner(Owner::Player1),
        ),
    ];
    let deck = Deck::from_cards(hand).unwrap();

    assert!(deck.iter().all(|card| card.owner == Owner::Deck));
    assert_stacked(&deck);
    assert!(deck.contains(CardId::new(Suit::Clubs, Rank::Six)));
    assert!(!deck.contains(CardId::new(Suit::Clubs, Rank::Seven)));
}

#[test]
fn create_shuffled_deck_is_full_and_shuffled() {
    let deck = create_shuffled_deck(&mut ChaCha8Rng::seed_from_u64(77));

    assert_eq!(deck.len(), DECK_SIZE);
    assert!(!deck.is_empty());
    assert_ne!(ids(&deck), ids(&Deck::new()));
    assert_stacked(&deck);
}

#[test]
fn deal_to_two_players() {
    let mut deck = Deck::new();
    let hands = deal_cards(&mut deck, 2, 5);

    assert_eq!(hands.len(), 2);
    assert_eq!(hands[0].len(), 5);
    assert_eq!(hands[1].len(), 5);
    assert_eq!(deck.len(), 42);
}

#[test]
fn deal_to_four_players() {
    let mut deck = Deck::new();
    let hands = deal_cards(&mut deck, 4, 7);

    assert_eq!(hands.len(), 4);
    assert!(hands.iter().all(|hand| hand.len() == 7));
    assert_eq!(deck.len(), 24);
}

#[test]
fn deal_is_round_robin() {
    let mut deck = deck_from_draws(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Hearts, Rank::Four),
    ]);

    let hands = deal_cards(&mut deck, 2, 2);
    let hand_ids: Vec<Vec<CardId>> = hands
        .iter()
        .map(|hand| hand.iter().map(Card::id).collect())
        .collect();

    assert_eq!(
        hand_ids,
        [
            vec![
                CardId::new(Suit::Hearts, Rank::Ace),
                CardId::new(Suit::Hearts, Rank::Three),
            ],
            vec![
                CardId::new(Suit::Hearts, Rank::Two),
                CardId::new(Suit::Hearts, Rank::Four),
            ],
        ]
    );
    assert!(deck.is_empty());
}

#[test]
fn deal_stops_mid_round_when_deck_runs_out() {
    let mut deck = Deck::new();
    let hands = deal_cards(&mut deck, 3, 20);

    // 52 = 3 * 17 + 1: the first player gets the one extra card.
    let sizes: Vec<usize> = hands.iter().map(Vec::len).collect();
    assert_eq!(sizes, [18, 17, 17]);
    assert!(deck.is_empty());
}

#[test]
fn deal_from_empty_deck_gives_empty_hands() {
    let mut deck = Deck::from_cards([]).unwrap();
    let hands = deal_cards(&mut deck, 3, 4);

    assert_eq!(hands.len(), 3);
    assert!(hands.iter().all(Vec::is_empty));
}
