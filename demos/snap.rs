//! Terminal snap demo: you against the computer.
//!
//! Each turn the current player flips their top card onto the pile. When the
//! two top cards of the pile share a rank, whoever calls snap first takes the
//! whole pile. The computer always snaps on its own flips; you have to spot
//! matches on yours.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, Deck, Owner, create_shuffled_deck, deal_cards};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const MAX_TURNS: usize = 400;

struct Table {
    you: Deck,
    computer: Deck,
    pile: Vec<Card>,
}

impl Table {
    fn deal(seed: u64) -> Self {
        let mut deck = create_shuffled_deck(&mut ChaCha8Rng::seed_from_u64(seed));
        let mut hands = deal_cards(&mut deck, 2, deckrs::DECK_SIZE / 2).into_iter();

        Self {
            you: stack(hands.next().unwrap_or_default()),
            computer: stack(hands.next().unwrap_or_default()),
            pile: Vec::new(),
        }
    }

    fn flip(&mut self, owner: Owner) -> Option<Card> {
        let hand = match owner {
            Owner::Player1 => &mut self.you,
            _ => &mut self.computer,
        };
        let mut card = hand.draw()?;
        card.face_up = true;
        card.owner = Owner::Discard;
        card.position.z = self.pile.len();
        self.pile.push(card);
        Some(card)
    }

    fn snap_ready(&self) -> bool {
        match self.pile.as_slice() {
            [.., below, top] => below.matches(top),
            _ => false,
        }
    }

    fn collect_pile(&mut self, owner: Owner) {
        let hand = match owner {
            Owner::Player1 => &mut self.you,
            _ => &mut self.computer,
        };
        for mut card in self.pile.drain(..) {
            card.face_up = false;
            hand.add_to_bottom(card);
        }
    }

    fn pay_penalty(&mut self) {
        if let Some(card) = self.you.draw() {
            self.computer.add_to_bottom(card);
        }
    }
}

fn stack(hand: Vec<Card>) -> Deck {
    Deck::from_cards(hand).expect("dealt cards come from a single deck")
}

fn main() {
    println!("Snap demo (enter to flip, 's' to call snap, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::deal(seed);

    let mut owner = Owner::Player1;
    for _ in 0..MAX_TURNS {
        if table.you.is_empty() {
            println!("You are out of cards. The computer wins.");
            return;
        }
        if table.computer.is_empty() {
            println!("The computer is out of cards. You win!");
            return;
        }

        if owner == Owner::Player1 {
            match prompt_line(&format!("[{} vs {}] ", table.you.len(), table.computer.len())).as_str()
            {
                "q" | "quit" => return,
                "s" | "snap" => {
                    call_snap(&mut table);
                    continue;
                }
                _ => {}
            }
        }

        if let Some(card) = table.flip(owner) {
            let who = if owner == Owner::Player1 { "You" } else { "Computer" };
            println!("{who} flipped {card} (pile: {})", table.pile.len());

            if owner == Owner::Player2 && table.snap_ready() {
                println!("Computer: Snap! It takes {} cards.", table.pile.len());
                table.collect_pile(Owner::Player2);
            }
        }

        owner = if owner == Owner::Player1 {
            Owner::Player2
        } else {
            Owner::Player1
        };
    }

    println!(
        "Out of time. You hold {} cards, the computer holds {}.",
        table.you.len(),
        table.computer.len()
    );
}

fn call_snap(table: &mut Table) {
    if table.snap_ready() {
        println!("Snap! You take {} cards.", table.pile.len());
        table.collect_pile(Owner::Player1);
    } else {
        println!("No match. You give a card to the computer.");
        table.pay_penalty();
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}
