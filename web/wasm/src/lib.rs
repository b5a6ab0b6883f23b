use deckrs::{Card, CardId, CardOverrides, Color, Deck, Owner, Rank, deal_cards};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmDeck {
    deck: Deck,
}

#[wasm_bindgen]
impl WasmDeck {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { deck: Deck::new() }
    }

    pub fn shuffle(&mut self, seed: u32) {
        self.deck.shuffle_with_seed(seed as u64);
    }

    pub fn draw(&mut self) -> Result<JsValue, JsValue> {
        to_js_value(&self.deck.draw().map(JsCard::from))
    }

    pub fn draw_multiple(&mut self, count: u32) -> Result<JsValue, JsValue> {
        let cards: Vec<JsCard> = self
            .deck
            .draw_multiple(count as usize)
            .into_iter()
            .map(JsCard::from)
            .collect();
        to_js_value(&cards)
    }

    pub fn peek(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.deck.peek().copied().map(JsCard::from))
    }

    pub fn count(&self) -> u32 {
        self.deck.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn reset(&mut self) {
        self.deck.reset();
    }

    pub fn add_to_top(&mut self, id: &str, face_up: bool) -> Result<(), JsValue> {
        let card = card_from_id(id, face_up)?;
        self.deck.add_to_top(card);
        Ok(())
    }

    pub fn add_to_bottom(&mut self, id: &str, face_up: bool) -> Result<(), JsValue> {
        let card = card_from_id(id, face_up)?;
        self.deck.add_to_bottom(card);
        Ok(())
    }

    pub fn cards(&self) -> Result<JsValue, JsValue> {
        let cards: Vec<JsCard> = self.deck.iter().copied().map(JsCard::from).collect();
        to_js_value(&cards)
    }

    pub fn deal(&mut self, player_count: u32, cards_per_player: u32) -> Result<JsValue, JsValue> {
        let hands: Vec<Vec<JsCard>> =
            deal_cards(&mut self.deck, player_count as usize, cards_per_player as usize)
                .into_iter()
                .map(|hand| hand.into_iter().map(JsCard::from).collect())
                .collect();
        to_js_value(&hands)
    }
}

impl Default for WasmDeck {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub fn card_value(rank: &str) -> Result<u8, JsValue> {
    rank.parse::<Rank>().map(Rank::value).map_err(js_err)
}

#[wasm_bindgen]
pub fn cards_match(a: &str, b: &str) -> Result<bool, JsValue> {
    let a = card_from_id(a, false)?;
    let b = card_from_id(b, false)?;
    Ok(deckrs::cards_match(&a, &b))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCard {
    id: String,
    suit: &'static str,
    rank: &'static str,
    face_up: bool,
    position: JsPosition,
    owner: Option<&'static str>,
    display_name: String,
    color: &'static str,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            id: card.id().to_string(),
            suit: card.suit().name(),
            rank: card.rank().label(),
            face_up: card.face_up,
            position: JsPosition {
                x: card.position.x,
                y: card.position.y,
                z: card.position.z as u32,
            },
            owner: owner_to_str(card.owner),
            display_name: card.display_name(),
            color: color_to_str(card.color()),
        }
    }
}

#[derive(Serialize)]
struct JsPosition {
    x: f64,
    y: f64,
    z: u32,
}

fn card_from_id(id: &str, face_up: bool) -> Result<Card, JsValue> {
    let id: CardId = id.parse().map_err(js_err)?;
    Ok(Card::with_overrides(
        id.suit(),
        id.rank(),
        CardOverrides::default().with_face_up(face_up),
    ))
}

fn owner_to_str(owner: Owner) -> Option<&'static str> {
    match owner {
        Owner::Unowned => None,
        Owner::Player1 => Some("player1"),
        Owner::Player2 => Some("player2"),
        Owner::Deck => Some("deck"),
        Owner::Discard => Some("discard"),
    }
}

fn color_to_str(color: Color) -> &'static str {
    match color {
        Color::Red => "red",
        Color::Black => "black",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
