use serde::Serialize;
use snaprs::{
    Card, DrawOutcome, GameState, LocalDeckClient, SnapGame, SnapOptions,
};
use wasm_bindgen::prelude::*;

const CARD_IMAGE_BASE: &str = "https://deckofcardsapi.com/static/img";

#[wasm_bindgen]
pub struct WasmSnap {
    game: SnapGame<LocalDeckClient>,
}

#[wasm_bindgen]
impl WasmSnap {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: SnapGame::new(LocalDeckClient::new(seed as u64), SnapOptions::default()),
        }
    }

    pub fn shuffle(&self) -> Result<JsValue, JsValue> {
        let previous = self.game.deck();
        let deck = self.game.shuffle_new_deck().map_err(js_err)?;
        if let Some(previous) = previous {
            self.game.client().release(&previous.deck_id);
        }
        to_js_value(&JsDeck {
            deck_id: deck.deck_id.to_string(),
            remaining: deck.remaining as u32,
            shuffled: deck.shuffled,
        })
    }

    pub fn draw(&self) -> Result<JsValue, JsValue> {
        let outcome = self.game.draw().map_err(js_err)?;
        to_js_value(&JsDraw::from(outcome))
    }

    pub fn probability(&self) -> Option<f64> {
        self.game.probability()
    }

    pub fn probability_label(&self) -> Option<String> {
        self.game.probability_label()
    }

    pub fn remaining(&self) -> u32 {
        self.game.remaining_cards() as u32
    }

    pub fn card_back_image(&self) -> String {
        self.game.options.card_back_image.clone()
    }

    pub fn summary(&self) -> Result<JsValue, JsValue> {
        match self.game.summary() {
            Some(summary) => to_js_value(&JsSummary {
                value_matches: summary.counts.values,
                suit_matches: summary.counts.suits,
                cards_drawn: summary.cards_drawn as u32,
            }),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let counts = self.game.match_counts();
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            current: self.game.current_card().map(card_to_js),
            previous: self.game.previous_card().map(card_to_js),
            snap: self.game.last_match().snap_label(),
            value_matches: counts.values,
            suit_matches: counts.suits,
            remaining: self.game.remaining_cards() as u32,
            probability_label: self.game.probability_label(),
        };
        to_js_value(&snapshot)
    }

    pub fn reset(&self) {
        if let Some(previous) = self.game.deck() {
            self.game.client().release(&previous.deck_id);
        }
        self.game.reset();
    }
}

#[derive(Serialize)]
struct JsDeck {
    deck_id: String,
    remaining: u32,
    shuffled: bool,
}

#[derive(Serialize)]
struct JsCard {
    value: &'static str,
    suit: &'static str,
    code: String,
    image: String,
    alt: String,
}

#[derive(Serialize)]
struct JsDraw {
    card: JsCard,
    previous: Option<JsCard>,
    match_kind: String,
    snap: Option<&'static str>,
    value_matches: u32,
    suit_matches: u32,
    remaining: u32,
    probability: Option<f64>,
}

impl From<DrawOutcome> for JsDraw {
    fn from(outcome: DrawOutcome) -> Self {
        Self {
            card: card_to_js(outcome.card),
            previous: outcome.previous.map(card_to_js),
            match_kind: outcome.match_kind.to_string(),
            snap: outcome.match_kind.snap_label(),
            value_matches: outcome.counts.values,
            suit_matches: outcome.counts.suits,
            remaining: outcome.remaining as u32,
            probability: outcome.probability,
        }
    }
}

#[derive(Serialize)]
struct JsSummary {
    value_matches: u32,
    suit_matches: u32,
    cards_drawn: u32,
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    current: Option<JsCard>,
    previous: Option<JsCard>,
    snap: Option<&'static str>,
    value_matches: u32,
    suit_matches: u32,
    remaining: u32,
    probability_label: Option<String>,
}

fn card_to_js(card: Card) -> JsCard {
    let code = card.code();
    let value = card.value_label();
    let suit = card.suit.label();
    let alt = card.to_string();
    let image = if card.image.is_empty() {
        format!("{CARD_IMAGE_BASE}/{code}.png")
    } else {
        card.image
    };
    JsCard {
        value,
        suit,
        code,
        image,
        alt,
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::WaitingForDeck => "WaitingForDeck",
        GameState::Drawing => "Drawing",
        GameState::Finished => "Finished",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
