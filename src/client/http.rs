//! Deck client for the public deck of cards API.

use core::time::Duration;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::Deserialize;

use crate::card::Card;
use crate::error::DeckError;

use super::{DeckClient, DeckId, DeckState, DrawnCard};

/// Base URL of the public deck of cards API.
pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ShuffleResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    deck_id: Option<String>,
    #[serde(default)]
    remaining: usize,
    #[serde(default)]
    shuffled: bool,
}

#[derive(Debug, Deserialize)]
struct DrawResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    cards: Vec<ApiCard>,
    #[serde(default)]
    remaining: usize,
}

#[derive(Debug, Deserialize)]
struct ApiCard {
    value: String,
    suit: String,
    #[serde(default)]
    image: String,
}

fn rejected(error: Option<String>) -> DeckError {
    DeckError::Rejected(error.unwrap_or_else(|| "request unsuccessful".to_string()))
}

fn decode_shuffle(body: &str) -> Result<DeckState, DeckError> {
    let response: ShuffleResponse =
        serde_json::from_str(body).map_err(|err| DeckError::Transport(err.to_string()))?;
    if !response.success {
        return Err(rejected(response.error));
    }
    let deck_id = response
        .deck_id
        .ok_or_else(|| DeckError::Transport("response is missing deck_id".to_string()))?;

    Ok(DeckState {
        deck_id: DeckId::new(deck_id),
        remaining: response.remaining,
        shuffled: response.shuffled,
    })
}

fn decode_draw(body: &str) -> Result<DrawnCard, DeckError> {
    let response: DrawResponse =
        serde_json::from_str(body).map_err(|err| DeckError::Transport(err.to_string()))?;
    if !response.success {
        return Err(match response.error {
            Some(message) if message.starts_with("Not enough cards") => DeckError::Exhausted,
            Some(message) if message.contains("does not exist") => DeckError::UnknownDeck,
            other => rejected(other),
        });
    }
    let api_card = response
        .cards
        .into_iter()
        .next()
        .ok_or(DeckError::Exhausted)?;
    let card = Card::from_labels(&api_card.value, &api_card.suit, api_card.image)?;

    Ok(DrawnCard {
        card,
        remaining: response.remaining,
    })
}

/// A deck client that shuffles and draws through the deck of cards API.
///
/// Requests are blocking; each call waits at most the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpDeckClient {
    base_url: String,
    timeout: Duration,
    http: reqwest::blocking::Client,
}

impl Default for HttpDeckClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl HttpDeckClient {
    /// Creates a client for the API rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, url: &str) -> Result<String, DeckError> {
        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .map_err(|err| DeckError::Transport(err.to_string()))?;
        // The API reports failures such as an exhausted deck in the body.
        response
            .text()
            .map_err(|err| DeckError::Transport(err.to_string()))
    }
}

impl DeckClient for HttpDeckClient {
    fn shuffle_new_deck(&self) -> Result<DeckState, DeckError> {
        let url = format!("{}/deck/new/shuffle/?deck_count=1", self.base_url);
        let result = self.get(&url).and_then(|body| decode_shuffle(&body));
        match &result {
            Ok(deck) => tracing::debug!(deck_id = %deck.deck_id, remaining = deck.remaining, "shuffled remote deck"),
            Err(err) => tracing::warn!(%err, "error initializing and shuffling the deck"),
        }
        result
    }

    fn draw_one(&self, deck_id: &DeckId) -> Result<DrawnCard, DeckError> {
        let url = format!("{}/deck/{deck_id}/draw/?count=1", self.base_url);
        let result = self.get(&url).and_then(|body| decode_draw(&body));
        if let Err(err) = &result {
            tracing::warn!(%deck_id, %err, "error dealing card");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn decodes_shuffle_response() {
        let body = r#"{"success": true, "deck_id": "3p40paa87x90", "shuffled": true, "remaining": 52}"#;
        let deck = decode_shuffle(body).unwrap();
        assert_eq!(deck.deck_id.as_str(), "3p40paa87x90");
        assert_eq!(deck.remaining, 52);
        assert!(deck.shuffled);
    }

    #[test]
    fn decodes_draw_response() {
        let body = r#"{
            "success": true,
            "deck_id": "kxozasf3edqu",
            "cards": [
                {
                    "code": "6H",
                    "image": "https://deckofcardsapi.com/static/img/6H.png",
                    "value": "6",
                    "suit": "HEARTS"
                }
            ],
            "remaining": 51
        }"#;
        let drawn = decode_draw(body).unwrap();
        assert_eq!(drawn.card.value, 6);
        assert_eq!(drawn.card.suit, Suit::Hearts);
        assert_eq!(drawn.card.image, "https://deckofcardsapi.com/static/img/6H.png");
        assert_eq!(drawn.remaining, 51);
    }

    #[test]
    fn face_cards_decode_to_numeric_values() {
        let body = r#"{"success": true, "cards": [{"value": "KING", "suit": "SPADES", "image": "ks.png"}], "remaining": 10}"#;
        let drawn = decode_draw(body).unwrap();
        assert_eq!(drawn.card.value, 13);
        assert_eq!(drawn.card.suit, Suit::Spades);
    }

    #[test]
    fn exhausted_deck_maps_to_exhausted() {
        let body = r#"{"success": false, "deck_id": "abc", "cards": [], "remaining": 0, "error": "Not enough cards remaining to draw 1 additional"}"#;
        assert_eq!(decode_draw(body).unwrap_err(), DeckError::Exhausted);
    }

    #[test]
    fn unknown_failure_is_rejected_with_message() {
        let body = r#"{"success": false, "error": "Something odd"}"#;
        assert_eq!(
            decode_draw(body).unwrap_err(),
            DeckError::Rejected("Something odd".to_string())
        );
    }

    #[test]
    fn malformed_body_is_transport_error() {
        assert!(matches!(
            decode_shuffle("<html>").unwrap_err(),
            DeckError::Transport(_)
        ));
    }

    #[test]
    fn bad_card_label_is_invalid_card() {
        let body = r#"{"success": true, "cards": [{"value": "JOKER", "suit": "SPADES"}], "remaining": 3}"#;
        assert!(matches!(
            decode_draw(body).unwrap_err(),
            DeckError::InvalidCard(_)
        ));
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = HttpDeckClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }
}
