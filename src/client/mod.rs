//! Deck clients: where shuffled decks and drawn cards come from.
//!
//! [`SnapGame`](crate::SnapGame) never shuffles or stores cards itself. It
//! asks a [`DeckClient`] for a fresh deck and then for one card at a time,
//! so tests can inject a scripted client and the browser build can use the
//! in-process [`LocalDeckClient`].

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::card::Card;
use crate::error::DeckError;

#[cfg(feature = "http")]
#[cfg_attr(docsrs, doc(cfg(feature = "http")))]
pub mod http;
mod local;

#[cfg(feature = "http")]
pub use http::HttpDeckClient;
pub use local::LocalDeckClient;

/// Opaque identifier of a deck held by a client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeckId(String);

impl DeckId {
    /// Wraps a client-issued identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A freshly shuffled deck as reported by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckState {
    /// Identifier to draw from.
    pub deck_id: DeckId,
    /// Cards left in the deck (52 for a fresh deck).
    pub remaining: usize,
    /// Whether the client shuffled the deck.
    pub shuffled: bool,
}

/// One card drawn from a deck, with the count left behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnCard {
    /// The drawn card.
    pub card: Card,
    /// Cards left in the deck after this draw.
    pub remaining: usize,
}

/// A source of shuffled decks.
pub trait DeckClient {
    /// Creates and shuffles a new single deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot produce a deck.
    fn shuffle_new_deck(&self) -> Result<DeckState, DeckError>;

    /// Draws the top card of `deck_id`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] when the deck is empty,
    /// [`DeckError::UnknownDeck`] for an id the client never issued, or a
    /// client-specific failure.
    fn draw_one(&self, deck_id: &DeckId) -> Result<DrawnCard, DeckError>;
}

impl<T: DeckClient + ?Sized> DeckClient for &T {
    fn shuffle_new_deck(&self) -> Result<DeckState, DeckError> {
        (**self).shuffle_new_deck()
    }

    fn draw_one(&self, deck_id: &DeckId) -> Result<DrawnCard, DeckError> {
        (**self).draw_one(deck_id)
    }
}

impl<T: DeckClient + ?Sized> DeckClient for Box<T> {
    fn shuffle_new_deck(&self) -> Result<DeckState, DeckError> {
        (**self).shuffle_new_deck()
    }

    fn draw_one(&self, deck_id: &DeckId) -> Result<DrawnCard, DeckError> {
        (**self).draw_one(deck_id)
    }
}
