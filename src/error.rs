//! Error types for deck and game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when reading a card from deck labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// Value label is not a known rank.
    #[error("invalid card value")]
    InvalidValue,
    /// Suit label is not a known suit.
    #[error("invalid card suit")]
    InvalidSuit,
}

/// Errors reported by a deck client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck id is not known to the client.
    #[error("unknown deck")]
    UnknownDeck,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Exhausted,
    /// The deck service refused the request.
    #[error("deck service rejected the request: {0}")]
    Rejected(String),
    /// The deck service could not be reached or answered garbage.
    #[error("deck service transport error: {0}")]
    Transport(String),
    /// The deck service returned a card that could not be read.
    #[error("deck service returned an invalid card: {0}")]
    InvalidCard(#[from] CardParseError),
}

/// Errors that can occur while sequencing draws.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No deck has been shuffled yet.
    #[error("no deck has been shuffled")]
    NoDeck,
    /// The deck is exhausted and the game is over.
    #[error("the game is finished")]
    Finished,
    /// The deck client failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
