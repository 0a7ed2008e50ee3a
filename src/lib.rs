//! A Snap card-matching engine with optional `no_std` support.
//!
//! The crate tracks value and suit matches between consecutive draws and
//! estimates the chance that the next card snaps. [`SnapGame`] sequences
//! draws from any [`DeckClient`], while [`record_draw`] and
//! [`estimate_match_probability`] are usable on their own.
//!
//! # Example
//!
//! ```no_run
//! use snaprs::{LocalDeckClient, SnapGame, SnapOptions};
//!
//! let game = SnapGame::new(LocalDeckClient::new(42), SnapOptions::default());
//! game.shuffle_new_deck().unwrap();
//! let outcome = game.draw().unwrap();
//! let _ = outcome;
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod client;
pub mod error;
pub mod game;
pub mod options;
pub mod snap;
mod sync;

// Re-export main types
pub use card::{CARDS_PER_SUIT, CARDS_PER_VALUE, Card, DECK_SIZE, Suit};
#[cfg(feature = "http")]
pub use client::HttpDeckClient;
pub use client::{DeckClient, DeckId, DeckState, DrawnCard, LocalDeckClient};
pub use error::{CardParseError, DeckError, GameError};
pub use game::{DrawOutcome, FinalSummary, GameState, SnapGame};
pub use options::SnapOptions;
pub use snap::{
    MatchBreakdown, MatchCounts, MatchKind, estimate_match_probability, match_kind,
    percent_label, record_draw, rounded_percent,
};
