//! Game state and draw result types.

use core::fmt;

use crate::card::Card;
use crate::snap::{MatchCounts, MatchKind};

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No deck has been shuffled yet.
    WaitingForDeck,
    /// Cards remain and can be drawn.
    Drawing,
    /// The deck is exhausted; only the final totals remain.
    Finished,
}

/// Everything that changed with one draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOutcome {
    /// The card just drawn.
    pub card: Card,
    /// The card it was compared against, `None` on the first draw.
    pub previous: Option<Card>,
    /// What the draw matched.
    pub match_kind: MatchKind,
    /// Match totals including this draw.
    pub counts: MatchCounts,
    /// Cards left after this draw.
    pub remaining: usize,
    /// Chance the next draw snaps, `None` once the deck is exhausted.
    pub probability: Option<f64>,
}

/// Final totals shown when the deck runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalSummary {
    /// Match totals for the whole deck.
    pub counts: MatchCounts,
    /// Number of cards drawn.
    pub cards_drawn: usize,
}

impl fmt::Display for FinalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Value Matches: {}", self.counts.values)?;
        write!(f, "Suit Matches: {}", self.counts.suits)
    }
}
