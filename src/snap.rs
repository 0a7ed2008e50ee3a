//! Match counting and next-draw match probability.
//!
//! This is the engine behind the Snap table: [`record_draw`] compares each
//! newly drawn card with the one before it, and
//! [`estimate_match_probability`] turns the running [`MatchCounts`] and the
//! number of cards left into a probability that the next card snaps.
//!
//! The probability is a linear approximation, not the hypergeometric
//! answer. It is kept exactly as the table has always displayed it.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::card::{CARDS_PER_SUIT, CARDS_PER_VALUE, Card};

/// Running totals of matches found while drawing through one deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchCounts {
    /// Draws whose value equalled the previous card's value.
    pub values: u32,
    /// Draws that matched only by suit.
    pub suits: u32,
}

impl MatchCounts {
    /// Creates counts from explicit totals.
    #[must_use]
    pub const fn new(values: u32, suits: u32) -> Self {
        Self { values, suits }
    }

    /// Total number of snaps of either kind.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.values.saturating_add(self.suits)
    }

    /// Compares `current` against `previous` and bumps the matching counter.
    ///
    /// Returns the kind of match found. See [`record_draw`].
    pub fn record(&mut self, previous: Option<&Card>, current: &Card) -> MatchKind {
        let (updated, kind) = record_draw(previous, current, *self);
        *self = updated;
        kind
    }
}

/// What a draw matched against the card before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Same value as the previous card.
    Value,
    /// Same suit, different value.
    Suit,
    /// No match, or no previous card.
    NoMatch,
}

impl MatchKind {
    /// Returns `true` for a value or suit match.
    #[must_use]
    pub const fn is_match(self) -> bool {
        !matches!(self, Self::NoMatch)
    }

    /// Banner text shown when a snap happens.
    #[must_use]
    pub const fn snap_label(self) -> Option<&'static str> {
        match self {
            Self::Value => Some("snap value!"),
            Self::Suit => Some("snap suit!"),
            Self::NoMatch => None,
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "value",
            Self::Suit => "suit",
            Self::NoMatch => "none",
        })
    }
}

/// Classifies `current` against `previous`.
///
/// Value is checked first; suit only counts when the values differ.
#[must_use]
pub fn match_kind(previous: &Card, current: &Card) -> MatchKind {
    if current.value == previous.value {
        MatchKind::Value
    } else if current.suit == previous.suit {
        MatchKind::Suit
    } else {
        MatchKind::NoMatch
    }
}

/// Records a draw against the running counts.
///
/// On the first draw of a deck there is no `previous` card and nothing
/// changes. Otherwise at most one counter is incremented: a card matching
/// both value and suit counts as a value match only.
///
/// # Example
///
/// ```
/// use snaprs::{Card, MatchCounts, MatchKind, Suit, record_draw};
///
/// let previous = Card::new(Suit::Hearts, 7);
/// let current = Card::new(Suit::Spades, 7);
/// let (counts, kind) = record_draw(Some(&previous), &current, MatchCounts::default());
///
/// assert_eq!(kind, MatchKind::Value);
/// assert_eq!(counts, MatchCounts::new(1, 0));
/// ```
#[must_use]
pub fn record_draw(
    previous: Option<&Card>,
    current: &Card,
    counts: MatchCounts,
) -> (MatchCounts, MatchKind) {
    let Some(previous) = previous else {
        return (counts, MatchKind::NoMatch);
    };

    let kind = match_kind(previous, current);
    let mut updated = counts;
    match kind {
        MatchKind::Value => updated.values = updated.values.saturating_add(1),
        MatchKind::Suit => updated.suits = updated.suits.saturating_add(1),
        MatchKind::NoMatch => {}
    }

    (updated, kind)
}

/// Every term of the match-probability formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchBreakdown {
    /// Cards left in the deck after the latest draw.
    pub remaining_cards: usize,
    /// `13 - suits`; negative when more suit matches were seen than a suit holds.
    pub suit_matches_remaining: f64,
    /// `suit_matches_remaining / remaining_cards`.
    pub suit_probability: f64,
    /// `4 - values`; negative when the count exceeds the cards per value.
    pub value_matches_remaining: f64,
    /// `value_matches_remaining / remaining_cards`.
    pub value_probability: f64,
    /// `suit + value matches remaining - remaining_cards`.
    pub both_matches_remaining: f64,
    /// Overlap term, zero unless `both_matches_remaining` is positive.
    pub both_probability: f64,
    /// Inclusion-exclusion sum before clamping.
    pub combined: f64,
    /// `combined` clamped to `[0, 1]`.
    pub probability: f64,
}

impl MatchBreakdown {
    /// Evaluates the formula for the given state.
    ///
    /// See [`estimate_match_probability`] for the precondition on
    /// `remaining_cards`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    pub fn compute(remaining_cards: usize, counts: MatchCounts) -> Self {
        debug_assert!(
            remaining_cards > 0,
            "match probability is undefined for an exhausted deck"
        );

        let remaining = remaining_cards as f64;

        let suit_matches_remaining = CARDS_PER_SUIT as f64 - f64::from(counts.suits);
        let suit_probability = suit_matches_remaining / remaining;

        let value_matches_remaining = CARDS_PER_VALUE as f64 - f64::from(counts.values);
        let value_probability = value_matches_remaining / remaining;

        let both_matches_remaining = suit_matches_remaining + value_matches_remaining - remaining;
        let both_probability = if both_matches_remaining > 0.0 {
            both_matches_remaining / remaining
        } else {
            0.0
        };

        let combined = suit_probability + value_probability - both_probability;

        Self {
            remaining_cards,
            suit_matches_remaining,
            suit_probability,
            value_matches_remaining,
            value_probability,
            both_matches_remaining,
            both_probability,
            combined,
            probability: combined.clamp(0.0, 1.0),
        }
    }
}

/// Estimates the probability that the next draw snaps with the current card.
///
/// `remaining_cards` is the count after the latest draw and `counts` holds
/// every match up to and including that draw. The result is always in
/// `[0, 1]`; counts above the per-suit or per-value totals drive terms
/// negative and are absorbed by the clamp.
///
/// Callers must not ask at `remaining_cards == 0`: the deck is over and
/// the final totals should be shown instead. Debug builds assert this.
///
/// # Example
///
/// ```
/// use snaprs::{MatchCounts, estimate_match_probability};
///
/// let p = estimate_match_probability(50, MatchCounts::new(1, 0));
/// assert!((p - 0.32).abs() < 1e-12);
/// ```
#[must_use]
pub fn estimate_match_probability(remaining_cards: usize, counts: MatchCounts) -> f64 {
    MatchBreakdown::compute(remaining_cards, counts).probability
}

#[cfg(feature = "std")]
fn round(value: f64) -> f64 {
    value.round()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round(value: f64) -> f64 {
    libm::round(value)
}

/// Converts a probability to a percentage rounded to `precision` decimals.
#[must_use]
pub fn rounded_percent(probability: f64, precision: usize) -> f64 {
    let mut scale = 1.0;
    for _ in 0..precision {
        scale *= 10.0;
    }
    round(probability * 100.0 * scale) / scale
}

/// Formats a probability as a percentage, e.g. `33.33%`.
///
/// Ties round half away from zero, so 9/32 renders as `28.13%`.
///
/// # Example
///
/// ```
/// use snaprs::percent_label;
///
/// assert_eq!(percent_label(1.0 / 3.0, 2), "33.33%");
/// assert_eq!(percent_label(0.32, 2), "32.00%");
/// ```
#[must_use]
pub fn percent_label(probability: f64, precision: usize) -> String {
    format!("{:.*}%", precision, rounded_percent(probability, precision))
}
