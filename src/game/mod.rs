//! Draw sequencing for a Snap table.

use alloc::string::String;

use crate::card::Card;
use crate::client::{DeckClient, DeckState};
use crate::error::GameError;
use crate::options::SnapOptions;
use crate::snap::{MatchCounts, MatchKind, estimate_match_probability, percent_label};
use crate::sync::Mutex;

pub mod state;

pub use state::{DrawOutcome, FinalSummary, GameState};

#[derive(Debug, Clone)]
struct Table {
    state: GameState,
    deck: Option<DeckState>,
    current: Option<Card>,
    previous: Option<Card>,
    counts: MatchCounts,
    last_match: MatchKind,
    cards_drawn: usize,
}

impl Table {
    const fn new() -> Self {
        Self {
            state: GameState::WaitingForDeck,
            deck: None,
            current: None,
            previous: None,
            counts: MatchCounts::new(0, 0),
            last_match: MatchKind::NoMatch,
            cards_drawn: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.deck.as_ref().map_or(0, |deck| deck.remaining)
    }

    fn probability(&self) -> Option<f64> {
        let remaining = self.remaining();
        (self.deck.is_some() && remaining > 0)
            .then(|| estimate_match_probability(remaining, self.counts))
    }
}

/// A Snap table that draws through one deck at a time.
///
/// The table owns a [`DeckClient`], the current deck, the last two cards
/// and the running [`MatchCounts`]. Every [`draw`](Self::draw) compares the
/// new card with the previous one and refreshes the match probability.
///
/// Draws are serialized: the table lock is held for the whole draw,
/// including the client call.
pub struct SnapGame<C> {
    client: C,
    /// Table options.
    pub options: SnapOptions,
    table: Mutex<Table>,
}

impl<C: DeckClient> SnapGame<C> {
    /// Creates a table with no deck.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{GameState, LocalDeckClient, SnapGame, SnapOptions};
    ///
    /// let game = SnapGame::new(LocalDeckClient::new(42), SnapOptions::default());
    /// assert_eq!(game.state(), GameState::WaitingForDeck);
    /// ```
    #[must_use]
    pub const fn new(client: C, options: SnapOptions) -> Self {
        Self {
            client,
            options,
            table: Mutex::new(Table::new()),
        }
    }

    /// Returns the deck client.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Shuffles a new deck and starts a new game on it.
    ///
    /// Match counts and cards from any earlier game are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot shuffle. The table is left
    /// unchanged in that case.
    pub fn shuffle_new_deck(&self) -> Result<DeckState, GameError> {
        let mut table = self.table.lock();
        let deck = self.client.shuffle_new_deck().inspect_err(|err| {
            tracing::warn!(%err, "error initializing and shuffling the deck");
        })?;

        tracing::debug!(deck_id = %deck.deck_id, remaining = deck.remaining, "new game");

        let mut fresh = Table::new();
        fresh.state = if deck.remaining == 0 {
            GameState::Finished
        } else {
            GameState::Drawing
        };
        fresh.deck = Some(deck.clone());
        *table = fresh;

        Ok(deck)
    }

    /// Draws one card and records any match against the previous card.
    ///
    /// When the draw empties the deck the game moves to
    /// [`GameState::Finished`] and the outcome carries no probability.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoDeck`] before the first shuffle,
    /// [`GameError::Finished`] once the deck is exhausted, or the client's
    /// error. A failed draw leaves the table unchanged.
    pub fn draw(&self) -> Result<DrawOutcome, GameError> {
        let mut table = self.table.lock();
        let deck_id = match (table.state, table.deck.as_ref()) {
            (GameState::Finished, _) => return Err(GameError::Finished),
            (GameState::WaitingForDeck, _) | (_, None) => return Err(GameError::NoDeck),
            (GameState::Drawing, Some(deck)) => deck.deck_id.clone(),
        };

        let drawn = self.client.draw_one(&deck_id).inspect_err(|err| {
            tracing::warn!(%deck_id, %err, "error dealing card");
        })?;

        let previous = table.current.take();
        let mut counts = table.counts;
        let match_kind = counts.record(previous.as_ref(), &drawn.card);

        table.previous.clone_from(&previous);
        table.current = Some(drawn.card.clone());
        table.counts = counts;
        table.last_match = match_kind;
        table.cards_drawn += 1;
        if let Some(deck) = table.deck.as_mut() {
            deck.remaining = drawn.remaining;
        }
        if drawn.remaining == 0 {
            table.state = GameState::Finished;
        }
        let probability = table.probability();
        drop(table);

        tracing::debug!(%deck_id, card = %drawn.card, remaining = drawn.remaining, "drew card");
        tracing::trace!(%match_kind, values = counts.values, suits = counts.suits, "match check");

        Ok(DrawOutcome {
            card: drawn.card,
            previous,
            match_kind,
            counts,
            remaining: drawn.remaining,
            probability,
        })
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.table.lock().state
    }

    /// Returns the current deck, if one has been shuffled.
    pub fn deck(&self) -> Option<DeckState> {
        self.table.lock().deck.clone()
    }

    /// Returns the number of cards left in the current deck.
    ///
    /// Returns 0 when no deck has been shuffled.
    pub fn remaining_cards(&self) -> usize {
        self.table.lock().remaining()
    }

    /// Returns the match totals for the current deck.
    pub fn match_counts(&self) -> MatchCounts {
        self.table.lock().counts
    }

    /// Returns the most recently drawn card.
    pub fn current_card(&self) -> Option<Card> {
        self.table.lock().current.clone()
    }

    /// Returns the card drawn before the current one.
    pub fn previous_card(&self) -> Option<Card> {
        self.table.lock().previous.clone()
    }

    /// Returns what the latest draw matched.
    pub fn last_match(&self) -> MatchKind {
        self.table.lock().last_match
    }

    /// Returns how many cards have been drawn from the current deck.
    pub fn cards_drawn(&self) -> usize {
        self.table.lock().cards_drawn
    }

    /// Returns the chance that the next draw snaps.
    ///
    /// Returns `None` when there is no deck or no cards are left.
    pub fn probability(&self) -> Option<f64> {
        self.table.lock().probability()
    }

    /// Returns the probability as a percentage label, e.g. `33.33%`.
    pub fn probability_label(&self) -> Option<String> {
        self.probability()
            .map(|p| percent_label(p, self.options.probability_precision))
    }

    /// Returns the final totals once the deck is exhausted.
    pub fn summary(&self) -> Option<FinalSummary> {
        let table = self.table.lock();
        (table.state == GameState::Finished).then_some(FinalSummary {
            counts: table.counts,
            cards_drawn: table.cards_drawn,
        })
    }

    /// Forgets the current deck and returns to [`GameState::WaitingForDeck`].
    pub fn reset(&self) {
        self.table.replace(Table::new());
    }
}
