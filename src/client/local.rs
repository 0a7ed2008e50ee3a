use core::sync::atomic::{AtomicU32, Ordering};

use alloc::format;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, standard_deck};
use crate::error::DeckError;
use crate::sync::Mutex;

use super::{DeckClient, DeckId, DeckState, DrawnCard};

/// An in-process deck client backed by a seeded RNG.
///
/// Each call to [`shuffle_new_deck`](DeckClient::shuffle_new_deck) creates
/// an independent deck. Older decks stay drawable until they run out: an
/// exhausted deck reports [`DeckError::Exhausted`] until the next shuffle,
/// which drops it. Abandoned decks are dropped with [`release`](Self::release).
/// The same seed always yields the same sequence of decks.
pub struct LocalDeckClient {
    decks: Mutex<HashMap<DeckId, Vec<Card>>>,
    next_id: AtomicU32,
    rng: Mutex<ChaCha8Rng>,
}

impl LocalDeckClient {
    /// Creates a client with the given shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{DeckClient, LocalDeckClient};
    ///
    /// let client = LocalDeckClient::new(7);
    /// let deck = client.shuffle_new_deck().unwrap();
    /// assert_eq!(deck.remaining, 52);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            decks: Mutex::new(HashMap::new()),
            next_id: AtomicU32::new(1),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Replaces the cards of `deck_id` with `draws`, first element drawn first.
    ///
    /// Useful for replaying a known order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck id was never issued by this client.
    pub fn stack_deck(&self, deck_id: &DeckId, draws: &[Card]) -> Result<(), DeckError> {
        let mut decks = self.decks.lock();
        let cards = decks.get_mut(deck_id).ok_or(DeckError::UnknownDeck)?;
        *cards = draws.iter().rev().cloned().collect();
        Ok(())
    }

    /// Drops `deck_id` and its remaining cards.
    ///
    /// Returns `false` if the deck was not held by this client.
    pub fn release(&self, deck_id: &DeckId) -> bool {
        self.decks.lock().remove(deck_id).is_some()
    }

    /// Returns how many decks the client currently holds.
    pub fn deck_count(&self) -> usize {
        self.decks.lock().len()
    }

    /// Returns the number of cards left in `deck_id`, if it exists.
    pub fn remaining(&self, deck_id: &DeckId) -> Option<usize> {
        self.decks.lock().get(deck_id).map(Vec::len)
    }
}

impl DeckClient for LocalDeckClient {
    fn shuffle_new_deck(&self) -> Result<DeckState, DeckError> {
        let mut cards = standard_deck();
        cards.shuffle(&mut *self.rng.lock());

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let deck_id = DeckId::new(format!("local-{id:04}"));
        let remaining = cards.len();
        let mut decks = self.decks.lock();
        decks.retain(|_, held| !held.is_empty());
        decks.insert(deck_id.clone(), cards);
        drop(decks);

        tracing::debug!(deck_id = %deck_id, remaining, "shuffled local deck");

        Ok(DeckState {
            deck_id,
            remaining,
            shuffled: true,
        })
    }

    fn draw_one(&self, deck_id: &DeckId) -> Result<DrawnCard, DeckError> {
        let mut decks = self.decks.lock();
        let cards = decks.get_mut(deck_id).ok_or(DeckError::UnknownDeck)?;
        let card = cards.pop().ok_or(DeckError::Exhausted)?;
        Ok(DrawnCard {
            card,
            remaining: cards.len(),
        })
    }
}
