//! Card types and deck constants.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::CardParseError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
/// Number of suits in a deck.
pub const SUIT_COUNT: usize = 4;
/// Number of distinct values (ranks) in a deck.
pub const VALUE_COUNT: usize = 13;
/// Cards sharing one suit in a fresh deck.
pub const CARDS_PER_SUIT: usize = DECK_SIZE / SUIT_COUNT;
/// Cards sharing one value in a fresh deck.
pub const CARDS_PER_VALUE: usize = DECK_SIZE / VALUE_COUNT;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; SUIT_COUNT] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the upper-case label used by the deck API.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clubs => "CLUBS",
            Self::Diamonds => "DIAMONDS",
            Self::Hearts => "HEARTS",
            Self::Spades => "SPADES",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Suit {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.label().eq_ignore_ascii_case(s.trim()))
            .ok_or(CardParseError::InvalidSuit)
    }
}

const VALUE_LABELS: [&str; VALUE_COUNT] = [
    "ACE", "2", "3", "4", "5", "6", "7", "8", "9", "10", "JACK", "QUEEN", "KING",
];

fn parse_value(label: &str) -> Result<u8, CardParseError> {
    let label = label.trim();
    if let Some(index) = VALUE_LABELS
        .iter()
        .position(|known| known.eq_ignore_ascii_case(label))
    {
        return Ok(index as u8 + 1);
    }

    match label.parse::<u8>() {
        Ok(value @ 1..=13) => Ok(value),
        _ => Err(CardParseError::InvalidValue),
    }
}

/// A drawn playing card.
///
/// Cards are immutable once drawn; matching only looks at `value` and
/// `suit`, the image is an opaque reference for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The value of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub value: u8,
    /// Image reference for the card face. Empty when unknown.
    pub image: String,
}

impl Card {
    /// Creates a new card without an image.
    ///
    /// Note: This function does not validate the value. Values outside 1..=13
    /// are accepted and still compare by equality when matching.
    #[must_use]
    pub const fn new(suit: Suit, value: u8) -> Self {
        Self {
            suit,
            value,
            image: String::new(),
        }
    }

    /// Attaches an image reference to the card.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Builds a card from deck API labels such as `("QUEEN", "HEARTS")`.
    ///
    /// Values may also be plain numerals `"1"` through `"13"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value or suit label is not recognized.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{Card, Suit};
    ///
    /// let card = Card::from_labels("QUEEN", "hearts", "qh.png").unwrap();
    /// assert_eq!(card.value, 12);
    /// assert_eq!(card.suit, Suit::Hearts);
    /// ```
    pub fn from_labels(
        value: &str,
        suit: &str,
        image: impl Into<String>,
    ) -> Result<Self, CardParseError> {
        let value = parse_value(value)?;
        let suit = suit.parse()?;
        Ok(Self::new(suit, value).with_image(image))
    }

    /// Returns the deck API label for the value, or `"?"` if out of range.
    #[must_use]
    pub fn value_label(&self) -> &'static str {
        usize::from(self.value)
            .checked_sub(1)
            .and_then(|index| VALUE_LABELS.get(index))
            .copied()
            .unwrap_or("?")
    }

    /// Returns the two-character card code, e.g. `"AS"`, `"0H"` for the ten
    /// of hearts, `"KD"`.
    #[must_use]
    pub fn code(&self) -> String {
        let value = match self.value {
            1 => 'A',
            10 => '0',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            value @ 2..=9 => char::from(b'0' + value),
            _ => '?',
        };
        let suit = self.suit.label().chars().next().unwrap_or('?');
        let mut code = String::with_capacity(2);
        code.push(value);
        code.push(suit);
        code
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.value_label(), self.suit)
    }
}

/// Builds an unshuffled 52-card deck, suit by suit.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for value in 1..=VALUE_COUNT as u8 {
            cards.push(Card::new(suit, value));
        }
    }
    cards
}
