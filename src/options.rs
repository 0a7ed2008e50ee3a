//! Table configuration options.

use alloc::string::String;

/// Image shown in place of a card that has not been drawn yet.
pub const DEFAULT_CARD_BACK_IMAGE: &str = "https://deckofcardsapi.com/static/img/back.png";

/// Configuration options for a Snap table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use snaprs::SnapOptions;
///
/// let options = SnapOptions::default()
///     .with_probability_precision(1)
///     .with_card_back_image("back.svg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapOptions {
    /// Decimal places used when rendering the match probability as a percentage.
    pub probability_precision: usize,
    /// Image reference for the face-down card placeholder.
    pub card_back_image: String,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            probability_precision: 2,
            card_back_image: String::from(DEFAULT_CARD_BACK_IMAGE),
        }
    }
}

impl SnapOptions {
    /// Sets the number of decimal places for probability labels.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::SnapOptions;
    ///
    /// let options = SnapOptions::default().with_probability_precision(0);
    /// assert_eq!(options.probability_precision, 0);
    /// ```
    #[must_use]
    pub const fn with_probability_precision(mut self, precision: usize) -> Self {
        self.probability_precision = precision;
        self
    }

    /// Sets the card back placeholder image.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::SnapOptions;
    ///
    /// let options = SnapOptions::default().with_card_back_image("back.png");
    /// assert_eq!(options.card_back_image, "back.png");
    /// ```
    #[must_use]
    pub fn with_card_back_image(mut self, image: impl Into<String>) -> Self {
        self.card_back_image = image.into();
        self
    }
}
