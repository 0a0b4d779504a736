//! Deck building options.

use crate::card::Visibility;
use crate::frame::Frame;

/// Configuration for building a deck with [`deck::build`](crate::deck::build).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardstack::{DeckOptions, Visibility};
///
/// let options = DeckOptions::default()
///     .with_decks(2)
///     .with_visibility(Visibility::Exposed)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of 52-card decks.
    pub decks: u8,
    /// Visibility given to every card.
    pub visibility: Visibility,
    /// Frame given to every card.
    pub origin: Frame,
    /// Shuffle seed. `None` leaves the cards in suit and rank order.
    pub seed: Option<u64>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            visibility: Visibility::Hidden,
            origin: Frame::NONE,
            seed: None,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the visibility of every card.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::{DeckOptions, Visibility};
    ///
    /// let options = DeckOptions::default().with_visibility(Visibility::Exposed);
    /// assert_eq!(options.visibility, Visibility::Exposed);
    /// ```
    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the frame origin of every card.
    #[must_use]
    pub const fn with_origin(mut self, begin_y: i32, begin_x: i32) -> Self {
        self.origin = Frame::new(begin_y, begin_x);
        self
    }

    /// Shuffles the deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_seed(7);
    /// assert_eq!(options.seed, Some(7));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
