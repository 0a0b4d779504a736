//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::{ParseCardError, RankError, SuitError};
use crate::frame::Frame;

/// Card rank.
///
/// Real ranks run from [`Rank::Ace`] to [`Rank::King`]. [`Rank::NoValue`]
/// marks a card that has not been set yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Placeholder rank of an unset card.
    #[default]
    NoValue,
}

impl Rank {
    /// All real ranks, Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the zero-based index of the rank (Ace = 0, King = 12).
    ///
    /// Returns `None` for [`Rank::NoValue`].
    #[must_use]
    pub const fn index(self) -> Option<u8> {
        match self {
            Self::NoValue => None,
            rank => Some(rank as u8),
        }
    }

    /// Returns the rank `n` steps above this one, if there is one.
    ///
    /// ```
    /// use cardstack::Rank;
    ///
    /// assert_eq!(Rank::Two.offset(2), Some(Rank::Four));
    /// assert_eq!(Rank::King.offset(1), None);
    /// ```
    #[must_use]
    pub fn offset(self, n: u8) -> Option<Self> {
        let index = self.index()?.checked_add(n)?;
        Self::try_from(index).ok()
    }

    /// Returns whether this is a real rank rather than the placeholder.
    #[must_use]
    pub const fn is_value(self) -> bool {
        !matches!(self, Self::NoValue)
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::NoValue => "?",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(RankError::OutOfRange(index))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Suit {
    /// Spades.
    #[default]
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the zero-based index of the suit (Spades = 0, Clubs = 3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the suit `n` steps after this one, if there is one.
    #[must_use]
    pub fn offset(self, n: u8) -> Option<Self> {
        let index = self.index().checked_add(n)?;
        Self::try_from(index).ok()
    }

    /// Returns whether the suit is red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }

    const fn symbol(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = SuitError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(SuitError::OutOfRange(index))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Whether a card is face up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Face up.
    Exposed,
    /// Face down.
    #[default]
    Hidden,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exposed => "+",
            Self::Hidden => "-",
        })
    }
}

/// A playing card together with the frame it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
    /// Whether the card is face up.
    pub visibility: Visibility,
    /// Where the card is drawn.
    pub frame: Frame,
}

impl Card {
    /// An unset card: [`Rank::NoValue`], default suit and visibility, and
    /// [`Frame::NONE`].
    pub const NO_VALUE: Self = Self {
        rank: Rank::NoValue,
        suit: Suit::Spades,
        visibility: Visibility::Hidden,
        frame: Frame::NONE,
    };

    /// Creates an unset card.
    #[must_use]
    pub const fn new() -> Self {
        Self::NO_VALUE
    }

    /// Creates a card with every field given.
    ///
    /// Note: This function does not check the rank. Passing
    /// [`Rank::NoValue`] yields an unset card.
    #[must_use]
    pub const fn with_values(
        rank: Rank,
        suit: Suit,
        visibility: Visibility,
        begin_y: i32,
        begin_x: i32,
    ) -> Self {
        Self {
            rank,
            suit,
            visibility,
            frame: Frame::new(begin_y, begin_x),
        }
    }

    /// Overwrites every field of the card, including its frame.
    pub const fn set(
        &mut self,
        rank: Rank,
        suit: Suit,
        visibility: Visibility,
        begin_y: i32,
        begin_x: i32,
    ) {
        self.rank = rank;
        self.suit = suit;
        self.visibility = visibility;
        self.frame.set(begin_y, begin_x);
    }

    /// Returns whether the card still carries the placeholder rank.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        !self.rank.is_value()
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_exposed(&self) -> bool {
        matches!(self.visibility, Visibility::Exposed)
    }

    /// Turns the card over.
    pub const fn flip(&mut self) {
        self.visibility = match self.visibility {
            Visibility::Exposed => Visibility::Hidden,
            Visibility::Hidden => Visibility::Exposed,
        };
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.rank, self.suit, self.visibility)
    }
}

/// Parses the short notation written by [`Display`](fmt::Display), such as
/// `AS+` or `10H-`. The parsed card has [`Frame::NONE`].
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }

        let mut chars = s.chars();
        let visibility = match chars.next_back() {
            Some('+') => Visibility::Exposed,
            Some('-') => Visibility::Hidden,
            _ => return Err(ParseCardError::InvalidVisibility),
        };
        let suit = chars
            .next_back()
            .and_then(|c| Suit::ALL.into_iter().find(|suit| suit.symbol() == c))
            .ok_or(ParseCardError::InvalidSuit)?;
        let token = chars.as_str();
        let rank = Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol() == token)
            .ok_or(ParseCardError::InvalidRank)?;

        Ok(Self {
            rank,
            suit,
            visibility,
            frame: Frame::NONE,
        })
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
