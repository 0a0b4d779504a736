//! Error types for card conversions.

use thiserror::Error;

/// Errors that can occur when converting a number into a [`Rank`](crate::Rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// Index is past the King.
    #[error("rank index {0} is out of range")]
    OutOfRange(u8),
}

/// Errors that can occur when converting a number into a [`Suit`](crate::Suit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitError {
    /// Index is past the last suit.
    #[error("suit index {0} is out of range")]
    OutOfRange(u8),
}

/// Errors that can occur when parsing a card from its short notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("empty card notation")]
    Empty,
    /// Rank symbol is not one of `A 2..10 J Q K`.
    #[error("invalid rank symbol")]
    InvalidRank,
    /// Suit symbol is not one of `S H D C`.
    #[error("invalid suit symbol")]
    InvalidSuit,
    /// Visibility marker is neither `+` nor `-`.
    #[error("invalid visibility marker")]
    InvalidVisibility,
}
