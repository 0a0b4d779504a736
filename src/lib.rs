//! Playing cards, screen frames, and a last-in-first-out card stack for
//! terminal solitaire games, with optional `no_std` support.
//!
//! The crate provides a [`Stack`] of [`Card`]s, each carrying the [`Frame`]
//! it is drawn in, together with equality helpers that also accept missing
//! values.
//!
//! # Example
//!
//! ```
//! use cardstack::{Card, Rank, Stack, Suit, Visibility};
//!
//! let mut stack = Stack::new();
//! stack.push(Card::with_values(Rank::Ace, Suit::Spades, Visibility::Exposed, 0, 0));
//! assert_eq!(stack.len(), 1);
//! assert_eq!(stack.pop().map(|card| card.rank), Some(Rank::Ace));
//! assert!(stack.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod equality;
pub mod error;
pub mod frame;
pub mod options;
pub mod stack;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, Visibility};
pub use equality::{cards_equal, frames_equal, stacks_equal};
pub use error::{ParseCardError, RankError, SuitError};
pub use frame::Frame;
pub use options::DeckOptions;
pub use stack::Stack;
