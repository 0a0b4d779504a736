//! Last-in-first-out stack of cards.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;
use core::iter::Rev;
use core::slice;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use crate::card::Card;

static NO_VALUE_CARD: Card = Card::NO_VALUE;

/// A stack of cards.
///
/// The stack owns its cards. An empty stack holds no cards at all; reading
/// its head through [`Stack::card`] yields the unset [`Card::NO_VALUE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Stack {
    /// Cards from bottom to top.
    cards: Vec<Card>,
}

impl Stack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` cards.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
        }
    }

    /// Returns whether the stack holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns the top card, or [`Card::NO_VALUE`] if the stack is empty.
    #[must_use]
    pub fn card(&self) -> &Card {
        self.cards.last().unwrap_or(&NO_VALUE_CARD)
    }

    /// Returns the top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the top card mutably, e.g. to flip it.
    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// Returns the stack below the top card.
    ///
    /// Returns `None` when there is at most one card on the stack.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.cards
            .split_last()
            .map(|(_, below)| below)
            .filter(|below| !below.is_empty())
            .map(|below| Self {
                cards: below.to_vec(),
            })
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards from top to bottom.
    pub fn iter(&self) -> Iter<'_> {
        self.cards.iter().rev()
    }

    /// Puts a card on top of the stack.
    ///
    /// Passing `None` or an unset card leaves the stack unchanged.
    ///
    /// ```
    /// use cardstack::{Card, Rank, Stack, Suit, Visibility};
    ///
    /// let mut stack = Stack::new();
    /// stack.push(Card::with_values(Rank::Ace, Suit::Spades, Visibility::Exposed, 0, 0));
    /// stack.push(None);
    /// assert_eq!(stack.len(), 1);
    /// ```
    pub fn push(&mut self, card: impl Into<Option<Card>>) {
        match card.into() {
            Some(card) if !card.is_unset() => self.cards.push(card),
            Some(_) => trace!("ignoring push of an unset card"),
            None => trace!("ignoring push of no card"),
        }
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` and leaves the stack unchanged if it is empty.
    pub fn pop(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        if card.is_none() {
            trace!("pop on empty stack");
        }
        card
    }

    /// Returns an independent copy of the stack and all of its cards.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Returns the stack with its cards in reverse order.
    ///
    /// The stack itself is left untouched. A stack with at most one card is
    /// its own reverse and is returned borrowed.
    ///
    /// ```
    /// use std::borrow::Cow;
    ///
    /// use cardstack::Stack;
    ///
    /// let stack = Stack::new();
    /// assert!(matches!(stack.reverse(), Cow::Borrowed(_)));
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Cow<'_, Self> {
        if self.len() <= 1 {
            return Cow::Borrowed(self);
        }

        let mut source = self.duplicate();
        let mut reversed = Self::with_capacity(self.len());
        while let Some(card) = source.pop() {
            reversed.push(card);
        }
        Cow::Owned(reversed)
    }

    /// Shuffles the cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Iterator over a stack's cards from top to bottom.
pub type Iter<'a> = Rev<slice::Iter<'a, Card>>;

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Card;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pushes the cards in iteration order, so the last card ends up on top.
impl Extend<Card> for Stack {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.push(card);
        }
    }
}

impl FromIterator<Card> for Stack {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

/// Writes the cards top first, separated by spaces, or `-` when empty.
impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cards = self.iter();
        let Some(top) = cards.next() else {
            return f.write_str("-");
        };
        write!(f, "{top}")?;
        for card in cards {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}
