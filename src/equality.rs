//! Equality over possibly missing values.
//!
//! Two missing values are equal, a missing value never equals a present
//! one, and two present values compare structurally.
//!
//! ```
//! use cardstack::{Frame, frames_equal};
//!
//! let frame = Frame::new(5, 10);
//! assert!(frames_equal(None, None));
//! assert!(!frames_equal(Some(&frame), None));
//! assert!(frames_equal(Some(&frame), Some(&Frame::new(5, 10))));
//! ```

use crate::card::Card;
use crate::frame::Frame;
use crate::stack::Stack;

/// Returns whether two frames have the same origin.
#[must_use]
pub fn frames_equal(a: Option<&Frame>, b: Option<&Frame>) -> bool {
    a == b
}

/// Returns whether two cards have the same rank, suit, visibility and frame.
#[must_use]
pub fn cards_equal(a: Option<&Card>, b: Option<&Card>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.rank == b.rank
                && a.suit == b.suit
                && a.visibility == b.visibility
                && frames_equal(Some(&a.frame), Some(&b.frame))
        }
        _ => false,
    }
}

/// Returns whether two stacks hold equal cards in the same order.
#[must_use]
pub fn stacks_equal(a: Option<&Stack>, b: Option<&Stack>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .zip(b.iter())
                    .all(|(a, b)| cards_equal(Some(a), Some(b)))
        }
        _ => false,
    }
}
