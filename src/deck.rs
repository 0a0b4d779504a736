//! Building full decks as stacks.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::DeckOptions;
use crate::stack::Stack;

/// Builds a stack holding `options.decks` full decks.
///
/// Cards are pushed suit by suit in [`Suit::ALL`] order, Ace to King, so the
/// King of Clubs ends up on top of an unshuffled deck. If a seed is set the
/// stack is then shuffled deterministically.
///
/// ```
/// use cardstack::{DECK_SIZE, DeckOptions, deck};
///
/// let stack = deck::build(&DeckOptions::default().with_seed(1));
/// assert_eq!(stack.len(), DECK_SIZE);
/// ```
#[must_use]
pub fn build(options: &DeckOptions) -> Stack {
    let mut stack = Stack::with_capacity(usize::from(options.decks) * DECK_SIZE);

    for _ in 0..options.decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                stack.push(Card {
                    rank,
                    suit,
                    visibility: options.visibility,
                    frame: options.origin,
                });
            }
        }
    }

    if let Some(seed) = options.seed {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        stack.shuffle(&mut rng);
    }

    debug!(
        decks = options.decks,
        cards = stack.len(),
        shuffled = options.seed.is_some(),
        "built deck"
    );
    stack
}
