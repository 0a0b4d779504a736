//! Property tests for stacks and equality.

extern crate alloc;

use alloc::borrow::Cow;

use cardstack::{Card, Frame, Rank, Stack, Suit, Visibility, cards_equal, frames_equal, stacks_equal};
use proptest::prelude::*;

fn frame_strategy() -> impl Strategy<Value = Frame> {
    (0i32..40, 0i32..120).prop_map(|(y, x)| Frame::new(y, x))
}

fn card_strategy() -> impl Strategy<Value = Card> {
    let rank = (0u8..13).prop_map(|i| Rank::try_from(i).unwrap());
    let suit = (0u8..4).prop_map(|i| Suit::try_from(i).unwrap());
    let visibility = prop_oneof![Just(Visibility::Exposed), Just(Visibility::Hidden)];
    (rank, suit, visibility, frame_strategy()).prop_map(|(rank, suit, visibility, frame)| Card {
        rank,
        suit,
        visibility,
        frame,
    })
}

fn stack_strategy() -> impl Strategy<Value = Stack> {
    proptest::collection::vec(card_strategy(), 0..12).prop_map(Stack::from_iter)
}

proptest! {
    #[test]
    fn equality_is_reflexive(frame in frame_strategy(), card in card_strategy(), stack in stack_strategy()) {
        prop_assert!(frames_equal(Some(&frame), Some(&frame)));
        prop_assert!(cards_equal(Some(&card), Some(&card)));
        prop_assert!(stacks_equal(Some(&stack), Some(&stack)));
        prop_assert!(!stacks_equal(Some(&stack), None));
    }

    #[test]
    fn equality_is_symmetric(a in stack_strategy(), b in stack_strategy()) {
        prop_assert_eq!(stacks_equal(Some(&a), Some(&b)), stacks_equal(Some(&b), Some(&a)));
        prop_assert_eq!(
            cards_equal(a.top(), b.top()),
            cards_equal(b.top(), a.top())
        );
        prop_assert_eq!(stacks_equal(Some(&a), Some(&b)), a == b);
    }

    #[test]
    fn push_increments_length(stack in stack_strategy(), card in card_strategy()) {
        let mut stack = stack;
        let before = stack.len();
        stack.push(card);
        prop_assert_eq!(stack.len(), before + 1);
        prop_assert!(!stack.is_empty());
        prop_assert_eq!(stack.pop(), Some(card));
        prop_assert_eq!(stack.len(), before);
    }

    #[test]
    fn duplicate_equals_original(stack in stack_strategy()) {
        let copy = stack.duplicate();
        prop_assert!(stacks_equal(Some(&stack), Some(&copy)));
    }

    #[test]
    fn reverse_leaves_input_and_twice_restores(stack in stack_strategy()) {
        let before = stack.duplicate();
        let reversed = stack.reverse();
        let borrowed = matches!(reversed, Cow::Borrowed(_));
        prop_assert_eq!(borrowed, stack.len() <= 1);
        prop_assert_eq!(reversed.len(), stack.len());

        let twice = reversed.reverse().into_owned();
        prop_assert!(stacks_equal(Some(&stack), Some(&before)));
        prop_assert!(stacks_equal(Some(&twice), Some(&before)));
    }
}
