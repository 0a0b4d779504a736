//! Deck building tests.

use std::collections::HashSet;

use cardstack::{DECK_SIZE, DeckOptions, Frame, Rank, Suit, Visibility, deck, stacks_equal};

#[test]
fn options_builder_sets_fields() {
    let options = DeckOptions::default()
        .with_decks(3)
        .with_visibility(Visibility::Exposed)
        .with_origin(4, 8)
        .with_seed(9);

    assert_eq!(options.decks, 3);
    assert_eq!(options.visibility, Visibility::Exposed);
    assert_eq!(options.origin, Frame::new(4, 8));
    assert_eq!(options.seed, Some(9));
}

#[test]
fn default_options() {
    let options = DeckOptions::default();
    assert_eq!(options.decks, 1);
    assert_eq!(options.visibility, Visibility::Hidden);
    assert_eq!(options.origin, Frame::NONE);
    assert_eq!(options.seed, None);
}

#[test]
fn unshuffled_deck_is_in_order() {
    let stack = deck::build(&DeckOptions::default());

    assert_eq!(stack.len(), DECK_SIZE);
    assert_eq!(stack.card().rank, Rank::King);
    assert_eq!(stack.card().suit, Suit::Clubs);
    assert_eq!(stack.cards()[0].rank, Rank::Ace);
    assert_eq!(stack.cards()[0].suit, Suit::Spades);
}

#[test]
fn deck_holds_each_card_once() {
    let stack = deck::build(&DeckOptions::default().with_seed(3));
    let distinct: HashSet<(Rank, Suit)> = stack.iter().map(|card| (card.rank, card.suit)).collect();

    assert_eq!(distinct.len(), DECK_SIZE);
    assert!(stack.iter().all(|card| !card.is_unset()));
}

#[test]
fn cards_take_configured_visibility_and_origin() {
    let options = DeckOptions::default()
        .with_visibility(Visibility::Exposed)
        .with_origin(2, 7);
    let stack = deck::build(&options);

    assert!(stack.iter().all(|card| card.is_exposed()));
    assert!(stack.iter().all(|card| card.frame == Frame::new(2, 7)));
}

#[test]
fn multiple_decks() {
    let stack = deck::build(&DeckOptions::default().with_decks(2));
    assert_eq!(stack.len(), 2 * DECK_SIZE);
}

#[test]
fn zero_decks_is_empty() {
    let stack = deck::build(&DeckOptions::default().with_decks(0));
    assert!(stack.is_empty());
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let a = deck::build(&DeckOptions::default().with_seed(42));
    let b = deck::build(&DeckOptions::default().with_seed(42));
    let c = deck::build(&DeckOptions::default().with_seed(43));
    let ordered = deck::build(&DeckOptions::default());

    assert!(stacks_equal(Some(&a), Some(&b)));
    assert!(!stacks_equal(Some(&a), Some(&c)));
    assert!(!stacks_equal(Some(&a), Some(&ordered)));
}
