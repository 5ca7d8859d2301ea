// Proptest generators for domain types. Hands are drawn as subsequences of
// the fixed 24-card deck, so uniqueness holds by construction.

use proptest::prelude::*;

use super::cards_types::{Card, Rank, Suit};
use super::dealing::full_deck;

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        Just(Rank::Nine),
        Just(Rank::Ten),
        Just(Rank::Jack),
        Just(Rank::Queen),
        Just(Rank::King),
        Just(Rank::Ace),
    ]
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// A hand of up to `max` unique cards.
pub fn hand_up_to(max: usize) -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(full_deck(), 0..=max)
}
