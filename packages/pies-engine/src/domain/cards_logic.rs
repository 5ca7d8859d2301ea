//! Card comparison rules: rank beating and the Queen of Clubs override.

use super::cards_types::{Card, Rank, Suit, QUEEN_OF_CLUBS};

/// True if `a` strictly outranks `b` (9 < 10 < J < Q < K < A), suits ignored.
pub fn outranks(a: Card, b: Card) -> bool {
    a.rank > b.rank
}

/// Whether the Queen of Clubs override applies against `top`.
///
/// The Queen of Clubs beats any top card except a club ranked Queen or
/// higher: the King and Ace of Clubs block it, and an equal rank never
/// beats under the same-suit rule.
pub fn queen_of_clubs_beats(top: Card) -> bool {
    !(top.suit == Suit::Clubs && top.rank >= Rank::Queen)
}

/// Whether a freshly played card counts as having beaten the card it
/// landed on. Legality has already been enforced at this point, so a beat
/// is either a strict rank win or the Queen of Clubs.
pub fn play_beats(card: Card, previous: Card) -> bool {
    outranks(card, previous) || card == QUEEN_OF_CLUBS
}

/// Lowest-ranked card of `suit` held in `hand`, if any. The 24-card deck
/// holds one card per rank per suit, so the minimum is unique.
pub fn lowest_of_suit(hand: &[Card], suit: Suit) -> Option<Card> {
    hand.iter()
        .copied()
        .filter(|c| c.suit == suit)
        .min_by_key(|c| c.rank)
}
