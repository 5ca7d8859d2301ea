//! Heuristic strategy - the "medium" difficulty.

use super::trait_def::Strategy;
use crate::domain::state::{GameState, Seat};
use crate::domain::{Card, QUEEN_OF_CLUBS};

/// Rule-of-thumb play: grab the color assignment while it is open, then
/// push the highest card of the own color, then the highest card overall.
pub struct HeuristicStrategy;

pub(crate) fn highest(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().max_by_key(|c| c.rank)
}

pub(crate) fn lowest(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().min_by_key(|c| c.rank)
}

impl Strategy for HeuristicStrategy {
    fn select_card(&self, state: &GameState, seat: Seat, available: &[Card]) -> Option<Card> {
        if available.is_empty() {
            return None;
        }
        if !state.colors_assigned && available.contains(&QUEEN_OF_CLUBS) {
            return Some(QUEEN_OF_CLUBS);
        }
        if let Some(color) = state.player(seat).and_then(|p| p.assigned_color) {
            let own: Vec<Card> = available.iter().copied().filter(|c| c.suit == color).collect();
            if let Some(card) = highest(&own) {
                return Some(card);
            }
        }
        highest(available)
    }
}
