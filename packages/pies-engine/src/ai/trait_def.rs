//! Strategy trait for AI opponents.
//!
//! Strategies are external callers of the engine: they receive a read-only
//! state view plus the legal cards the engine already computed, and they
//! act only through the engine's public operations. They get no privileged
//! access to the rules.

use crate::domain::state::{GameState, Seat};
use crate::domain::Card;

pub trait Strategy: Send + Sync {
    /// Pick one of the `available` cards to play, or None to decline.
    /// Implementations must only return cards from `available`.
    fn select_card(&self, state: &GameState, seat: Seat, available: &[Card]) -> Option<Card>;

    /// Whether to take the pile instead of playing. With no available card
    /// the buda is the only legal action, which is also the default.
    fn should_take_buda(&self, _state: &GameState, _seat: Seat, available: &[Card]) -> bool {
        available.is_empty()
    }
}
