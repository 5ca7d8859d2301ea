//! AI opponents. Strategies act purely through the engine's public
//! queries and mutations, exactly like a human caller would.

pub mod heuristic;
pub mod random;
pub mod registry;
pub mod strategic;
pub mod trait_def;

pub use heuristic::HeuristicStrategy;
pub use random::RandomStrategy;
pub use registry::{create_strategy, Difficulty};
pub use strategic::StrategicStrategy;
pub use trait_def::Strategy;

use crate::engine::GameEngine;

/// Drive one full action for `player_id`: play a selected card when one is
/// available, otherwise take the pile. Returns false when the engine
/// rejected the action or no action was possible.
pub fn take_turn(engine: &mut GameEngine, player_id: &str, strategy: &dyn Strategy) -> bool {
    let Some(seat) = engine.seat_of(player_id) else {
        return false;
    };
    let available = engine.available_cards(player_id);
    if !available.is_empty() && !strategy.should_take_buda(engine.state(), seat, &available) {
        if let Some(card) = strategy.select_card(engine.state(), seat, &available) {
            return engine.play_card(player_id, card);
        }
    }
    if engine.can_take_buda(player_id) {
        return engine.take_buda(player_id);
    }
    false
}
