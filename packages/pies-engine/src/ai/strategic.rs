//! Strategic strategy - the "hard" difficulty.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::heuristic::{highest, lowest};
use super::trait_def::Strategy;
use crate::domain::state::{GameState, Seat, DECK_SIZE};
use crate::domain::{Card, Rank, QUEEN_OF_CLUBS};

/// Plays around game progression: times the Queen of Clubs, conserves high
/// own-color cards and aces late, and plays low into large piles.
pub struct StrategicStrategy {
    rng: Mutex<StdRng>,
}

struct Analysis {
    late_game: bool,
    table_size: usize,
}

impl StrategicStrategy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn analyze(state: &GameState) -> Analysis {
        let progression = 1.0 - state.cards_in_hands() as f64 / DECK_SIZE as f64;
        Analysis {
            late_game: progression > 0.6,
            table_size: state.table.len(),
        }
    }

    fn queen_timing_is_right(&self, analysis: &Analysis) -> bool {
        if !analysis.late_game {
            return true;
        }
        // Late claim of the color assignment is only occasionally worth it.
        self.rng
            .lock()
            .map(|mut rng| rng.random::<f64>() < 0.3)
            .unwrap_or(false)
    }
}

impl Strategy for StrategicStrategy {
    fn select_card(&self, state: &GameState, seat: Seat, available: &[Card]) -> Option<Card> {
        if available.is_empty() {
            return None;
        }
        let analysis = Self::analyze(state);

        if !state.colors_assigned
            && available.contains(&QUEEN_OF_CLUBS)
            && self.queen_timing_is_right(&analysis)
        {
            return Some(QUEEN_OF_CLUBS);
        }

        if let Some(color) = state.player(seat).and_then(|p| p.assigned_color) {
            let own: Vec<Card> = available.iter().copied().filter(|c| c.suit == color).collect();
            if !own.is_empty() && analysis.late_game {
                // Keep the high own-color cards back for the endgame.
                let non_aces: Vec<Card> =
                    own.iter().copied().filter(|c| c.rank != Rank::Ace).collect();
                return lowest(&non_aces).or_else(|| highest(&own));
            }
            if analysis.table_size > 2 {
                // A big pile is dangerous to inherit; spend a low card.
                return lowest(available);
            }
            if let Some(card) = highest(&own) {
                return Some(card);
            }
        }

        lowest(available)
    }
}
