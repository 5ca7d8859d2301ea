//! Random strategy - the "easy" difficulty and the testing baseline.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::trait_def::Strategy;
use crate::domain::state::{GameState, Seat};
use crate::domain::Card;

/// Chooses uniformly at random among the available cards.
///
/// The RNG sits behind a `Mutex` because trait methods take `&self`;
/// seeding makes simulations reproducible.
pub struct RandomStrategy {
    rng: Mutex<StdRng>,
}

impl RandomStrategy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_card(&self, _state: &GameState, _seat: Seat, available: &[Card]) -> Option<Card> {
        let mut rng = self.rng.lock().ok()?;
        available.choose(&mut *rng).copied()
    }
}
