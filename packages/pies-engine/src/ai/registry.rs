//! Difficulty registry: maps a difficulty tag to a boxed strategy.

use std::str::FromStr;

use super::heuristic::HeuristicStrategy;
use super::random::RandomStrategy;
use super::strategic::StrategicStrategy;
use super::trait_def::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Build the strategy for a difficulty level. The seed only matters for
/// the randomized strategies and makes simulations reproducible.
pub fn create_strategy(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomStrategy::new(seed)),
        Difficulty::Medium => Box::new(HeuristicStrategy),
        Difficulty::Hard => Box::new(StrategicStrategy::new(seed)),
    }
}
