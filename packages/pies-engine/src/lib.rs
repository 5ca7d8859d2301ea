#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod domain;
pub mod engine;
pub mod errors;

// Re-exports for public API
pub use domain::{Card, GameSnapshot, GameState, GameStatus, PlayerSpec, Rank, Seat, Suit};
pub use engine::GameEngine;
pub use errors::{DomainError, EngineError};
