//! Error types split in two: rule-level rejections
//! (expected, surfaced as `false` by the engine facade) and setup faults
//! (the game instance is unusable and must not be retried).

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error as ThisError;

/// Rule-level rejection reasons produced by the domain layer.
///
/// The engine facade maps every variant to a `false` return; the variants
/// exist so tests and logs can name the reason a move was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    GameNotInProgress,
    OutOfTurn,
    CardNotInHand,
    IllegalCard,
    TableEmpty,
    AwaitingSecondCard,
    HasLegalMove,
    ParseCard(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::GameNotInProgress => write!(f, "game is not in progress"),
            DomainError::OutOfTurn => write!(f, "out of turn"),
            DomainError::CardNotInHand => write!(f, "card not in hand"),
            DomainError::IllegalCard => write!(f, "card cannot be played on the current table"),
            DomainError::TableEmpty => write!(f, "table is empty"),
            DomainError::AwaitingSecondCard => write!(f, "a mandatory second card is owed"),
            DomainError::HasLegalMove => write!(f, "a legal card is still held"),
            DomainError::ParseCard(s) => write!(f, "parse card: {s}"),
        }
    }
}

impl Error for DomainError {}

/// Setup faults: signalled through `Result` so callers can tell a corrupt
/// game apart from an ordinary illegal move.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum EngineError {
    #[error("a game requires exactly 4 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("duplicate or out-of-range seat assignment")]
    SeatConflict,
    #[error("game has already been dealt")]
    AlreadyStarted,
    #[error("dealing invariant violated: {0}")]
    DealingInvariantViolation(&'static str),
}
