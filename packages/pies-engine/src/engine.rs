//! Public engine facade: the narrow in-process contract.
//!
//! One `GameEngine` owns one authoritative [`GameState`]. Mutating
//! operations return a bare boolean: rule violations are expected and
//! frequent, so they are never errors. Only setup faults (wrong player
//! count, a corrupt deal) surface through `Result`. The engine is
//! synchronous and single-threaded; callers serialize concurrent access.

use tracing::{debug, info};

use crate::domain::buda;
use crate::domain::dealing;
use crate::domain::snapshot::{self, GameSnapshot};
use crate::domain::state::{GameState, Player, PlayerSpec, Seat, PLAYERS};
use crate::domain::tricks;
use crate::domain::Card;
use crate::errors::EngineError;

#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Register players and produce a not-started game. Seats must be
    /// unique and within 0..=3; ids must be unique. The player count is
    /// checked at [`Self::start_game`], not here.
    pub fn new(players: Vec<PlayerSpec>) -> Result<Self, EngineError> {
        for (i, p) in players.iter().enumerate() {
            if p.seat as usize >= PLAYERS {
                return Err(EngineError::SeatConflict);
            }
            for other in &players[i + 1..] {
                if other.seat == p.seat || other.id == p.id {
                    return Err(EngineError::SeatConflict);
                }
            }
        }
        Ok(Self {
            state: GameState::new(players),
        })
    }

    /// Shuffle from OS entropy and deal.
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        let seed = rand::random::<u64>();
        self.start_game_seeded(seed)
    }

    /// Deterministic deal for replays and tests.
    pub fn start_game_seeded(&mut self, seed: u64) -> Result<(), EngineError> {
        dealing::deal(&mut self.state, seed)?;
        self.state.version += 1;
        info!(
            seed,
            opener = self.state.current_seat,
            "game started, 9D opens"
        );
        Ok(())
    }

    /// Pure legality query; false for unknown players.
    pub fn can_play_card(&self, player_id: &str, card: Card) -> bool {
        self.state
            .seat_of(player_id)
            .is_some_and(|seat| tricks::can_play_card(&self.state, seat, card))
    }

    /// Play a card. Returns false, leaving the state unchanged, for any
    /// rule violation.
    pub fn play_card(&mut self, player_id: &str, card: Card) -> bool {
        let Some(seat) = self.state.seat_of(player_id) else {
            debug!(player_id, "play rejected: unknown player");
            return false;
        };
        match tricks::play_card(&mut self.state, seat, card) {
            Ok(result) => {
                self.state.version += 1;
                if result.colors_assigned_now {
                    info!(seat, "queen of clubs played, colors assigned");
                }
                if result.awaiting_second_card {
                    debug!(seat, %card, "beat the top card, second card owed");
                } else {
                    debug!(seat, %card, beat = result.beat, "card played");
                }
                true
            }
            Err(err) => {
                debug!(seat, %card, %err, "play rejected");
                false
            }
        }
    }

    /// Pure query: whether taking the pile is the player's forced move.
    pub fn can_take_buda(&self, player_id: &str) -> bool {
        self.state
            .seat_of(player_id)
            .is_some_and(|seat| buda::can_take_buda(&self.state, seat))
    }

    /// Take the entire table pile into hand. Returns false, leaving the
    /// state unchanged, whenever a legal card is still held.
    pub fn take_buda(&mut self, player_id: &str) -> bool {
        let Some(seat) = self.state.seat_of(player_id) else {
            debug!(player_id, "buda rejected: unknown player");
            return false;
        };
        match buda::take_buda(&mut self.state, seat) {
            Ok(result) => {
                self.state.version += 1;
                debug!(seat, cards = result.cards_taken, "buda taken");
                if let Some(end) = result.round_end {
                    match end.discarded {
                        Some(card) if end.game_over => {
                            info!(loser = end.loser, %card, "ace discarded, game over")
                        }
                        Some(card) => {
                            info!(loser = end.loser, %card, round = self.state.round_no, "round ended, card discarded")
                        }
                        None => {
                            info!(loser = end.loser, round = self.state.round_no, "round ended, nothing to discard")
                        }
                    }
                }
                true
            }
            Err(err) => {
                debug!(seat, %err, "buda rejected");
                false
            }
        }
    }

    /// Player whose turn it is; None before a successful deal.
    pub fn current_player(&self) -> Option<&Player> {
        self.state.current_player()
    }

    /// Legal cards for the player; empty off-turn or for unknown ids.
    pub fn available_cards(&self, player_id: &str) -> Vec<Card> {
        self.state
            .seat_of(player_id)
            .map(|seat| tricks::available_cards(&self.state, seat))
            .unwrap_or_default()
    }

    /// Read-only borrow for in-process callers (AI strategies, tests).
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Defensive, serializable copy for rendering and persistence.
    pub fn snapshot(&self) -> GameSnapshot {
        snapshot::snapshot(&self.state)
    }

    pub fn seat_of(&self, player_id: &str) -> Option<Seat> {
        self.state.seat_of(player_id)
    }
}
