//! Serializable snapshot of the full game state.
//!
//! The snapshot is a flat record carrying everything needed to rebuild a
//! [`GameState`], plus a version counter the storage layer can use for
//! optimistic-lock conflict detection. The engine itself never persists
//! anything.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Suit};
use super::state::{GameState, GameStatus, MoveRecord, Player, Seat};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub seat: Seat,
    pub id: String,
    pub name: String,
    pub is_host: bool,
    pub assigned_color: Option<Suit>,
    pub hand: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u64,
    pub status: GameStatus,
    pub round_no: u32,
    pub trick_no: u32,
    pub colors_assigned: bool,
    pub current_seat: Seat,
    pub pending_second_card: Option<Seat>,
    pub players: Vec<PlayerSnapshot>,
    pub table: Vec<Card>,
    pub discarded: Vec<Card>,
    pub moves: Vec<MoveRecord>,
}

/// Produce a defensive copy of the state for external consumption.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    GameSnapshot {
        version: state.version,
        status: state.status,
        round_no: state.round_no,
        trick_no: state.trick_no,
        colors_assigned: state.colors_assigned,
        current_seat: state.current_seat,
        pending_second_card: state.pending_second_card,
        players: state
            .players
            .iter()
            .map(|p| PlayerSnapshot {
                seat: p.seat,
                id: p.id.clone(),
                name: p.name.clone(),
                is_host: p.is_host,
                assigned_color: p.assigned_color,
                hand: p.hand.clone(),
            })
            .collect(),
        table: state.table.clone(),
        discarded: state.discarded.clone(),
        moves: state.moves.clone(),
    }
}

/// Rebuild a [`GameState`] from a snapshot, e.g. after deserialization by
/// the persistence collaborator.
pub fn restore(snap: GameSnapshot) -> GameState {
    GameState {
        status: snap.status,
        players: snap
            .players
            .into_iter()
            .map(|p| Player {
                id: p.id,
                name: p.name,
                seat: p.seat,
                is_host: p.is_host,
                hand: p.hand,
                assigned_color: p.assigned_color,
            })
            .collect(),
        current_seat: snap.current_seat,
        table: snap.table,
        moves: snap.moves,
        colors_assigned: snap.colors_assigned,
        round_no: snap.round_no,
        trick_no: snap.trick_no,
        discarded: snap.discarded,
        pending_second_card: snap.pending_second_card,
        version: snap.version,
    }
}
