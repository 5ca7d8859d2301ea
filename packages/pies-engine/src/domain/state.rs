//! The mutable game aggregate and seat arithmetic.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::cards_types::{Card, Suit};

/// Fixed number of seats.
pub const PLAYERS: usize = 4;
/// Total cards in the Pies deck (4 suits x 6 ranks).
pub const DECK_SIZE: usize = 24;
/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 6;

/// Seat index, 0..=3, clockwise.
pub type Seat = u8;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished,
}

/// Player descriptor supplied by the caller at construction. The id is an
/// opaque external identifier; the engine only compares it for equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    pub id: String,
    pub name: String,
    pub seat: Seat,
    pub is_host: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub seat: Seat,
    pub is_host: bool,
    pub hand: Vec<Card>,
    /// Suit this seat must eventually empty; set once by the Queen of Clubs.
    pub assigned_color: Option<Suit>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveKind {
    PlayCard,
    TakeBuda,
    Discard,
}

/// Append-only audit record; never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub seat: Seat,
    pub card: Option<Card>,
    pub kind: MoveKind,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

/// Entire game container, sufficient for all domain operations.
///
/// Owned by exactly one [`crate::engine::GameEngine`] at a time; every
/// mutation goes through the domain functions in this module's siblings.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub status: GameStatus,
    /// Seat-ordered players; exactly 4 once dealing succeeds.
    pub players: Vec<Player>,
    /// Seat whose turn it is.
    pub current_seat: Seat,
    /// Face-up trick pile, insertion order = play order; last is the top.
    pub table: Vec<Card>,
    pub moves: Vec<MoveRecord>,
    /// Monotone: flips to true once, when the Queen of Clubs first lands.
    pub colors_assigned: bool,
    pub round_no: u32,
    pub trick_no: u32,
    /// Cards permanently removed from play by round-end discards.
    pub discarded: Vec<Card>,
    /// Seat owing the mandatory follow-up card after a beat, if any.
    pub pending_second_card: Option<Seat>,
    /// Bumped on every accepted mutation; optimistic-lock hook for storage.
    pub version: u64,
}

impl GameState {
    pub fn new(mut players: Vec<PlayerSpec>) -> Self {
        players.sort_by_key(|p| p.seat);
        Self {
            status: GameStatus::NotStarted,
            players: players
                .into_iter()
                .map(|spec| Player {
                    id: spec.id,
                    name: spec.name,
                    seat: spec.seat,
                    is_host: spec.is_host,
                    hand: Vec::new(),
                    assigned_color: None,
                })
                .collect(),
            current_seat: 0,
            table: Vec::new(),
            moves: Vec::new(),
            colors_assigned: false,
            round_no: 1,
            trick_no: 1,
            discarded: Vec::new(),
            pending_second_card: None,
            version: 0,
        }
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat as usize)
    }

    pub fn seat_of(&self, player_id: &str) -> Option<Seat> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .map(|i| i as Seat)
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.player(self.current_seat)
    }

    /// Top of the table pile: the card that must be beaten.
    pub fn top_card(&self) -> Option<Card> {
        self.table.last().copied()
    }

    pub fn cards_in_hands(&self) -> usize {
        self.players.iter().map(|p| p.hand.len()).sum()
    }

    pub(crate) fn record(&mut self, seat: Seat, card: Option<Card>, kind: MoveKind) {
        self.moves.push(MoveRecord {
            seat,
            card,
            kind,
            at: OffsetDateTime::now_utc(),
        });
    }
}

/// Seat math helpers (4 fixed seats: 0..=3). Clockwise is positive.
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Next clockwise seat from `from` that still holds cards, falling back to
/// the plain next seat when nobody does. Used when the table is empty: an
/// empty-handed seat would then have neither a playable card nor a pile to
/// take, so it is skipped.
pub fn next_seat_with_cards(state: &GameState, from: Seat) -> Seat {
    let mut seat = next_seat(from);
    for _ in 0..PLAYERS {
        if state.player(seat).is_some_and(|p| !p.hand.is_empty()) {
            return seat;
        }
        seat = next_seat(seat);
    }
    next_seat(from)
}
