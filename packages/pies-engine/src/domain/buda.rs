//! Taking the trick pile ("buda") and the round-end hook that follows it.

use super::rounds::{check_round_end, RoundEnd};
use super::state::{next_seat_with_cards, GameState, GameStatus, MoveKind, Seat};
use super::tricks::can_play_card;
use crate::errors::DomainError;

/// Pure query: taking the pile is legal only when it is the seat's turn,
/// the table is non-empty, no mandatory second card is owed, and no held
/// card is playable.
pub fn can_take_buda(state: &GameState, seat: Seat) -> bool {
    if state.status != GameStatus::InProgress || state.current_seat != seat {
        return false;
    }
    let Some(player) = state.player(seat) else {
        return false;
    };
    if state.table.is_empty() {
        return false;
    }
    if state.pending_second_card == Some(seat) {
        return false;
    }
    player.hand.iter().all(|&c| !can_play_card(state, seat, c))
}

/// What an accepted buda did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeBudaResult {
    pub cards_taken: usize,
    /// Set when this buda left exactly one seat holding cards.
    pub round_end: Option<RoundEnd>,
}

/// Move the entire table pile into the seat's hand, advance the turn, and
/// evaluate round end. A rejected take leaves the state untouched.
pub fn take_buda(state: &mut GameState, seat: Seat) -> Result<TakeBudaResult, DomainError> {
    if state.status != GameStatus::InProgress {
        return Err(DomainError::GameNotInProgress);
    }
    if state.current_seat != seat {
        return Err(DomainError::OutOfTurn);
    }
    if state.table.is_empty() {
        return Err(DomainError::TableEmpty);
    }
    if state.pending_second_card == Some(seat) {
        return Err(DomainError::AwaitingSecondCard);
    }
    let has_legal = state
        .player(seat)
        .is_some_and(|p| p.hand.iter().any(|&c| can_play_card(state, seat, c)));
    if has_legal {
        return Err(DomainError::HasLegalMove);
    }

    let taken = std::mem::take(&mut state.table);
    let cards_taken = taken.len();
    let hand = &mut state.players[seat as usize].hand;
    hand.extend(taken);
    hand.sort();

    state.record(seat, None, MoveKind::TakeBuda);
    state.pending_second_card = None;
    state.trick_no += 1;
    // Table is empty now, so skip seats that could not act.
    state.current_seat = next_seat_with_cards(state, seat);

    let round_end = check_round_end(state);
    Ok(TakeBudaResult {
        cards_taken,
        round_end,
    })
}
