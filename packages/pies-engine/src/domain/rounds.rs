//! Round-end discard and game termination.

use super::cards_logic::lowest_of_suit;
use super::cards_types::{Card, Rank};
use super::state::{next_seat_with_cards, GameState, GameStatus, MoveKind, Seat};

/// Outcome of a round ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEnd {
    /// The seat left holding cards while all others were empty.
    pub loser: Seat,
    /// Lowest card of the loser's assigned color, if one was discarded.
    pub discarded: Option<Card>,
    /// True when the discard was an Ace and the game is over.
    pub game_over: bool,
}

/// Evaluated after every buda: when exactly one seat still holds cards,
/// that seat loses the round and discards the lowest card of its assigned
/// color. Discarding an Ace finishes the game; otherwise a new round
/// starts from the seat clockwise after the loser.
pub fn check_round_end(state: &mut GameState) -> Option<RoundEnd> {
    let mut holders = state.players.iter().filter(|p| !p.hand.is_empty());
    let loser = match (holders.next(), holders.next()) {
        (Some(only), None) => only.seat,
        _ => return None,
    };

    let discarded = discard_lowest_of_color(state, loser);
    if let Some(card) = discarded {
        if card.rank == Rank::Ace {
            state.status = GameStatus::Finished;
            return Some(RoundEnd {
                loser,
                discarded,
                game_over: true,
            });
        }
    }

    state.round_no += 1;
    state.trick_no = 1;
    state.current_seat = next_seat_with_cards(state, loser);
    Some(RoundEnd {
        loser,
        discarded,
        game_over: false,
    })
}

/// Permanently remove the loser's lowest assigned-color card. No-op when
/// colors are unassigned or the hand holds none of that color.
fn discard_lowest_of_color(state: &mut GameState, seat: Seat) -> Option<Card> {
    let player = state.player(seat)?;
    let color = player.assigned_color?;
    let card = lowest_of_suit(&player.hand, color)?;
    state.players[seat as usize].hand.retain(|&c| c != card);
    state.discarded.push(card);
    state.record(seat, Some(card), MoveKind::Discard);
    Some(card)
}
