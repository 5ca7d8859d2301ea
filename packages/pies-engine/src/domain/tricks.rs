//! Card legality and playing into the trick pile.

use super::cards_logic::{outranks, play_beats, queen_of_clubs_beats};
use super::cards_types::{Card, Suit, NINE_OF_DIAMONDS, QUEEN_OF_CLUBS};
use super::state::{next_seat, GameState, GameStatus, MoveKind, Seat};
use crate::errors::DomainError;

/// Color rotation applied clockwise from the seat that plays the Queen of
/// Clubs: that seat takes clubs, the following seats spades, hearts,
/// diamonds.
const COLOR_ROTATION: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

/// Pure legality query; never mutates.
///
/// Rules in evaluation order: the very first move of the game must be the
/// 9 of Diamonds; a fresh trick accepts anything; a seat owing its
/// mandatory second card may play anything; otherwise the card must beat
/// the top of the table (same suit strictly higher, own assigned color
/// strictly higher, or the Queen of Clubs override).
pub fn can_play_card(state: &GameState, seat: Seat, card: Card) -> bool {
    if state.status != GameStatus::InProgress {
        return false;
    }
    if state.current_seat != seat {
        return false;
    }
    let Some(player) = state.player(seat) else {
        return false;
    };
    if !player.hand.contains(&card) {
        return false;
    }

    if state.moves.is_empty() {
        return card == NINE_OF_DIAMONDS;
    }
    let Some(top) = state.top_card() else {
        return true;
    };
    if state.pending_second_card == Some(seat) {
        return true;
    }

    if card == QUEEN_OF_CLUBS {
        return queen_of_clubs_beats(top);
    }
    if card.suit == top.suit {
        return outranks(card, top);
    }
    if state.colors_assigned && player.assigned_color == Some(card.suit) {
        return outranks(card, top);
    }
    false
}

/// Subset of the seat's hand that passes [`can_play_card`]. Empty when it
/// is not that seat's turn.
pub fn available_cards(state: &GameState, seat: Seat) -> Vec<Card> {
    let Some(player) = state.player(seat) else {
        return Vec::new();
    };
    player
        .hand
        .iter()
        .copied()
        .filter(|&c| can_play_card(state, seat, c))
        .collect()
}

/// What an accepted play did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCardResult {
    /// The play beat the previous top card.
    pub beat: bool,
    /// The same seat keeps the turn and owes one unconstrained card.
    pub awaiting_second_card: bool,
    /// This play was the first Queen of Clubs and assigned all colors.
    pub colors_assigned_now: bool,
}

/// Play a card, enforcing turn order and legality. A rejected play leaves
/// the state untouched.
pub fn play_card(
    state: &mut GameState,
    seat: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    if state.status != GameStatus::InProgress {
        return Err(DomainError::GameNotInProgress);
    }
    if state.current_seat != seat {
        return Err(DomainError::OutOfTurn);
    }
    let Some(pos) = state
        .player(seat)
        .and_then(|p| p.hand.iter().position(|&c| c == card))
    else {
        return Err(DomainError::CardNotInHand);
    };
    if !can_play_card(state, seat, card) {
        return Err(DomainError::IllegalCard);
    }

    let was_second_card = state.pending_second_card == Some(seat);
    // The card to beat is the top before this play lands on it.
    let previous_top = state.top_card();

    state.players[seat as usize].hand.remove(pos);
    state.table.push(card);
    state.record(seat, Some(card), MoveKind::PlayCard);

    let mut colors_assigned_now = false;
    if card == QUEEN_OF_CLUBS && !state.colors_assigned {
        assign_colors(state, seat);
        colors_assigned_now = true;
    }

    if was_second_card {
        state.pending_second_card = None;
        state.current_seat = next_seat(seat);
        return Ok(PlayCardResult {
            beat: false,
            awaiting_second_card: false,
            colors_assigned_now,
        });
    }

    let beat = previous_top.is_some_and(|prev| play_beats(card, prev));
    let hand_empty = state.players[seat as usize].hand.is_empty();
    if beat && !hand_empty {
        // Same seat keeps the turn and must follow up with any card.
        state.pending_second_card = Some(seat);
    } else {
        state.current_seat = next_seat(seat);
    }
    Ok(PlayCardResult {
        beat,
        awaiting_second_card: beat && !hand_empty,
        colors_assigned_now,
    })
}

/// Assign the four suits clockwise from the seat that played the Queen of
/// Clubs. Runs exactly once per game.
fn assign_colors(state: &mut GameState, from: Seat) {
    for (i, player) in state.players.iter_mut().enumerate() {
        let offset = ((i as i16) - (from as i16)).rem_euclid(4) as usize;
        player.assigned_color = Some(COLOR_ROTATION[offset]);
    }
    state.colors_assigned = true;
}
