//! Deck construction and the opening deal.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::cards_types::{Card, Rank, Suit, NINE_OF_DIAMONDS};
use super::state::{GameState, GameStatus, Seat, HAND_SIZE, PLAYERS};
use crate::errors::EngineError;

/// The canonical 24-card deck in suit-major order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(super::state::DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Shuffle (Fisher-Yates via a seeded ChaCha stream) and deal 6 cards to
/// each seat in seat order. The holder of the 9 of Diamonds opens.
pub fn deal(state: &mut GameState, seed: u64) -> Result<(), EngineError> {
    if state.players.len() != PLAYERS {
        return Err(EngineError::InvalidPlayerCount(state.players.len()));
    }
    if state.status != GameStatus::NotStarted {
        return Err(EngineError::AlreadyStarted);
    }

    let mut deck = full_deck();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    for (seat, player) in state.players.iter_mut().enumerate() {
        let start = seat * HAND_SIZE;
        let mut hand = deck[start..start + HAND_SIZE].to_vec();
        hand.sort();
        player.hand = hand;
    }

    // The 9D is always somewhere in the four hands; this check exists to
    // catch an engine defect, not a reachable game condition.
    let opener = state
        .players
        .iter()
        .position(|p| p.hand.contains(&NINE_OF_DIAMONDS))
        .ok_or(EngineError::DealingInvariantViolation(
            "9 of Diamonds missing after deal",
        ))?;

    state.current_seat = opener as Seat;
    state.status = GameStatus::InProgress;
    state.colors_assigned = false;
    state.table.clear();
    state.discarded.clear();
    state.pending_second_card = None;
    state.round_no = 1;
    state.trick_no = 1;
    Ok(())
}
