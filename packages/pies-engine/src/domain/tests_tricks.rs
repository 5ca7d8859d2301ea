use crate::domain::cards_types::Suit;
use crate::domain::state::{GameStatus, MoveKind};
use crate::domain::test_state_helpers::{
    assert_card_conservation, assign_colors_from, fresh_state, in_progress_state, parse_cards,
};
use crate::domain::tricks::play_card;
use crate::domain::{Card, NINE_OF_DIAMONDS, QUEEN_OF_CLUBS};
use crate::errors::DomainError;

fn card(token: &str) -> Card {
    token.parse().expect("valid token")
}

#[test]
fn play_moves_card_from_hand_to_table_and_logs_it() {
    let hands = [
        parse_cards(&["9D", "AH"]),
        parse_cards(&["9C"]),
        vec![],
        vec![],
    ];
    let mut state = fresh_state(hands, 0);
    let result = play_card(&mut state, 0, NINE_OF_DIAMONDS).unwrap();
    assert!(!result.beat); // first card of the game beats nothing
    assert_eq!(state.table, vec![NINE_OF_DIAMONDS]);
    assert!(!state.players[0].hand.contains(&NINE_OF_DIAMONDS));
    assert_eq!(state.moves.len(), 1);
    assert_eq!(state.moves[0].kind, MoveKind::PlayCard);
    assert_eq!(state.moves[0].card, Some(NINE_OF_DIAMONDS));
    assert_eq!(state.current_seat, 1);
}

#[test]
fn rejected_play_is_a_complete_no_op() {
    let hands = [
        parse_cards(&["9D", "AH"]),
        parse_cards(&["9C"]),
        vec![],
        vec![],
    ];
    let mut state = fresh_state(hands, 0);
    let before = state.clone();

    // Illegal opener
    assert_eq!(
        play_card(&mut state, 0, card("AH")).unwrap_err(),
        DomainError::IllegalCard
    );
    assert_eq!(state, before);

    // Out of turn
    assert_eq!(
        play_card(&mut state, 1, card("9C")).unwrap_err(),
        DomainError::OutOfTurn
    );
    assert_eq!(state, before);

    // Not in hand
    assert_eq!(
        play_card(&mut state, 0, card("KS")).unwrap_err(),
        DomainError::CardNotInHand
    );
    assert_eq!(state, before);
}

#[test]
fn beating_keeps_the_turn_and_owes_a_second_card() {
    let hands = [
        parse_cards(&["JH", "9C"]),
        parse_cards(&["9S"]),
        vec![],
        vec![],
    ];
    let mut state = in_progress_state(hands, 0);
    state.table = parse_cards(&["TH"]);

    let result = play_card(&mut state, 0, card("JH")).unwrap();
    assert!(result.beat);
    assert!(result.awaiting_second_card);
    assert_eq!(state.pending_second_card, Some(0));
    assert_eq!(state.current_seat, 0); // same seat keeps the turn

    // The follow-up may be any held card, here a lowly off-suit nine
    let result = play_card(&mut state, 0, card("9C")).unwrap();
    assert!(!result.awaiting_second_card);
    assert_eq!(state.pending_second_card, None);
    assert_eq!(state.current_seat, 1);
    // A second card never chains into another beat obligation
    assert_eq!(state.table, parse_cards(&["TH", "JH", "9C"]));
}

#[test]
fn non_beating_play_advances_clockwise() {
    // Queen of Clubs assigns colors; suppose seat 0 (clubs) plays a low
    // club onto a fresh trick, then seat 1 answers in suit.
    let hands = [
        parse_cards(&["9H"]),
        parse_cards(&["TH", "JH"]),
        vec![],
        vec![],
    ];
    let mut state = in_progress_state(hands, 0);
    let result = play_card(&mut state, 0, card("9H")).unwrap();
    assert!(!result.beat); // trick opener, nothing to beat
    assert_eq!(state.current_seat, 1);
}

#[test]
fn first_queen_of_clubs_assigns_the_rotation() {
    let hands = [
        parse_cards(&["9H"]),
        parse_cards(&["9S"]),
        parse_cards(&["QC", "TH"]),
        parse_cards(&["9C"]),
    ];
    let mut state = in_progress_state(hands, 2);
    let result = play_card(&mut state, 2, QUEEN_OF_CLUBS).unwrap();
    assert!(result.colors_assigned_now);
    assert!(state.colors_assigned);
    // Clockwise from seat 2: clubs, spades, hearts, diamonds
    assert_eq!(state.players[2].assigned_color, Some(Suit::Clubs));
    assert_eq!(state.players[3].assigned_color, Some(Suit::Spades));
    assert_eq!(state.players[0].assigned_color, Some(Suit::Hearts));
    assert_eq!(state.players[1].assigned_color, Some(Suit::Diamonds));
}

#[test]
fn queen_of_clubs_on_a_fresh_trick_does_not_owe_a_second_card() {
    let hands = [parse_cards(&["QC", "9H"]), vec![], vec![], vec![]];
    let mut state = in_progress_state(hands, 0);
    let result = play_card(&mut state, 0, QUEEN_OF_CLUBS).unwrap();
    assert!(result.colors_assigned_now);
    assert!(!result.beat);
    assert_eq!(state.pending_second_card, None);
    assert_eq!(state.current_seat, 1);
}

#[test]
fn replayed_queen_of_clubs_never_reassigns_colors() {
    // The Queen can come back into a hand through a buda and be played a
    // second time, from a different seat than the first.
    let hands = [
        parse_cards(&["QC", "9H"]),
        parse_cards(&["9S"]),
        vec![],
        vec![],
    ];
    let mut state = in_progress_state(hands, 0);
    assign_colors_from(&mut state, 3); // first Queen came from seat 3

    let before: Vec<_> = state.players.iter().map(|p| p.assigned_color).collect();
    let result = play_card(&mut state, 0, QUEEN_OF_CLUBS).unwrap();
    assert!(!result.colors_assigned_now);
    assert!(state.colors_assigned);
    let after: Vec<_> = state.players.iter().map(|p| p.assigned_color).collect();
    assert_eq!(after, before);
    // Rotation still anchored at seat 3, not at the replaying seat
    assert_eq!(state.players[3].assigned_color, Some(Suit::Clubs));
    assert_eq!(state.players[0].assigned_color, Some(Suit::Spades));
}

#[test]
fn beating_with_the_last_card_skips_the_obligation() {
    let hands = [
        parse_cards(&["AH"]),
        parse_cards(&["9S"]),
        vec![],
        vec![],
    ];
    let mut state = in_progress_state(hands, 0);
    state.table = parse_cards(&["KH"]);
    let result = play_card(&mut state, 0, card("AH")).unwrap();
    assert!(result.beat);
    assert!(!result.awaiting_second_card);
    assert_eq!(state.pending_second_card, None);
    assert_eq!(state.current_seat, 1);
}

#[test]
fn finished_game_rejects_plays() {
    let hands = [parse_cards(&["9H"]), vec![], vec![], vec![]];
    let mut state = in_progress_state(hands, 0);
    state.status = GameStatus::Finished;
    assert_eq!(
        play_card(&mut state, 0, card("9H")).unwrap_err(),
        DomainError::GameNotInProgress
    );
}

#[test]
fn plays_preserve_the_card_containers() {
    let hands = [
        parse_cards(&["9C", "TC", "JC", "QC", "KC", "AC"]),
        parse_cards(&["9D", "TD", "JD", "QD", "KD", "AD"]),
        parse_cards(&["9H", "TH", "JH", "QH", "KH", "AH"]),
        parse_cards(&["9S", "TS", "JS", "QS", "KS", "AS"]),
    ];
    let mut state = in_progress_state(hands, 0);
    play_card(&mut state, 0, card("9C")).unwrap();
    assert_card_conservation(&state);
    play_card(&mut state, 1, card("9D")).unwrap_err(); // does not beat 9C
    assert_card_conservation(&state);
}
