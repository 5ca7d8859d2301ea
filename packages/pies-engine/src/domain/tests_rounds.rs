use crate::domain::buda::take_buda;
use crate::domain::rounds::check_round_end;
use crate::domain::state::{GameStatus, MoveKind};
use crate::domain::test_state_helpers::{assign_colors_from, in_progress_state, parse_cards};
use crate::domain::tricks::play_card;

#[test]
fn no_round_end_while_two_seats_hold_cards() {
    let hands = [
        parse_cards(&["9S"]),
        parse_cards(&["9H"]),
        vec![],
        vec![],
    ];
    let mut state = in_progress_state(hands, 0);
    assert_eq!(check_round_end(&mut state), None);
}

#[test]
fn lone_holder_after_buda_discards_lowest_of_color() {
    // Seats 1-3 are empty; seat 0 is forced to take the pile and becomes
    // the only seat with cards, losing the round.
    let hands = [parse_cards(&["9S", "TS"]), vec![], vec![], vec![]];
    let mut state = in_progress_state(hands, 0);
    state.table = parse_cards(&["KC", "TC", "AH"]);
    assign_colors_from(&mut state, 3); // seat 0: spades

    let result = take_buda(&mut state, 0).unwrap();
    let end = result.round_end.expect("round must end");
    assert_eq!(end.loser, 0);
    // Lowest spade in hand is the 9S
    assert_eq!(end.discarded, Some("9S".parse().unwrap()));
    assert!(!end.game_over);

    assert_eq!(state.discarded, parse_cards(&["9S"]));
    assert!(!state.players[0].hand.contains(&"9S".parse().unwrap()));
    assert_eq!(state.moves.last().unwrap().kind, MoveKind::Discard);
    assert_eq!(state.round_no, 2);
    assert_eq!(state.trick_no, 1);
    // Seat 0 is the only seat with cards, so the new round stays there.
    assert_eq!(state.current_seat, 0);
}

#[test]
fn discarding_an_ace_finishes_the_game() {
    let hands = [parse_cards(&["AS", "KH"]), vec![], vec![], vec![]];
    let mut state = in_progress_state(hands, 0);
    state.table = parse_cards(&["AH"]);
    assign_colors_from(&mut state, 3); // seat 0: spades, only the AS

    let result = take_buda(&mut state, 0).unwrap();
    let end = result.round_end.expect("round must end");
    assert!(end.game_over);
    assert_eq!(end.discarded, Some("AS".parse().unwrap()));
    assert_eq!(state.status, GameStatus::Finished);

    // Terminal: every further mutation is refused
    assert!(play_card(&mut state, 0, "KH".parse().unwrap()).is_err());
    assert!(take_buda(&mut state, 0).is_err());
}

#[test]
fn round_still_advances_when_no_color_card_is_held() {
    let hands = [parse_cards(&["9H", "TH"]), vec![], vec![], vec![]];
    let mut state = in_progress_state(hands, 0);
    state.table = parse_cards(&["AH"]);
    assign_colors_from(&mut state, 3); // seat 0: spades, holds none

    let result = take_buda(&mut state, 0).unwrap();
    let end = result.round_end.expect("round must end");
    assert_eq!(end.discarded, None);
    assert!(!end.game_over);
    assert!(state.discarded.is_empty());
    assert_eq!(state.round_no, 2);
}

#[test]
fn no_discard_before_colors_are_assigned() {
    let hands = [parse_cards(&["9H"]), vec![], vec![], vec![]];
    let mut state = in_progress_state(hands, 0);
    state.table = parse_cards(&["AH"]);

    let result = take_buda(&mut state, 0).unwrap();
    let end = result.round_end.expect("round must end");
    assert_eq!(end.discarded, None);
    assert_eq!(state.round_no, 2);
}
