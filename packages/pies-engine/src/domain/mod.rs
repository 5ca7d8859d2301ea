//! Domain layer: pure game rules as free functions over a shared
//! [`GameState`]. No I/O, no locking; callers serialize access.

pub mod buda;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod rounds;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_rounds;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use buda::{can_take_buda, take_buda, TakeBudaResult};
pub use cards_logic::{lowest_of_suit, outranks, play_beats, queen_of_clubs_beats};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit, NINE_OF_DIAMONDS, QUEEN_OF_CLUBS};
pub use dealing::{deal, full_deck};
pub use rounds::RoundEnd;
pub use snapshot::{restore, snapshot, GameSnapshot, PlayerSnapshot};
pub use state::{
    next_seat, next_seat_with_cards, seat_offset, GameState, GameStatus, MoveKind, MoveRecord,
    Player, PlayerSpec, Seat, DECK_SIZE, HAND_SIZE, PLAYERS,
};
pub use tricks::{available_cards, can_play_card, play_card, PlayCardResult};
