//! In-memory game runner: four strategies against one engine, no I/O.

use pies_engine::ai::{create_strategy, take_turn, Difficulty};
use pies_engine::domain::MoveKind;
use pies_engine::{EngineError, GameEngine, GameStatus, PlayerSpec, Seat};
use serde::Serialize;

/// Outcome of a single simulated game, one JSONL row per game.
#[derive(Debug, Serialize)]
pub struct GameOutcome {
    pub seed: u64,
    pub finished: bool,
    pub loser_seat: Option<Seat>,
    pub rounds: u32,
    pub actions: u32,
}

/// Deal with `seed` and drive the game to completion, or to `max_actions`
/// if the strategies wedge (they should not; the cap keeps a bug from
/// hanging a batch).
pub fn run_game(
    difficulties: [Difficulty; 4],
    seed: u64,
    max_actions: u32,
) -> Result<GameOutcome, EngineError> {
    let specs = (0..4)
        .map(|seat| PlayerSpec {
            id: format!("ai-{seat}"),
            name: format!("AI {seat}"),
            seat: seat as Seat,
            is_host: seat == 0,
        })
        .collect();
    let mut engine = GameEngine::new(specs)?;
    engine.start_game_seeded(seed)?;

    let strategies: Vec<_> = difficulties
        .iter()
        .enumerate()
        .map(|(seat, d)| create_strategy(*d, Some(seed.wrapping_add(seat as u64))))
        .collect();

    let mut actions = 0u32;
    while engine.state().status == GameStatus::InProgress && actions < max_actions {
        let Some(current) = engine.current_player() else {
            break;
        };
        let id = current.id.clone();
        let seat = current.seat as usize;
        if !take_turn(&mut engine, &id, strategies[seat].as_ref()) {
            break;
        }
        actions += 1;
    }

    let finished = engine.state().status == GameStatus::Finished;
    // The game ends on a discard, so the loser wrote the last discard entry.
    let loser_seat = engine
        .state()
        .moves
        .iter()
        .rev()
        .find(|m| m.kind == MoveKind::Discard)
        .map(|m| m.seat)
        .filter(|_| finished);

    Ok(GameOutcome {
        seed,
        finished,
        loser_seat,
        rounds: engine.state().round_no,
        actions,
    })
}
