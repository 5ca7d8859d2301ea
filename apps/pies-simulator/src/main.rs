//! Pies simulator CLI - fast in-memory games between AI strategies.
//!
//! Runs entirely against the engine's public facade, with no persistence
//! layer, so strategy changes can be evaluated over thousands of games.

mod simulator;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use pies_engine::ai::Difficulty;
use simulator::{run_game, GameOutcome};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pies-simulator")]
#[command(about = "Fast in-memory Pies simulator for AI evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Difficulty for all seats (shortcut to set all 4 seats at once)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<Level>,

    /// Difficulty for seat 0
    #[arg(long, default_value = "hard")]
    seat0: Level,

    /// Difficulty for seat 1
    #[arg(long, default_value = "hard")]
    seat1: Level,

    /// Difficulty for seat 2
    #[arg(long, default_value = "hard")]
    seat2: Level,

    /// Difficulty for seat 3
    #[arg(long, default_value = "hard")]
    seat3: Level,

    /// Base seed for deterministic batches; per-game seeds derive from it
    #[arg(long)]
    seed: Option<u64>,

    /// Abort a game after this many actions
    #[arg(long, default_value = "5000")]
    max_actions: u32,

    /// Write one JSON line per game to this file
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let levels = if let Some(all) = args.seats {
        [all; 4]
    } else {
        [args.seat0, args.seat1, args.seat2, args.seat3]
    };
    let difficulties = levels.map(Difficulty::from);
    info!(?levels, games = args.games, "starting simulation batch");

    let mut writer = match &args.output {
        Some(path) => Some(BufWriter::new(File::create(path)?)),
        None => None,
    };

    let base_seed = args.seed.unwrap_or_else(rand::random::<u64>);
    let start = Instant::now();
    let mut outcomes = Vec::new();
    let mut errors = 0u32;

    for game_num in 0..args.games {
        // A fixed stride keeps per-game seeds disjoint across the batch.
        let game_seed = base_seed.wrapping_add(u64::from(game_num) * 1_000_003);
        match run_game(difficulties, game_seed, args.max_actions) {
            Ok(outcome) => {
                if let Some(w) = writer.as_mut() {
                    serde_json::to_writer(&mut *w, &outcome)?;
                    w.write_all(b"\n")?;
                }
                if args.verbose {
                    info!(
                        seed = outcome.seed,
                        finished = outcome.finished,
                        rounds = outcome.rounds,
                        "game completed"
                    );
                }
                outcomes.push(outcome);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, %e, "game failed to start");
            }
        }
    }

    if let Some(mut w) = writer {
        w.flush()?;
        info!(path = args.output.as_deref().unwrap_or(""), "results written");
    }

    print_summary(&outcomes, errors, start.elapsed(), args.games);
    Ok(())
}

fn print_summary(
    outcomes: &[GameOutcome],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("=== Simulation Summary ===");
    println!("Games completed: {}/{}", outcomes.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if outcomes.is_empty() {
        return;
    }

    let finished = outcomes.iter().filter(|o| o.finished).count();
    let aborted = outcomes.len() - finished;
    let mut losses = [0u32; 4];
    let mut total_rounds = 0u64;
    let mut total_actions = 0u64;
    for outcome in outcomes {
        if let Some(seat) = outcome.loser_seat {
            losses[seat as usize] += 1;
        }
        total_rounds += u64::from(outcome.rounds);
        total_actions += u64::from(outcome.actions);
    }

    println!("Finished: {finished}, aborted at action cap: {aborted}");
    println!(
        "Average rounds: {:.1}, average actions: {:.1}",
        total_rounds as f64 / outcomes.len() as f64,
        total_actions as f64 / outcomes.len() as f64
    );
    println!("=== Losses by Seat ===");
    for (seat, count) in losses.iter().enumerate() {
        let rate = f64::from(*count) / outcomes.len() as f64 * 100.0;
        println!("Seat {seat}: {count} losses ({rate:.1}%)");
    }
}
