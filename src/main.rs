//! Dino Dash entry point
//!
//! Runs the simulation headless with the autopilot at the controls. A real
//! frontend would poll input and draw each frame from the state snapshot;
//! this binary stands in for one so the crate is exercisable end to end.

use dino_dash::highscores::HighScores;
use dino_dash::sim::{tick, GamePhase, GameState, TickInput};
use dino_dash::tuning::Tuning;

/// Demo runs before the process exits
const DEMO_RUNS: u32 = 3;
/// Hard tick budget in case the autopilot refuses to die
const MAX_TICKS: u64 = 300_000;

fn main() {
    env_logger::init();

    let tuning = Tuning::load_or_default();
    let seed: u64 = rand::random();
    log::info!("dino-dash demo starting, seed {seed}");

    let mut state = GameState::with_tuning(seed, tuning);
    let mut board = HighScores::new();
    let input = TickInput {
        idle: true,
        ..Default::default()
    };

    let mut runs = 0;
    let mut last_phase = state.phase;
    for _ in 0..MAX_TICKS {
        tick(&mut state, &input);

        // Record each run the moment it ends
        if last_phase == GamePhase::Running && state.phase == GamePhase::GameOver {
            runs += 1;
            match board.add_score(state.score(), state.frame_count) {
                Some(rank) => log::info!(
                    "run {} over: {} points, rank {}",
                    runs,
                    state.score(),
                    rank
                ),
                None => log::info!("run {} over: {} points", runs, state.score()),
            }
            if runs >= DEMO_RUNS {
                break;
            }
        }
        last_phase = state.phase;
    }

    println!("best score: {}", state.best_score());
    for (i, entry) in board.entries.iter().enumerate() {
        println!(
            "  {}. {} points ({} ticks)",
            i + 1,
            entry.score,
            entry.ticks
        );
    }
}
