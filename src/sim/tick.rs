//! Per-tick simulation update
//!
//! One call to `tick` advances the session by exactly one frame. The order
//! within a running tick is fixed: commands, player physics, obstacle
//! advance, spawn, reap, collision scan, score, difficulty rescale. A
//! game-over tick only counts the restart cooldown.

use super::collision::obstacle_hits_player;
use super::obstacle::ObstacleKind;
use super::state::{night_for_score, speed_for_score, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start a jump (ignored while airborne or ducking)
    pub jump: bool,
    /// Toggle between ducking and standing (ignored while airborne)
    pub duck_or_stand: bool,
    /// Restart after a game over (ignored until the cooldown latches)
    pub restart: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle: bool,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    let mut input = input.clone();
    if input.idle {
        autopilot(state, &mut input);
    }

    match state.phase {
        GamePhase::GameOver => {
            // Nothing moves on the game-over screen; the cooldown counts up
            // and latches one past the delay, which is the accept signal.
            state.cooldown = (state.cooldown + 1).min(RESTART_COOLDOWN_LATCH);
            if input.restart && state.restart_ready() {
                state.restart();
            }
        }
        GamePhase::Running => {
            apply_commands(state, &input);

            state.player.update();
            state.stream.advance(state.game_speed);
            state
                .stream
                .spawn(state.frame_count, state.game_speed, &state.tuning, &mut state.rng);
            state.stream.reap();

            let hit = state
                .stream
                .obstacles()
                .iter()
                .any(|o| obstacle_hits_player(o, &state.player));
            if hit {
                log::info!(
                    "game over at {} points (best {})",
                    state.scores.score(),
                    state.scores.best()
                );
                state.phase = GamePhase::GameOver;
                state.cooldown = 0;
                return;
            }

            state.scores.tick();
            state.game_speed = speed_for_score(state.scores.score());
            state.night = night_for_score(state.scores.score());
            state.frame_count += 1;
        }
    }
}

/// Apply this tick's commands to the player. Preconditions are enforced by
/// the player itself; rejected commands are silent no-ops.
fn apply_commands(state: &mut GameState, input: &TickInput) {
    if input.jump {
        state.player.jump();
    }
    if input.duck_or_stand {
        if state.player.ducking {
            state.player.stand();
        } else {
            state.player.duck();
        }
    }
}

/// Ticks of warning the autopilot wants before an obstacle arrives
const AUTOPILOT_LOOKAHEAD_TICKS: f32 = 14.0;

/// Demo-mode pilot: pick the evasive pose for the nearest threat ahead and
/// restart as soon as the cooldown allows. Heuristic, not optimal - it only
/// has to keep a demo session interesting.
fn autopilot(state: &GameState, input: &mut TickInput) {
    if state.phase == GamePhase::GameOver {
        input.restart = state.restart_ready();
        return;
    }

    let player = &state.player;
    let threat = state
        .stream
        .obstacles()
        .iter()
        .filter(|o| o.bounds().right() > player.bounds().left())
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

    let Some(obstacle) = threat else {
        // Clear road: stand back up between threats
        input.duck_or_stand = player.ducking;
        return;
    };

    let gap = obstacle.bounds().left() - player.bounds().right();
    let closing_per_tick = OBSTACLE_BASE_SPEED + state.game_speed as f32 * OBSTACLE_SPEED_SCALE;

    if gap > closing_per_tick * AUTOPILOT_LOOKAHEAD_TICKS {
        input.duck_or_stand = player.ducking;
        return;
    }

    let duck_to_evade =
        matches!(obstacle.kind, ObstacleKind::Flyer { .. }) && !obstacle.is_low_flying();
    if duck_to_evade {
        input.duck_or_stand = !player.ducking;
    } else {
        // Hazards and low flyers are jumped; a ducking pilot has to stand
        // first since jumps are refused in the duck stance
        input.duck_or_stand = player.ducking;
        input.jump = true;
    }
}
