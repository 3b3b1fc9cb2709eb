//! Game state and core simulation types
//!
//! Everything the per-tick update loop mutates lives here. The session
//! (`GameState`) exclusively owns the player, the obstacle stream, the
//! scoreboard and the RNG - there is no global mutable state.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use glam::Vec2;

use super::obstacle::ObstacleStream;
use super::rect::Rect;
use crate::consts::*;
use crate::ground_top;
use crate::tuning::Tuning;

/// The player avatar. x is pinned to its lane offset; only y moves.
///
/// `jumping` and `ducking` are mutually exclusive at any instant: `jump`
/// refuses while ducking and `duck` refuses while airborne.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity, only meaningful while jumping (negative = upward)
    pub velocity_y: f32,
    pub jumping: bool,
    pub ducking: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Standing on the ground at the lane offset
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, ground_top(PLAYER_HEIGHT)),
            velocity_y: 0.0,
            jumping: false,
            ducking: false,
        }
    }

    /// Start a jump. Silently ignored while airborne or ducking.
    pub fn jump(&mut self) {
        if !self.jumping && !self.ducking {
            self.jumping = true;
            self.velocity_y = JUMP_VELOCITY;
        }
    }

    /// Drop into the ducking stance. Silently ignored while airborne.
    pub fn duck(&mut self) {
        if !self.jumping {
            self.ducking = true;
            self.pos.y = ground_top(PLAYER_HEIGHT_DUCK);
        }
    }

    /// Return to the standing stance. Always succeeds.
    pub fn stand(&mut self) {
        self.ducking = false;
        self.pos.y = ground_top(PLAYER_HEIGHT);
    }

    /// Integrate one tick of vertical physics. Grounded poses are inert;
    /// a jump follows the velocity, gains one gravity step, and snaps back
    /// to the exact ground position on landing.
    pub fn update(&mut self) {
        debug_assert!(!(self.jumping && self.ducking));
        if !self.jumping {
            return;
        }

        self.pos.y += self.velocity_y;
        self.velocity_y += GRAVITY;

        if self.pos.y >= ground_top(PLAYER_HEIGHT) {
            self.pos.y = ground_top(PLAYER_HEIGHT);
            self.jumping = false;
            self.velocity_y = 0.0;
        }
    }

    /// Effective height of the current pose
    pub fn height(&self) -> f32 {
        if self.ducking {
            PLAYER_HEIGHT_DUCK
        } else {
            PLAYER_HEIGHT
        }
    }

    pub fn width(&self) -> f32 {
        PLAYER_WIDTH
    }

    /// Hitbox of the current pose
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width(), self.height()))
    }
}

/// Speed level for a score: pure recomputation, clamped at the max
pub fn speed_for_score(score: u32) -> u32 {
    (BASE_GAME_SPEED + score / SPEED_SCORE_STEP).min(MAX_GAME_SPEED)
}

/// Day/night flag for a score: alternates every `NIGHT_SCORE_STEP` points
pub fn night_for_score(score: u32) -> bool {
    (score / NIGHT_SCORE_STEP) % 2 == 1
}

/// Score counter plus the process-lifetime best
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
    best: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// One point per running tick; the best never decreases
    pub fn tick(&mut self) {
        self.score += 1;
        self.best = self.best.max(self.score);
    }

    /// Start a fresh run. The best survives across resets.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; a cooldown gates the restart
    GameOver,
}

/// One complete game session. Sole owner and mutator of all gameplay state;
/// a frontend drives it through `sim::tick` and reads the fields back.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, recorded for log correlation
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub player: Player,
    pub stream: ObstacleStream,
    pub scores: ScoreBoard,
    pub phase: GamePhase,
    /// Current speed level, recomputed from the score each tick
    pub game_speed: u32,
    /// Day/night flag, recomputed from the score each tick
    pub night: bool,
    /// Simulation tick counter, drives the spawn cadence
    pub frame_count: u64,
    /// Ticks spent on the game-over screen, latched at the accept value
    pub cooldown: u32,
}

impl GameState {
    /// New session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        tuning.validate();
        log::info!("new session, seed {seed}");
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            player: Player::new(),
            stream: ObstacleStream::new(),
            scores: ScoreBoard::new(),
            phase: GamePhase::Running,
            game_speed: BASE_GAME_SPEED,
            night: false,
            frame_count: 0,
            cooldown: 0,
        }
    }

    /// Begin a fresh run after a game over. Obstacles, score, speed, player
    /// pose and counters reset; the best score and the RNG stream carry over.
    pub fn restart(&mut self) {
        log::info!(
            "restart after {} points (best {})",
            self.scores.score(),
            self.scores.best()
        );
        self.stream.clear();
        self.scores.reset();
        self.player = Player::new();
        self.phase = GamePhase::Running;
        self.game_speed = BASE_GAME_SPEED;
        self.night = false;
        self.frame_count = 0;
        self.cooldown = 0;
    }

    /// Whether a restart command would be honored right now
    pub fn restart_ready(&self) -> bool {
        self.phase == GamePhase::GameOver && self.cooldown >= RESTART_COOLDOWN_LATCH
    }

    /// Ticks left until a restart is accepted (game over only)
    pub fn cooldown_remaining(&self) -> u32 {
        RESTART_COOLDOWN_LATCH.saturating_sub(self.cooldown)
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn best_score(&self) -> u32 {
        self.scores.best()
    }
}
