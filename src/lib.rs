//! Dino Dash - a single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacle stream, collisions)
//! - `tuning`: Data-driven game balance
//! - `highscores`: In-memory leaderboard for the process lifetime
//!
//! Rendering and input polling are external collaborators: a frontend drives
//! `sim::tick` once per frame and reads the state back for drawing.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (y grows downward, screen convention)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
    /// Ground line; grounded entities rest their bottom edge here
    pub const GROUND_LEVEL: f32 = 340.0;

    /// Player defaults - x never changes, only y
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_HEIGHT_DUCK: f32 = 30.0;
    /// Initial vertical velocity of a jump (negative = upward)
    pub const JUMP_VELOCITY: f32 = -15.0;
    /// Gravity step added to vertical velocity each tick
    pub const GRAVITY: f32 = 1.0;

    /// Obstacle defaults
    pub const OBSTACLE_BASE_SPEED: f32 = 5.0;
    /// Extra horizontal speed per game-speed level
    pub const OBSTACLE_SPEED_SCALE: f32 = 0.15;
    /// Obstacles enter at the right edge, off-screen
    pub const OBSTACLE_SPAWN_X: f32 = 800.0;
    /// Obstacles past this x are reaped
    pub const OBSTACLE_REAP_X: f32 = -50.0;
    pub const HAZARD_WIDTH: f32 = 20.0;
    pub const HAZARD_HEIGHTS: [f32; 7] = [20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
    pub const FLYER_WIDTH: f32 = 30.0;
    pub const FLYER_HEIGHT: f32 = 20.0;
    pub const FLYER_ALTITUDES: [f32; 4] = [270.0, 280.0, 315.0, 320.0];
    /// Flyers at or below this height on screen (y >= threshold) are
    /// low-flying and cleared by jumping; the rest are cleared by ducking
    pub const LOW_FLYER_ALTITUDE: f32 = 310.0;
    /// Vertical slack granted to a ducking player under a high-flyer
    pub const DUCK_CLEARANCE: f32 = 20.0;
    /// Wing animation toggles every this many ticks (cosmetic only)
    pub const WING_FLAP_INTERVAL: u32 = 5;

    /// Difficulty scaling
    pub const BASE_GAME_SPEED: u32 = 5;
    pub const MAX_GAME_SPEED: u32 = 12;
    /// Score points per speed level increase
    pub const SPEED_SCORE_STEP: u32 = 200;
    /// Score points per day/night alternation
    pub const NIGHT_SCORE_STEP: u32 = 700;

    /// Ticks the game-over screen holds before a restart is accepted
    pub const RESTART_COOLDOWN_TICKS: u32 = 90;
    /// Cooldown latch value; the counter stops here and restart is honored
    pub const RESTART_COOLDOWN_LATCH: u32 = RESTART_COOLDOWN_TICKS + 1;
}

/// Top edge of a grounded entity of the given height
#[inline]
pub fn ground_top(height: f32) -> f32 {
    consts::GROUND_LEVEL - height
}
